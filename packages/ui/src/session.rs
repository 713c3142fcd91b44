//! Session context and hooks.
//!
//! [`SessionProvider`] constructs the three long-lived objects of the client --
//! the build-time [`AppConfig`], the [`ApiClient`] pointed at it, and the
//! [`SessionStore`] held in a signal -- and injects them via context. Wrap the
//! router with it once at the application root.

use api::ApiClient;
use dioxus::prelude::*;
use store::{AlertKind, AppConfig, SessionStore};

/// The session store signal. Mutations go through
/// `use_session().with_mut(|s| s.some_operation(..))`, which applies the
/// operation, notifies store subscribers synchronously, and re-renders every
/// scope reading the signal.
pub fn use_session() -> Signal<SessionStore> {
    use_context()
}

/// The shared API client.
pub fn use_api() -> ApiClient {
    use_context()
}

/// The build-time application configuration.
pub fn use_config() -> AppConfig {
    use_context()
}

/// Provider component owning the session store and API client.
///
/// On mount it fetches `/api/user/info` and dispatches `Login` with the
/// result, then lowers the global loading flag. Fetch failures surface through
/// the alert slot, the only user-visible error channel.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_context_provider(AppConfig::from_build_env);
    let client = use_context_provider({
        let api_url = config.api_url.clone();
        move || ApiClient::new(api_url)
    });
    let mut session = use_signal(SessionStore::new);
    use_context_provider(|| session);

    let _bootstrap = use_resource(move || {
        let client = client.clone();
        async move {
            match client.user_info().await {
                Ok(scope) => {
                    session.with_mut(|s| s.login(scope));
                }
                Err(err) => {
                    tracing::error!("user info fetch failed: {err}");
                    let message = err.user_message();
                    session.with_mut(|s| s.show_alert("/", message, AlertKind::Error));
                }
            }
            session.with_mut(|s| s.end_loading());
        }
    });

    rsx! {
        {children}
    }
}
