use dioxus::prelude::*;

use store::AlertKind;
use ui::{use_api, use_session};

use super::use_pure_mode;
use crate::routes::Route;

/// Signs the user out on the backend, resets the session snapshots to their
/// logged-out defaults, and returns home.
#[component]
pub fn Logout() -> Element {
    use_pure_mode(true);
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let _signout = use_resource(move || {
        let api = api.clone();
        async move {
            if let Err(err) = api.sign_out().await {
                // The local session is cleared either way; the cookie is the
                // backend's concern.
                tracing::warn!("sign out request failed: {err}");
            }
            session.with_mut(|s| s.logout());
            session.with_mut(|s| {
                s.show_alert("/", "You have been signed out", AlertKind::Success)
            });
            nav.push(Route::Home {});
        }
    });

    rsx! {
        p { class: "logout", "Signing out..." }
    }
}
