use dioxus::prelude::*;

use store::AlertKind;
use ui::{use_api, use_session};

use super::use_pure_mode;
use crate::routes::Route;

/// Local sign-in form. A successful sign-in refreshes the session snapshot
/// from `/api/user/info` so the store's `user` and `system` are replaced in
/// one operation.
#[component]
pub fn Login() -> Element {
    use_pure_mode(true);
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Already signed in: leave for the home page from an effect, keeping
    // render free of navigation side effects.
    use_effect(move || {
        if session.read().state().user.is_login {
            nav.replace(Route::Home {});
        }
    });
    if session.read().state().user.is_login {
        return rsx! {};
    }

    let onsubmit = move |_| {
        let api = api.clone();
        async move {
            if submitting() {
                return;
            }
            submitting.set(true);
            let result = match api.sign_in(&username(), &password()).await {
                Ok(()) => api.user_info().await,
                Err(err) => Err(err),
            };
            match result {
                Ok(scope) => {
                    session.with_mut(|s| s.login(scope));
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("sign in failed: {err}");
                    let message = err.user_message();
                    session.with_mut(|s| s.show_alert("/login", message, AlertKind::Error));
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        form { class: "login", onsubmit: onsubmit,
            h1 { "Sign in" }
            label { "Username"
                input {
                    name: "username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
            }
            label { "Password"
                input {
                    r#type: "password",
                    name: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
            }
            button { r#type: "submit", disabled: submitting(), "Sign in" }
            Link { to: Route::Signup {}, "No account yet? Sign up" }
        }
    }
}
