use dioxus::prelude::*;

use api::SignupRequest;
use store::AlertKind;
use ui::{use_api, use_session};

use super::use_pure_mode;
use crate::routes::Route;

#[component]
pub fn Signup() -> Element {
    use_pure_mode(true);
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let registration_open = session.read().state().system.allows("register");

    let mut username = use_signal(String::new);
    let mut nickname = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |_| {
        let api = api.clone();
        async move {
            if submitting() {
                return;
            }
            submitting.set(true);
            let request = SignupRequest {
                username: username(),
                password: password(),
                nickname: nickname(),
                email: email(),
            };
            match api.sign_up(&request).await {
                Ok(()) => {
                    session.with_mut(|s| {
                        s.show_alert(
                            "/login",
                            "Account created, you can sign in now",
                            AlertKind::Success,
                        )
                    });
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("sign up failed: {err}");
                    let message = err.user_message();
                    session.with_mut(|s| s.show_alert("/signup", message, AlertKind::Error));
                }
            }
            submitting.set(false);
        }
    };

    if !registration_open {
        return rsx! {
            section { class: "signup",
                h1 { "Sign up" }
                p { "Registration is currently closed. Please contact the administrator." }
                Link { to: Route::Login {}, "Back to sign in" }
            }
        };
    }

    rsx! {
        form { class: "signup", onsubmit: onsubmit,
            h1 { "Sign up" }
            label { "Username"
                input { value: "{username}", oninput: move |e| username.set(e.value()) }
            }
            label { "Nickname"
                input { value: "{nickname}", oninput: move |e| nickname.set(e.value()) }
            }
            label { "Email"
                input { r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }
            }
            label { "Password"
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
            }
            button { r#type: "submit", disabled: submitting(), "Create account" }
        }
    }
}
