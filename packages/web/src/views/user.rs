//! Account pages: profile, reading history, and the activation landing page.

use dioxus::prelude::*;

use ui::use_session;

use super::use_pure_mode;
use crate::routes::Route;

#[component]
pub fn UserDetail() -> Element {
    use_pure_mode(false);
    let session = use_session();
    let user = session.read().state().user.clone();

    if !user.is_login {
        return rsx! {
            p { "Please " Link { to: Route::Login {}, "sign in" } " to see your profile." }
        };
    }

    rsx! {
        section { class: "user-detail",
            h1 { "My page" }
            img { class: "avatar", src: "{user.avatar}", alt: "{user.nickname}" }
            dl {
                dt { "Nickname" }
                dd { "{user.nickname}" }
                dt { "Kindle email" }
                dd {
                    if user.kindle_email.is_empty() {
                        "not configured"
                    } else {
                        "{user.kindle_email}"
                    }
                }
                dt { "Role" }
                dd { if user.is_admin { "administrator" } else { "reader" } }
            }
            Link { to: Route::UserHistory {}, "Reading history" }
        }
    }
}

#[component]
pub fn UserHistory() -> Element {
    use_pure_mode(false);
    let session = use_session();
    let logged_in = session.read().state().user.is_login;

    if !logged_in {
        return rsx! {
            p { "Please " Link { to: Route::Login {}, "sign in" } " to see your history." }
        };
    }

    rsx! {
        section { class: "user-history",
            h1 { "Reading history" }
            p { "Books you visited, favored or pushed appear here." }
        }
    }
}

/// Landing page after a successful account activation link.
#[component]
pub fn ActiveSuccess() -> Element {
    use_pure_mode(true);

    rsx! {
        section { class: "active-success",
            h1 { "Account activated" }
            p { "Your account is active now." }
            Link { to: Route::Login {}, "Continue to sign in" }
        }
    }
}
