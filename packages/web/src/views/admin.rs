use dioxus::prelude::*;

use ui::use_session;

use super::use_pure_mode;
use crate::routes::Route;

/// Administration landing page. Management actions live on the backend; this
/// page only gates on the admin flag and links the relevant places.
#[component]
pub fn Admin() -> Element {
    use_pure_mode(false);
    let session = use_session();
    let user = session.read().state().user.clone();

    if !user.is_admin {
        return rsx! {
            section { class: "admin",
                h1 { "Administration" }
                p { "This page requires administrator rights." }
                Link { to: Route::Login {}, "Sign in" }
            }
        };
    }

    rsx! {
        section { class: "admin",
            h1 { "Administration" }
            ul {
                li { Link { to: Route::Recent {}, "Review recent uploads" } }
                li { Link { to: Route::BookNav {}, "Curate categories" } }
            }
        }
    }
}
