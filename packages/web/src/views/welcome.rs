use dioxus::prelude::*;

use ui::use_config;

use super::use_pure_mode;
use crate::routes::Route;

/// Greeting page for an empty library.
#[component]
pub fn Welcome() -> Element {
    use_pure_mode(true);
    let config = use_config();

    rsx! {
        section { class: "welcome",
            h1 { "Welcome to {config.title}" }
            p { "The library has no books yet. Sign in as an administrator to add some." }
            Link { to: Route::Login {}, "Sign in" }
        }
    }
}
