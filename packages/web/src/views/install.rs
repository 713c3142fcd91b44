use dioxus::prelude::*;

use super::use_pure_mode;
use crate::routes::Route;

/// First-run wizard shown while the backend reports itself uninstalled. The
/// actual setup happens server-side; this page explains the state.
#[component]
pub fn Install() -> Element {
    use_pure_mode(true);

    rsx! {
        section { class: "install",
            h1 { "Set up your library" }
            p { "The server is not configured yet. Run the installer on the backend, then reload this page." }
            Link { to: Route::Home {}, "Back to the library" }
        }
    }
}
