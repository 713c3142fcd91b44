use dioxus::prelude::*;

use super::use_pure_mode;
use crate::routes::Route;

/// Catch-all page; every path that matches no other route entry lands here.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_pure_mode(false);
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "not-found",
            h1 { "Page not found" }
            p { "No page exists at " code { "{path}" } "." }
            Link { to: Route::Home {}, "Back to the library" }
        }
    }
}
