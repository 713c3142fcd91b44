use dioxus::prelude::*;

use crate::use_session;

/// Global loading indicator, visible while the store's `loading` flag is up.
#[component]
pub fn Loading() -> Element {
    let session = use_session();

    if !session.read().state().loading {
        return rsx! {};
    }

    rsx! {
        div { class: "loading", aria_busy: "true", "Loading..." }
    }
}
