use dioxus::prelude::*;

use crate::use_session;

/// The single transient notification slot. Shown whenever `alert.visible`;
/// dismissal keeps the message fields so the alert can be re-inspected until
/// the next one overwrites it.
#[component]
pub fn AlertBar() -> Element {
    let mut session = use_session();
    let alert = session.read().state().alert.clone();

    if !alert.visible {
        return rsx! {};
    }

    rsx! {
        div { class: "alert alert-{alert.kind}", role: "alert",
            span { class: "alert-message", "{alert.message}" }
            button {
                class: "alert-dismiss",
                onclick: move |_| session.with_mut(|s| s.dismiss_alert()),
                "\u{00d7}"
            }
        }
    }
}
