use dioxus::prelude::*;

use crate::{use_config, use_session};

/// Top chrome bar. Renders nothing while the store's `nav_visible` flag is
/// down (pure-mode pages such as login or the install wizard). Navigation
/// links are supplied by the application, which owns the typed routes.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();
    let config = use_config();

    if !session.read().state().nav_visible {
        return rsx! {};
    }

    let user = session.read().state().user.clone();

    rsx! {
        header { class: "navbar",
            span { class: "navbar-title", "{config.title}" }
            nav { class: "navbar-links", {children} }
            span { class: "navbar-user",
                if user.is_login {
                    img { class: "navbar-avatar", src: "{user.avatar}" }
                    span { "{user.nickname}" }
                } else {
                    span { "Guest" }
                }
            }
        }
    }
}
