use dioxus::prelude::*;

use store::AlertKind;
use ui::{use_api, use_session};

use super::use_pure_mode;
use crate::routes::{MetaKind, Route};

/// Category navigation: the curated tag shelves plus links to the five meta
/// listings.
#[component]
pub fn BookNav() -> Element {
    use_pure_mode(false);
    let api = use_api();
    let mut session = use_session();

    let navs = use_resource(move || {
        let api = api.clone();
        async move {
            session.with_mut(|s| s.begin_loading());
            let result = api.book_nav().await;
            session.with_mut(|s| s.end_loading());
            match result {
                Ok(navs) => Some(navs),
                Err(err) => {
                    tracing::error!("nav fetch failed: {err}");
                    let message = err.user_message();
                    session.with_mut(|s| s.show_alert("/nav", message, AlertKind::Error));
                    None
                }
            }
        }
    });

    let shelves = match navs.read().as_ref() {
        Some(Some(sections)) => rsx! {
            for section in sections.clone() {
                fieldset { class: "nav-shelf",
                    legend { "{section.legend}" }
                    for tag in section.tags {
                        Link {
                            to: Route::MetaBooks { kind: MetaKind::Tag, name: tag.name.clone() },
                            span { class: "nav-tag", "{tag.name} ({tag.count})" }
                        }
                    }
                }
            }
        },
        _ => rsx! {},
    };

    rsx! {
        section { class: "book-nav",
            nav { class: "meta-kinds",
                for kind in MetaKind::ALL {
                    Link { to: Route::MetaList { kind }, "{kind.label()}" }
                }
            }
            {shelves}
        }
    }
}
