use dioxus::prelude::*;

use store::AlertKind;
use ui::{use_api, use_session};

use super::use_pure_mode;
use crate::routes::{MetaKind, Route};

/// All categories of one meta kind (tags, authors, ...), each linking to its
/// book listing.
#[component]
pub fn MetaList(kind: MetaKind) -> Element {
    use_pure_mode(false);
    let api = use_api();
    let mut session = use_session();

    let list = use_resource(use_reactive!(|kind| {
        let api = api.clone();
        async move {
            session.with_mut(|s| s.begin_loading());
            let result = api.meta_list(kind.as_str()).await;
            session.with_mut(|s| s.end_loading());
            match result {
                Ok(list) => Some(list),
                Err(err) => {
                    tracing::error!("meta list {kind} fetch failed: {err}");
                    let message = err.user_message();
                    session.with_mut(|s| s.show_alert(format!("/{kind}"), message, AlertKind::Error));
                    None
                }
            }
        }
    }));

    let content = match list.read().as_ref() {
        Some(Some(list)) => rsx! {
            h1 { "{kind.label()} ({list.total})" }
            ul { class: "meta-items",
                for item in list.items.clone() {
                    li { key: "{item.name}",
                        Link {
                            to: Route::MetaBooks { kind, name: item.name.clone() },
                            "{item.name} ({item.count})"
                        }
                    }
                }
            }
        },
        _ => rsx! {},
    };

    rsx! {
        section { class: "meta-list",
            {content}
        }
    }
}
