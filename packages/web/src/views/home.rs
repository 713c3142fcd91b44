use dioxus::prelude::*;

use store::AlertKind;
use ui::{use_api, use_session};

use super::{use_pure_mode, BookCards};

#[component]
pub fn Home() -> Element {
    use_pure_mode(false);
    let api = use_api();
    let mut session = use_session();

    let summary = use_resource(move || {
        let api = api.clone();
        async move {
            session.with_mut(|s| s.begin_loading());
            let result = api.index(8, 8).await;
            session.with_mut(|s| s.end_loading());
            match result {
                Ok(summary) => Some(summary),
                Err(err) => {
                    tracing::error!("index fetch failed: {err}");
                    let message = err.user_message();
                    session.with_mut(|s| s.show_alert("/", message, AlertKind::Error));
                    None
                }
            }
        }
    });

    let content = match summary.read().as_ref() {
        Some(Some(summary)) => rsx! {
            BookCards { title: "New arrivals", books: summary.new_books.clone() }
            BookCards { title: "Discover", books: summary.random_books.clone() }
        },
        _ => rsx! {},
    };

    rsx! {
        section { class: "home",
            {content}
        }
    }
}
