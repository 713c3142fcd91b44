use dioxus::prelude::*;

use store::AlertKind;
use ui::{use_api, use_session};

use super::use_pure_mode;
use crate::routes::{BookId, MetaKind, Route};

#[component]
pub fn BookDetail(book_id: BookId) -> Element {
    use_pure_mode(false);
    let api = use_api();
    let mut session = use_session();
    let is_admin = session.read().state().user.is_admin;

    let detail = use_resource(use_reactive!(|book_id| {
        let api = api.clone();
        async move {
            session.with_mut(|s| s.begin_loading());
            let result = api.book(book_id.as_str()).await;
            session.with_mut(|s| s.end_loading());
            match result {
                Ok(detail) => Some(detail),
                Err(err) => {
                    tracing::error!("book {book_id} fetch failed: {err}");
                    let message = err.user_message();
                    session.with_mut(|s| {
                        s.show_alert(format!("/book/{book_id}"), message, AlertKind::Error)
                    });
                    None
                }
            }
        }
    }));

    let content = match detail.read().as_ref() {
        Some(Some(detail)) => {
            let book = &detail.book;
            rsx! {
                article { class: "book-detail",
                    img { class: "book-cover", src: "{book.cover}", alt: "{book.title}" }
                    h1 { "{book.title}" }
                    dl {
                        dt { "Authors" }
                        dd {
                            for author in book.authors.clone() {
                                Link {
                                    to: Route::MetaBooks { kind: MetaKind::Author, name: author.clone() },
                                    "{author} "
                                }
                            }
                        }
                        dt { "Publisher" }
                        dd {
                            Link {
                                to: Route::MetaBooks {
                                    kind: MetaKind::Publisher,
                                    name: book.publisher.clone(),
                                },
                                "{book.publisher}"
                            }
                        }
                        if let Some(rating) = book.rating {
                            dt { "Rating" }
                            dd { "{rating}" }
                        }
                        dt { "Tags" }
                        dd {
                            for tag in book.tags.clone() {
                                Link {
                                    to: Route::MetaBooks { kind: MetaKind::Tag, name: tag.clone() },
                                    "{tag} "
                                }
                            }
                        }
                    }
                    p { class: "book-comments", "{book.comments}" }
                    if !detail.kindle_sender.is_empty() {
                        p { class: "kindle-sender", "Kindle pushes are sent from {detail.kindle_sender}" }
                    }
                    if is_admin {
                        Link { to: Route::BookEdit { book_id }, "Edit metadata" }
                    }
                }
            }
        }
        _ => rsx! {},
    };

    rsx! {
        {content}
    }
}
