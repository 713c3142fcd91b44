use dioxus::prelude::*;

use api::BookEditRequest;
use store::AlertKind;
use ui::{use_api, use_session};

use super::use_pure_mode;
use crate::routes::{BookId, Route};

/// Metadata edit form. Loads the current fields, posts the edited set back,
/// and returns to the detail page on success.
#[component]
pub fn BookEdit(book_id: BookId) -> Element {
    use_pure_mode(false);
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut authors = use_signal(String::new);
    let mut publisher = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut comments = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let loader_api = api.clone();
    let _loader = use_resource(use_reactive!(|book_id| {
        let api = loader_api.clone();
        async move {
            session.with_mut(|s| s.begin_loading());
            let result = api.book(book_id.as_str()).await;
            session.with_mut(|s| s.end_loading());
            match result {
                Ok(detail) => {
                    let book = detail.book;
                    title.set(book.title);
                    authors.set(book.authors.join(", "));
                    publisher.set(book.publisher);
                    tags.set(book.tags.join(", "));
                    comments.set(book.comments);
                }
                Err(err) => {
                    tracing::error!("book {book_id} fetch failed: {err}");
                    let message = err.user_message();
                    session.with_mut(|s| {
                        s.show_alert(format!("/book/{book_id}/edit"), message, AlertKind::Error)
                    });
                }
            }
        }
    }));

    let onsubmit = move |_| {
        let api = api.clone();
        let book_id = book_id.clone();
        async move {
            if saving() {
                return;
            }
            saving.set(true);
            let edit = BookEditRequest {
                title: title(),
                authors: split_list(&authors()),
                publisher: publisher(),
                comments: comments(),
                tags: split_list(&tags()),
            };
            let target = format!("/book/{book_id}/edit");
            match api.save_book(book_id.as_str(), &edit).await {
                Ok(()) => {
                    session.with_mut(|s| {
                        s.show_alert(target, "Book metadata saved", AlertKind::Success)
                    });
                    nav.push(Route::BookDetail { book_id });
                }
                Err(err) => {
                    tracing::error!("book {book_id} save failed: {err}");
                    let message = err.user_message();
                    session.with_mut(|s| s.show_alert(target, message, AlertKind::Error));
                }
            }
            saving.set(false);
        }
    };

    rsx! {
        form { class: "book-edit", onsubmit: onsubmit,
            h1 { "Edit book" }
            label { "Title"
                input { value: "{title}", oninput: move |e| title.set(e.value()) }
            }
            label { "Authors (comma separated)"
                input { value: "{authors}", oninput: move |e| authors.set(e.value()) }
            }
            label { "Publisher"
                input { value: "{publisher}", oninput: move |e| publisher.set(e.value()) }
            }
            label { "Tags (comma separated)"
                input { value: "{tags}", oninput: move |e| tags.set(e.value()) }
            }
            label { "Description"
                textarea { value: "{comments}", oninput: move |e| comments.set(e.value()) }
            }
            button { r#type: "submit", disabled: saving(), "Save" }
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list("Steve Klabnik, Carol Nichols,,  "),
            vec!["Steve Klabnik".to_string(), "Carol Nichols".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}
