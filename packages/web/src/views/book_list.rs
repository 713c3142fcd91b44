//! Paged book listings: recent arrivals, popular books, search results, and
//! the books of one meta category. All four share the card grid and differ
//! only in which API call feeds it.

use dioxus::prelude::*;

use store::AlertKind;
use ui::{use_api, use_session};

use super::use_pure_mode;
use crate::routes::{BookId, MetaKind, Route};

/// Card grid shared by the listing pages and the landing page.
#[component]
pub fn BookCards(title: String, books: Vec<api::Book>) -> Element {
    rsx! {
        section { class: "book-cards",
            h2 { "{title}" }
            ul { class: "book-grid",
                for book in books {
                    li { key: "{book.id}", class: "book-card",
                        Link { to: Route::BookDetail { book_id: BookId::from(book.id) },
                            img { src: "{book.thumb}", alt: "{book.title}" }
                            span { class: "book-title", "{book.title}" }
                            span { class: "book-author", "{book.author}" }
                        }
                    }
                }
            }
        }
    }
}

/// Render one fetched page of books, or nothing while the fetch is pending
/// (the global loading indicator covers that state).
fn list_content(list: &Resource<Option<api::BookList>>) -> Element {
    match list.read().as_ref() {
        Some(Some(list)) => {
            let heading = format!("{} ({})", list.title, list.total);
            rsx! {
                BookCards { title: heading, books: list.books.clone() }
            }
        }
        _ => rsx! {},
    }
}

/// Run one list fetch with the loading flag raised, surfacing failures
/// through the alert slot of the page at `target`.
async fn fetch_list(
    mut session: Signal<store::SessionStore>,
    target: String,
    fetch: impl std::future::Future<Output = Result<api::BookList, api::ApiError>>,
) -> Option<api::BookList> {
    session.with_mut(|s| s.begin_loading());
    let result = fetch.await;
    session.with_mut(|s| s.end_loading());
    match result {
        Ok(list) => Some(list),
        Err(err) => {
            tracing::error!("book list fetch failed: {err}");
            let message = err.user_message();
            session.with_mut(|s| s.show_alert(target, message, AlertKind::Error));
            None
        }
    }
}

#[component]
pub fn Recent() -> Element {
    use_pure_mode(false);
    let api = use_api();
    let session = use_session();

    let list = use_resource(move || {
        let api = api.clone();
        async move { fetch_list(session, "/recent".to_string(), api.recent_books(0)).await }
    });

    rsx! {
        {list_content(&list)}
    }
}

#[component]
pub fn Hot() -> Element {
    use_pure_mode(false);
    let api = use_api();
    let session = use_session();

    let list = use_resource(move || {
        let api = api.clone();
        async move { fetch_list(session, "/hot".to_string(), api.hot_books(0)).await }
    });

    rsx! {
        {list_content(&list)}
    }
}

#[component]
pub fn Search() -> Element {
    use_pure_mode(false);
    let api = use_api();
    let session = use_session();
    let term = search_term().unwrap_or_default();

    let list = use_resource(use_reactive!(|term| {
        let api = api.clone();
        async move {
            if term.trim().is_empty() {
                return None;
            }
            fetch_list(session, "/search".to_string(), api.search(term.trim(), 0)).await
        }
    }));

    rsx! {
        {list_content(&list)}
    }
}

#[component]
pub fn MetaBooks(kind: MetaKind, name: String) -> Element {
    use_pure_mode(false);
    let api = use_api();
    let session = use_session();

    let list = use_resource(use_reactive!(|kind, name| {
        let api = api.clone();
        async move {
            let target = format!("/{kind}/{name}");
            fetch_list(session, target, api.meta_books(kind.as_str(), &name, 0)).await
        }
    }));

    rsx! {
        {list_content(&list)}
    }
}

/// `?name=` from the document location; the router leaves query strings to
/// the page.
fn search_term() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        let raw = find_param(&search, "name")?;
        js_sys::decode_uri_component(raw).ok().map(String::from)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg_attr(not(any(test, target_arch = "wasm32")), allow(dead_code))]
fn find_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then_some(v)
    })
}

#[cfg(test)]
mod tests {
    use super::find_param;

    #[test]
    fn find_param_picks_the_right_pair() {
        assert_eq!(find_param("?name=rust&start=60", "name"), Some("rust"));
        assert_eq!(find_param("name=rust", "name"), Some("rust"));
        assert_eq!(find_param("?start=60", "name"), None);
        assert_eq!(find_param("", "name"), None);
        assert_eq!(find_param("?name", "name"), None);
    }
}
