//! Serde models for the backend's JSON responses.
//!
//! Only the fields the client renders are kept; everything else in the
//! backend's payloads is ignored. All list-card fields default so that the
//! sparser list endpoints and the full detail endpoint share one `Book` type.

use serde::{Deserialize, Serialize};

/// A book card/detail as formatted by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Book {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    /// Comma-joined author display string.
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Full-size cover URL.
    #[serde(default, rename = "img")]
    pub cover: String,
    /// Thumbnail cover URL.
    #[serde(default)]
    pub thumb: String,
}

/// `/api/index` payload: a sample of random and recently added books.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct IndexSummary {
    #[serde(default)]
    pub random_books: Vec<Book>,
    #[serde(default)]
    pub new_books: Vec<Book>,
}

/// Paged book list (`/api/recent`, `/api/hot`, `/api/search`, `/api/{kind}/{name}`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BookList {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub books: Vec<Book>,
}

/// `/api/book/{id}` payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BookDetail {
    pub book: Book,
    /// Address the backend pushes to Kindle from, shown on the detail page.
    #[serde(default)]
    pub kindle_sender: String,
}

/// One category entry of a meta listing, e.g. a tag with its book count.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MetaItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

/// `/api/{kind}` payload: all categories of one meta kind.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MetaList {
    #[serde(default)]
    pub meta: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<MetaItem>,
    #[serde(default)]
    pub total: u64,
}

/// One section of `/api/book/nav`: a legend plus the tags shelved under it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NavSection {
    #[serde(default)]
    pub legend: String,
    #[serde(default)]
    pub tags: Vec<MetaItem>,
}

/// JSON body of `POST /api/book/{id}/edit`. Only the fields present are
/// applied by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BookEditRequest {
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub comments: String,
    pub tags: Vec<String>,
}

/// Form body of `/api/user/sign_up`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub nickname: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_card_from_list_payload() {
        let json = r#"{
            "id": 42,
            "title": "The Rust Programming Language",
            "author": "Steve Klabnik, Carol Nichols",
            "authors": ["Steve Klabnik", "Carol Nichols"],
            "publisher": "No Starch Press",
            "comments": "The book.",
            "rating": 9.5,
            "tags": ["rust", "programming"],
            "img": "https://cdn.example.com/get/cover/42.jpg?t=1",
            "thumb": "https://cdn.example.com/get/thumb_60x80/42.jpg?t=1",
            "count_visit": 7
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, 42);
        assert_eq!(book.authors.len(), 2);
        assert_eq!(book.rating, Some(9.5));
        assert!(book.cover.ends_with("42.jpg?t=1"));
    }

    #[test]
    fn detail_allows_missing_optional_fields() {
        let json = r#"{"book": {"id": 7, "title": "Untitled", "rating": null}}"#;
        let detail: BookDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.book.id, 7);
        assert_eq!(detail.book.rating, None);
        assert!(detail.kindle_sender.is_empty());
    }

    #[test]
    fn meta_list_payload() {
        let json = r#"{
            "meta": "tag",
            "title": "All tags",
            "items": [{"id": 1, "name": "rust", "count": 12}, {"name": "fiction", "count": 3}],
            "total": 2
        }"#;
        let list: MetaList = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].name, "rust");
        assert_eq!(list.items[0].count, 12);
    }
}
