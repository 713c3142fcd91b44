//! # Route table
//!
//! The application's navigable surface as a single `Routable` enum. Matching
//! is structural: static segments match literally, `BookId` captures accept
//! digits only, `MetaKind` captures accept the five meta category names, and
//! the trailing catch-all makes resolution total -- every path produces
//! exactly one page, unmatched ones landing on [`NotFound`].

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;

use crate::views::*;

/// Book identifier captured from a path segment.
///
/// Parsing accepts one or more ASCII digits and nothing else -- no sign, no
/// surrounding whitespace, no length cap. The digit sequence is stored
/// verbatim, so rendering a route echoes exactly what was captured
/// (`/book/0042` keeps its leading zero) and the backend receives the id
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        BookId(id.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookIdParseError;

impl fmt::Display for BookIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("book id must be a decimal digit sequence")
    }
}

impl FromStr for BookId {
    type Err = BookIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookIdParseError);
        }
        Ok(BookId(s.to_string()))
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of meta category kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaKind {
    Publisher,
    Tag,
    Author,
    Rating,
    Series,
}

impl MetaKind {
    pub const ALL: [MetaKind; 5] = [
        MetaKind::Publisher,
        MetaKind::Tag,
        MetaKind::Author,
        MetaKind::Rating,
        MetaKind::Series,
    ];

    /// The lowercase segment/API name.
    pub fn as_str(self) -> &'static str {
        match self {
            MetaKind::Publisher => "publisher",
            MetaKind::Tag => "tag",
            MetaKind::Author => "author",
            MetaKind::Rating => "rating",
            MetaKind::Series => "series",
        }
    }

    /// Human-readable heading for listing pages.
    pub fn label(self) -> &'static str {
        match self {
            MetaKind::Publisher => "Publishers",
            MetaKind::Tag => "Tags",
            MetaKind::Author => "Authors",
            MetaKind::Rating => "Ratings",
            MetaKind::Series => "Series",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaKindParseError;

impl fmt::Display for MetaKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of: publisher, tag, author, rating, series")
    }
}

impl FromStr for MetaKind {
    type Err = MetaKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publisher" => Ok(MetaKind::Publisher),
            "tag" => Ok(MetaKind::Tag),
            "author" => Ok(MetaKind::Author),
            "rating" => Ok(MetaKind::Rating),
            "series" => Ok(MetaKind::Series),
            _ => Err(MetaKindParseError),
        }
    }
}

impl fmt::Display for MetaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/nav")]
        BookNav {},
        #[route("/install")]
        Install {},
        #[route("/search")]
        Search {},
        #[route("/recent")]
        Recent {},
        #[route("/hot")]
        Hot {},
        #[route("/admin")]
        Admin {},
        #[route("/welcome")]
        Welcome {},
        #[route("/login")]
        Login {},
        #[route("/logout")]
        Logout {},
        #[route("/signup")]
        Signup {},
        #[route("/user/detail")]
        UserDetail {},
        #[route("/user/history")]
        UserHistory {},
        #[route("/active/success")]
        ActiveSuccess {},
        #[route("/book/:book_id")]
        BookDetail { book_id: BookId },
        #[route("/book/:book_id/edit")]
        BookEdit { book_id: BookId },
        #[route("/:kind")]
        MetaList { kind: MetaKind },
        #[route("/:kind/:name")]
        MetaBooks { kind: MetaKind, name: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> Route {
        // The catch-all makes resolution total, so parsing never fails.
        path.parse::<Route>().unwrap()
    }

    #[test]
    fn static_paths_resolve_to_their_pages() {
        assert_eq!(resolve("/"), Route::Home {});
        assert_eq!(resolve("/nav"), Route::BookNav {});
        assert_eq!(resolve("/recent"), Route::Recent {});
        assert_eq!(resolve("/hot"), Route::Hot {});
        assert_eq!(resolve("/login"), Route::Login {});
        assert_eq!(resolve("/user/detail"), Route::UserDetail {});
        assert_eq!(resolve("/active/success"), Route::ActiveSuccess {});
    }

    #[test]
    fn numeric_book_id_is_captured() {
        assert_eq!(
            resolve("/book/123"),
            Route::BookDetail {
                book_id: BookId::from(123)
            }
        );
        assert_eq!(
            resolve("/book/123/edit"),
            Route::BookEdit {
                book_id: BookId::from(123)
            }
        );
    }

    #[test]
    fn long_digit_runs_are_still_book_ids() {
        // Any digit sequence matches, regardless of magnitude.
        let id = "4294967296999".parse::<BookId>().unwrap();
        assert_eq!(
            resolve("/book/4294967296999"),
            Route::BookDetail { book_id: id }
        );
    }

    #[test]
    fn non_digit_book_id_falls_through_to_not_found() {
        assert!(matches!(resolve("/book/abc"), Route::NotFound { .. }));
        assert!(matches!(resolve("/book/12x"), Route::NotFound { .. }));
        assert!(matches!(resolve("/book/-3"), Route::NotFound { .. }));
        assert!(matches!(resolve("/book/abc/edit"), Route::NotFound { .. }));
    }

    #[test]
    fn meta_kinds_resolve_to_meta_pages() {
        for kind in MetaKind::ALL {
            assert_eq!(
                resolve(&format!("/{kind}")),
                Route::MetaList { kind },
                "kind {kind}"
            );
        }
        assert_eq!(
            resolve("/tag/rust"),
            Route::MetaBooks {
                kind: MetaKind::Tag,
                name: "rust".to_string()
            }
        );
    }

    #[test]
    fn unknown_meta_kind_falls_through() {
        assert!(matches!(resolve("/genre"), Route::NotFound { .. }));
        assert!(matches!(resolve("/genre/rust"), Route::NotFound { .. }));
        // Kind names are exact: no case folding.
        assert!(matches!(resolve("/Tag"), Route::NotFound { .. }));
    }

    #[test]
    fn statics_win_over_the_meta_capture() {
        // "/recent" also has one segment, but the static entry resolves first.
        assert_eq!(resolve("/recent"), Route::Recent {});
        assert_eq!(resolve("/search"), Route::Search {});
    }

    #[test]
    fn arbitrary_paths_resolve_to_not_found() {
        for path in ["/no/such/page", "/a/b/c/d", "/book", "/book/1/2/3"] {
            assert!(
                matches!(resolve(path), Route::NotFound { .. }),
                "path {path}"
            );
        }
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(
            Route::BookDetail {
                book_id: BookId::from(42)
            }
            .to_string(),
            "/book/42"
        );
        // Captured sequences render verbatim, leading zeros included.
        assert_eq!(resolve("/book/0042").to_string(), "/book/0042");
        assert_eq!(
            Route::MetaBooks {
                kind: MetaKind::Series,
                name: "dune".to_string()
            }
            .to_string(),
            "/series/dune"
        );
    }

    #[test]
    fn book_id_parsing_is_digits_only() {
        assert_eq!("7".parse::<BookId>(), Ok(BookId::from(7)));
        assert_eq!("0042".parse::<BookId>().unwrap().as_str(), "0042");
        for bad in ["", "+5", "-5", " 7", "7 ", "1.2", "1e3", "٧"] {
            assert!(bad.parse::<BookId>().is_err(), "input {bad:?}");
        }
    }

    #[test]
    fn meta_kind_names_roundtrip() {
        for kind in MetaKind::ALL {
            assert_eq!(kind.as_str().parse::<MetaKind>(), Ok(kind));
        }
        assert!("genre".parse::<MetaKind>().is_err());
    }
}
