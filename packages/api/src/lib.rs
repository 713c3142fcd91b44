//! # Talebook API client
//!
//! Typed client for the backend's `/api/...` surface. The backend wraps most
//! responses in an envelope whose `err` field is `"ok"` on success and an error
//! code (with a human-readable `msg`) otherwise; [`ApiClient`] unwraps that
//! envelope and reports either outcome through [`ApiError`].
//!
//! The client performs I/O only -- it never touches the session store. Pages
//! sequence store operations around these calls themselves.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

pub mod models;

pub use models::{
    Book, BookDetail, BookEditRequest, BookList, IndexSummary, MetaItem, MetaList, NavSection,
    SignupRequest,
};
use store::{SessionScope, SystemInfo, UserInfo};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with an `err` code other than `"ok"`.
    #[error("{message} ({code})")]
    Backend { code: String, message: String },
}

impl ApiError {
    /// Message suitable for the user-facing alert slot.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "The server could not be reached".to_string(),
            ApiError::Backend { message, code } if message.is_empty() => code.clone(),
            ApiError::Backend { message, .. } => message.clone(),
        }
    }
}

fn ok_code() -> String {
    "ok".to_string()
}

/// Response envelope. Endpoints that omit `err` (e.g. `/api/index`) are
/// treated as successful.
#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default = "ok_code")]
    err: String,
    #[serde(default)]
    msg: String,
    #[serde(flatten)]
    body: T,
}

/// Empty envelope body for endpoints that only acknowledge.
#[derive(Deserialize)]
struct Ack {}

/// Body of `/api/user/info`. `sys` is empty when `detail` is requested.
#[derive(Deserialize)]
struct UserInfoBody {
    user: UserInfo,
    #[serde(default)]
    sys: SystemInfo,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        tracing::trace!(path, "api get");
        let envelope: Envelope<T> = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Self::unwrap(envelope)
    }

    async fn post_form<T: DeserializeOwned, F: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> Result<T, ApiError> {
        tracing::trace!(path, "api post");
        let envelope: Envelope<T> = self
            .http
            .post(self.url(path))
            .form(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Self::unwrap(envelope)
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::trace!(path, "api post json");
        let envelope: Envelope<T> = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Self::unwrap(envelope)
    }

    fn unwrap<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
        if envelope.err == "ok" {
            Ok(envelope.body)
        } else {
            Err(ApiError::Backend {
                code: envelope.err,
                message: envelope.msg,
            })
        }
    }

    /// Current user and system snapshots; drives the store's `Login` action.
    pub async fn user_info(&self) -> Result<SessionScope, ApiError> {
        let body: UserInfoBody = self.get("/api/user/info", &[]).await?;
        Ok(SessionScope {
            user: body.user,
            system: body.sys,
        })
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let _: Ack = self
            .post_form(
                "/api/user/sign_in",
                &[("username", username), ("password", password)],
            )
            .await?;
        Ok(())
    }

    pub async fn sign_up(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let _: Ack = self.post_form("/api/user/sign_up", request).await?;
        Ok(())
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let _: Ack = self.get("/api/user/sign_out", &[]).await?;
        Ok(())
    }

    /// Landing-page sample: `random` random covers and `recent` new arrivals.
    pub async fn index(&self, random: u32, recent: u32) -> Result<IndexSummary, ApiError> {
        self.get(
            "/api/index",
            &[
                ("random", &random.to_string()),
                ("recent", &recent.to_string()),
            ],
        )
        .await
    }

    pub async fn recent_books(&self, start: u64) -> Result<BookList, ApiError> {
        self.get("/api/recent", &[("start", &start.to_string())])
            .await
    }

    pub async fn hot_books(&self, start: u64) -> Result<BookList, ApiError> {
        self.get("/api/hot", &[("start", &start.to_string())]).await
    }

    pub async fn search(&self, name: &str, start: u64) -> Result<BookList, ApiError> {
        self.get(
            "/api/search",
            &[("name", name), ("start", &start.to_string())],
        )
        .await
    }

    /// One book by id. The id is a decimal digit sequence forwarded to the
    /// backend as captured from the path.
    pub async fn book(&self, id: &str) -> Result<BookDetail, ApiError> {
        self.get(&format!("/api/book/{id}"), &[]).await
    }

    /// Update a book's metadata. Requires edit permission on the backend.
    pub async fn save_book(&self, id: &str, edit: &BookEditRequest) -> Result<(), ApiError> {
        let _: Ack = self.post_json(&format!("/api/book/{id}/edit"), edit).await?;
        Ok(())
    }

    /// Curated tag shelves for the navigation page.
    pub async fn book_nav(&self) -> Result<Vec<NavSection>, ApiError> {
        #[derive(Deserialize)]
        struct NavBody {
            #[serde(default)]
            navs: Vec<NavSection>,
        }
        let body: NavBody = self.get("/api/book/nav", &[]).await?;
        Ok(body.navs)
    }

    /// All categories of one meta kind (`author`, `publisher`, `tag`,
    /// `rating` or `series`).
    pub async fn meta_list(&self, kind: &str) -> Result<MetaList, ApiError> {
        self.get(&format!("/api/{kind}"), &[]).await
    }

    /// Books belonging to one category of a meta kind.
    pub async fn meta_books(&self, kind: &str, name: &str, start: u64) -> Result<BookList, ApiError> {
        self.get(
            &format!("/api/{kind}/{name}"),
            &[("start", &start.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unwrap_json<T: DeserializeOwned>(json: &str) -> Result<T, ApiError> {
        ApiClient::unwrap(serde_json::from_str::<Envelope<T>>(json).unwrap())
    }

    #[test]
    fn envelope_ok_unwraps_body() {
        let scope: UserInfoBody = unwrap_json(
            r#"{"err": "ok", "user": {"is_login": true, "nickname": "bob"}, "sys": {"socials": []}}"#,
        )
        .unwrap();
        assert!(scope.user.is_login);
        assert_eq!(scope.user.nickname, "bob");
    }

    #[test]
    fn envelope_missing_err_is_ok() {
        // `/api/index` has no `err` field at all.
        let summary: IndexSummary =
            unwrap_json(r#"{"random_books": [], "new_books": [{"id": 1, "title": "T"}]}"#).unwrap();
        assert_eq!(summary.new_books.len(), 1);
    }

    #[test]
    fn envelope_error_carries_code_and_message() {
        let result: Result<Ack, ApiError> =
            unwrap_json(r#"{"err": "params.invalid", "msg": "bad password"}"#);
        match result {
            Err(ApiError::Backend { code, message }) => {
                assert_eq!(code, "params.invalid");
                assert_eq!(message, "bad password");
            }
            other => panic!("expected backend error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.url("/api/user/info"), "http://127.0.0.1:8000/api/user/info");
    }

    #[test]
    fn backend_error_user_message_prefers_msg() {
        let err = ApiError::Backend {
            code: "db.error".into(),
            message: "busy".into(),
        };
        assert_eq!(err.user_message(), "busy");
        let bare = ApiError::Backend {
            code: "permission".into(),
            message: String::new(),
        };
        assert_eq!(bare.user_message(), "permission");
    }
}
