//! Session data models shared between the store and the API client.
//!
//! Field names follow the backend wire format so these types deserialise
//! straight out of the `/api/user/info` response.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of the authenticated principal.
///
/// The default value is the logged-out state (all flags false, all strings
/// empty), which is what the store holds until a user-info fetch lands.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_login: bool,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub kindle_email: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
}

/// Server-supplied configuration snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Social/contact links advertised by the site.
    #[serde(default)]
    pub socials: Vec<String>,
    /// Feature-name to enabled-flag map (`register`, `download`, `push`, `read`).
    #[serde(default)]
    pub allow: BTreeMap<String, bool>,
}

impl SystemInfo {
    /// Whether a named feature is enabled. Unknown features are disabled.
    pub fn allows(&self, feature: &str) -> bool {
        self.allow.get(feature).copied().unwrap_or(false)
    }
}

/// Payload of a successful login/refresh: the user and system snapshots
/// replaced wholesale by [`Action::Login`](crate::Action::Login).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionScope {
    pub user: UserInfo,
    #[serde(rename = "sys")]
    pub system: SystemInfo,
}

/// Severity of a transient alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Info,
    Warning,
    Error,
}

impl AlertKind {
    /// Stable lowercase name, used as a CSS class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single transient notification slot.
///
/// Overwritten as a whole by each `ShowAlert`; `DismissAlert` clears only
/// `visible`, so the last message stays readable until the next alert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Path of the page the alert belongs to.
    pub target: String,
    pub message: String,
    pub kind: AlertKind,
    pub visible: bool,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            target: String::new(),
            message: String::new(),
            kind: AlertKind::Info,
            visible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_defaults_to_logged_out() {
        let user = UserInfo::default();
        assert!(!user.is_login);
        assert!(!user.is_admin);
        assert!(user.nickname.is_empty());
    }

    #[test]
    fn scope_deserialises_from_wire_names() {
        // Shape of the `/api/user/info` payload, unknown fields ignored.
        let json = r#"{
            "user": {
                "is_admin": true,
                "is_login": true,
                "nickname": "alice",
                "kindle_email": "a@kindle.com",
                "avatar": "https://example.com/a.png",
                "email": "ignored@example.com"
            },
            "sys": {
                "socials": ["https://github.com/talebook"],
                "allow": {"register": true, "download": false},
                "books": 1234
            }
        }"#;
        let scope: SessionScope = serde_json::from_str(json).unwrap();
        assert!(scope.user.is_admin);
        assert_eq!(scope.user.nickname, "alice");
        assert!(scope.system.allows("register"));
        assert!(!scope.system.allows("download"));
        assert!(!scope.system.allows("push"));
    }

    #[test]
    fn alert_kind_lowercase_names() {
        assert_eq!(AlertKind::Error.to_string(), "error");
        assert_eq!(
            serde_json::to_string(&AlertKind::Warning).unwrap(),
            "\"warning\""
        );
    }
}
