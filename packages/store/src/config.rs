//! # Runtime configuration
//!
//! Build-time overridable settings for the client: page title, title template,
//! and the base URL of the backend API. The client is compiled to wasm, so
//! "environment" overrides are read at compile time via `option_env!`
//! (`TALEBOOK_TITLE`, `TALEBOOK_TITLE_TEMPLATE`, `TALEBOOK_API_URL`); a TOML
//! representation is provided for non-wasm hosts and tests.
//!
//! Title/template/API settings affect only what pages render and where the API
//! client points -- never route resolution or store semantics.

use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Talebook".to_string()
}

fn default_title_template() -> String {
    "%s | Talebook".to_string()
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default page title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Template applied to per-page titles; `%s` is the page's own title.
    #[serde(default = "default_title_template")]
    pub title_template: String,
    /// Base URL of the backend API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            title_template: default_title_template(),
            api_url: default_api_url(),
        }
    }
}

impl AppConfig {
    /// Configuration baked in at build time, falling back to defaults for any
    /// variable that was not set when the client was compiled.
    pub fn from_build_env() -> Self {
        Self {
            title: option_env!("TALEBOOK_TITLE")
                .map(str::to_string)
                .unwrap_or_else(default_title),
            title_template: option_env!("TALEBOOK_TITLE_TEMPLATE")
                .map(str::to_string)
                .unwrap_or_else(default_title_template),
            api_url: option_env!("TALEBOOK_API_URL")
                .map(str::to_string)
                .unwrap_or_else(default_api_url),
        }
    }

    /// Full document title for a page: the template with `%s` substituted, or
    /// the plain site title when the page has none of its own.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if !page.is_empty() => self.title_template.replacen("%s", page, 1),
            _ => self.title.clone(),
        }
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
        assert_eq!(config.title, "Talebook");
    }

    #[test]
    fn empty_toml_equals_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml(r#"api_url = "https://books.example.com""#).unwrap();
        assert_eq!(config.api_url, "https://books.example.com");
        assert_eq!(config.title, "Talebook");
    }

    #[test]
    fn toml_roundtrip() {
        let config = AppConfig {
            title: "My Library".into(),
            title_template: "%s - My Library".into(),
            api_url: "https://api.example.com".into(),
        };
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn page_title_substitution() {
        let config = AppConfig::default();
        assert_eq!(config.page_title(Some("Recent")), "Recent | Talebook");
        assert_eq!(config.page_title(None), "Talebook");
        assert_eq!(config.page_title(Some("")), "Talebook");
    }
}
