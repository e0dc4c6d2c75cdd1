//! Configuration types for wiki-reflect

use crate::error::{Error, Result};
use crate::i18n::Locale;
use crate::types::LanguageCode;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Placeholder replaced by the edition code in [`WikiConfig::api_url`]
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// MediaWiki API access settings
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WikiConfig {
    /// API endpoint template (default: "https://{lang}.wikipedia.org/w/api.php")
    ///
    /// `{lang}` is replaced by the edition code. A template without the
    /// placeholder is used as-is for every language (handy for mirrors and tests).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Identifying User-Agent sent with every request (required by Wikimedia)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,

    /// Include hidden maintenance categories (default: false)
    #[serde(default)]
    pub include_hidden_categories: bool,

    /// Maximum category continuation requests per article (default: 10)
    #[serde(default = "default_max_category_pages")]
    pub max_category_pages: usize,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            request_timeout: default_request_timeout(),
            include_hidden_categories: false,
            max_category_pages: default_max_category_pages(),
        }
    }
}

/// Presentation limits shared by the console and panel renderers
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters of section text shown per section on the console (default: 200)
    #[serde(default = "default_console_snippet_chars")]
    pub console_snippet_chars: usize,

    /// Characters of section text shown per section in the panel (default: 500)
    #[serde(default = "default_panel_snippet_chars")]
    pub panel_snippet_chars: usize,

    /// Maximum section nesting kept when building and walking trees (default: 16)
    #[serde(default = "default_max_section_depth")]
    pub max_section_depth: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            console_snippet_chars: default_console_snippet_chars(),
            panel_snippet_chars: default_panel_snippet_chars(),
            max_section_depth: default_max_section_depth(),
        }
    }
}

/// Interface settings for the panel front-end
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// Language of labels and messages (default: English)
    #[serde(default)]
    pub locale: Locale,
}

/// Main configuration
///
/// Every field has a default, so an empty JSON object is a valid config file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// MediaWiki API access
    #[serde(default)]
    pub wiki: WikiConfig,

    /// Wikipedia edition to draw random articles from (default: "en")
    #[serde(default)]
    pub language: LanguageCode,

    /// Rendering limits
    #[serde(default)]
    pub display: DisplayConfig,

    /// Interface language
    #[serde(default)]
    pub interface: InterfaceConfig,
}

impl Config {
    /// Load a configuration from a JSON file and validate it
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if it
    /// does not parse or fails validation.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw).map_err(|e| Error::Config {
            message: format!("failed to parse {}: {}", path.display(), e),
            key: None,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot express
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.wiki.user_agent.trim().is_empty() {
            return Err(Error::config(
                "user agent must not be empty",
                "wiki.user_agent",
            ));
        }
        if self.wiki.api_url.trim().is_empty() {
            return Err(Error::config("API URL must not be empty", "wiki.api_url"));
        }
        let sample = self
            .wiki
            .api_url
            .replace(LANG_PLACEHOLDER, self.language.as_str());
        if let Err(e) = url::Url::parse(&sample) {
            return Err(Error::config(
                format!("invalid API URL '{}': {}", self.wiki.api_url, e),
                "wiki.api_url",
            ));
        }
        if self.wiki.request_timeout.is_zero() {
            return Err(Error::config(
                "request timeout must be greater than zero",
                "wiki.request_timeout",
            ));
        }
        if self.wiki.max_category_pages == 0 {
            return Err(Error::config(
                "must be at least 1",
                "wiki.max_category_pages",
            ));
        }
        if self.display.max_section_depth == 0 {
            return Err(Error::config(
                "must be at least 1",
                "display.max_section_depth",
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    "https://{lang}.wikipedia.org/w/api.php".to_string()
}

fn default_user_agent() -> String {
    format!(
        "wiki-reflect/{} (https://github.com/wiki-reflect/wiki-reflect)",
        env!("CARGO_PKG_VERSION")
    )
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_max_category_pages() -> usize {
    10
}

fn default_console_snippet_chars() -> usize {
    200
}

fn default_panel_snippet_chars() -> usize {
    500
}

fn default_max_section_depth() -> usize {
    16
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.language.as_str(), "en");
        assert_eq!(config.wiki.api_url, "https://{lang}.wikipedia.org/w/api.php");
        assert!(config.wiki.user_agent.starts_with("wiki-reflect/"));
        assert_eq!(config.wiki.request_timeout, Duration::from_secs(30));
        assert!(!config.wiki.include_hidden_categories);
        assert_eq!(config.display.console_snippet_chars, 200);
        assert_eq!(config.display.panel_snippet_chars, 500);
        assert_eq!(config.display.max_section_depth, 16);
        assert_eq!(config.interface.locale, Locale::English);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.language.as_str(), "en");
        assert_eq!(config.display.max_section_depth, 16);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: Config = serde_json::from_str(
            r#"{
                "language": "de",
                "wiki": { "user_agent": "MyTool/1.0 (me@example.com)" },
                "display": { "console_snippet_chars": 80 },
                "interface": { "locale": "German" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.language.as_str(), "de");
        assert_eq!(config.wiki.user_agent, "MyTool/1.0 (me@example.com)");
        assert_eq!(config.wiki.api_url, default_api_url());
        assert_eq!(config.display.console_snippet_chars, 80);
        assert_eq!(config.display.panel_snippet_chars, 500);
        assert_eq!(config.interface.locale, Locale::German);
    }

    #[test]
    fn test_invalid_language_rejected_by_serde() {
        let result = serde_json::from_str::<Config>(r#"{ "language": "en.evil.com" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases: [(fn(&mut Config), &str); 6] = [
            (|c: &mut Config| c.wiki.user_agent = "  ".into(), "wiki.user_agent"),
            (|c: &mut Config| c.wiki.api_url = String::new(), "wiki.api_url"),
            (|c: &mut Config| c.wiki.api_url = "not a url".into(), "wiki.api_url"),
            (
                |c: &mut Config| c.wiki.request_timeout = Duration::ZERO,
                "wiki.request_timeout",
            ),
            (
                |c: &mut Config| c.wiki.max_category_pages = 0,
                "wiki.max_category_pages",
            ),
            (
                |c: &mut Config| c.display.max_section_depth = 0,
                "display.max_section_depth",
            ),
        ];

        for (mutate, expected_key) in cases {
            let mut config = Config::default();
            mutate(&mut config);
            match config.validate() {
                Err(Error::Config { key, .. }) => assert_eq!(key.as_deref(), Some(expected_key)),
                other => panic!("expected config error for {expected_key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "language": "fr" }}"#).unwrap();

        let config = Config::from_json_file(file.path()).unwrap();
        assert_eq!(config.language.as_str(), "fr");
    }

    #[test]
    fn test_from_json_file_errors() {
        let missing = Config::from_json_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(Error::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let broken = Config::from_json_file(file.path());
        assert!(matches!(broken, Err(Error::Config { key: None, .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "display": {{ "max_section_depth": 0 }} }}"#).unwrap();
        let invalid = Config::from_json_file(file.path());
        assert!(matches!(invalid, Err(Error::Config { .. })));
    }
}
