//! Core types for wiki-reflect

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::Error;
use crate::utils::article_url;

/// A Wikipedia edition code such as `en`, `de` or `zh-yue`
///
/// Validated on construction: 2 to 16 characters, lowercase ASCII letters,
/// digits and `-`, starting with a letter. The code is substituted into the
/// API host name, so anything else is rejected.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(code: &str) -> bool {
        (2..=16).contains(&code.len())
            && code.starts_with(|c: char| c.is_ascii_lowercase())
            && code
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        if Self::is_valid(&code) {
            Ok(Self(code))
        } else {
            Err(Error::config(
                format!("invalid Wikipedia language code '{s}'"),
                "language",
            ))
        }
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

/// Wikipedia editions offered by the language picker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WikiLanguage {
    /// English Wikipedia
    English,
    /// Ukrainian Wikipedia
    Ukrainian,
    /// German Wikipedia
    German,
    /// French Wikipedia
    French,
    /// Spanish Wikipedia
    Spanish,
    /// Italian Wikipedia
    Italian,
    /// Polish Wikipedia
    Polish,
    /// Russian Wikipedia
    Russian,
    /// Japanese Wikipedia
    Japanese,
    /// Chinese Wikipedia
    Chinese,
    /// Romansh Wikipedia
    Romansh,
}

impl WikiLanguage {
    /// All editions, in picker order
    pub const ALL: [WikiLanguage; 11] = [
        WikiLanguage::English,
        WikiLanguage::Ukrainian,
        WikiLanguage::German,
        WikiLanguage::French,
        WikiLanguage::Spanish,
        WikiLanguage::Italian,
        WikiLanguage::Polish,
        WikiLanguage::Russian,
        WikiLanguage::Japanese,
        WikiLanguage::Chinese,
        WikiLanguage::Romansh,
    ];

    /// Display name shown in the picker
    pub fn name(&self) -> &'static str {
        match self {
            WikiLanguage::English => "English",
            WikiLanguage::Ukrainian => "Ukrainian",
            WikiLanguage::German => "German",
            WikiLanguage::French => "French",
            WikiLanguage::Spanish => "Spanish",
            WikiLanguage::Italian => "Italian",
            WikiLanguage::Polish => "Polish",
            WikiLanguage::Russian => "Russian",
            WikiLanguage::Japanese => "Japanese",
            WikiLanguage::Chinese => "Chinese",
            WikiLanguage::Romansh => "Romani",
        }
    }

    /// Edition code used in the API host name
    pub fn code(&self) -> LanguageCode {
        let code = match self {
            WikiLanguage::English => "en",
            WikiLanguage::Ukrainian => "uk",
            WikiLanguage::German => "de",
            WikiLanguage::French => "fr",
            WikiLanguage::Spanish => "es",
            WikiLanguage::Italian => "it",
            WikiLanguage::Polish => "pl",
            WikiLanguage::Russian => "ru",
            WikiLanguage::Japanese => "ja",
            WikiLanguage::Chinese => "zh",
            WikiLanguage::Romansh => "rm",
        };
        LanguageCode(code.to_string())
    }

    /// Look up an edition by its picker name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// A resolved article title in a specific Wikipedia edition
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleReference {
    title: String,
    language: LanguageCode,
}

impl ArticleReference {
    /// Create a reference; the title must already be non-empty
    pub(crate) fn new(title: impl Into<String>, language: LanguageCode) -> Self {
        Self {
            title: title.into(),
            language,
        }
    }

    /// Article title as returned by the API
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Edition the title belongs to
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Browser URL for the article
    pub fn url(&self) -> String {
        article_url(&self.language, &self.title)
    }
}

impl std::fmt::Display for ArticleReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.language, self.title)
    }
}

/// One section of an article, with its nested subsections in source order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text
    pub title: String,
    /// Body text up to the next heading (trimmed)
    pub text: String,
    /// Direct subsections in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl Section {
    /// Create a leaf section
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            sections: Vec::new(),
        }
    }

    /// Builder-style helper to attach subsections
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }
}

/// Page metadata from the content API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageInfo {
    /// Canonical title after normalization and redirects
    pub title: String,
    /// Whether the page exists
    pub exists: bool,
}

/// Everything fetched for one article
///
/// Built once per fetch and never mutated afterwards. Nothing is truncated at
/// this layer; snippets are a rendering concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    /// Canonical article title
    pub title: String,
    /// Edition the article was fetched from
    pub language: LanguageCode,
    /// Lead text before the first heading
    pub summary: String,
    /// Top-level sections in source order
    pub sections: Vec<Section>,
    /// Category titles (set semantics, iterates sorted)
    pub categories: BTreeSet<String>,
}

impl ArticleContent {
    /// Reference to this article
    pub fn reference(&self) -> ArticleReference {
        ArticleReference::new(self.title.clone(), self.language.clone())
    }

    /// Browser URL for the article
    pub fn url(&self) -> String {
        article_url(&self.language, &self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_parsing() {
        assert_eq!("en".parse::<LanguageCode>().unwrap().as_str(), "en");
        assert_eq!(" DE ".parse::<LanguageCode>().unwrap().as_str(), "de");
        assert_eq!("zh-yue".parse::<LanguageCode>().unwrap().as_str(), "zh-yue");
        assert_eq!(
            "be-tarask".parse::<LanguageCode>().unwrap().as_str(),
            "be-tarask"
        );
    }

    #[test]
    fn test_language_code_rejects_invalid() {
        for bad in ["", "e", "en.evil.com", "en/", "1en", "-en", "en wiki", "ünicode"] {
            let result = bad.parse::<LanguageCode>();
            assert!(result.is_err(), "'{bad}' should be rejected");
            assert_eq!(result.unwrap_err().error_code(), "config_error");
        }
    }

    #[test]
    fn test_language_code_serde() {
        let code: LanguageCode = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(code.as_str(), "fr");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"fr\"");
        assert!(serde_json::from_str::<LanguageCode>("\"fr.example\"").is_err());
    }

    #[test]
    fn test_wiki_language_table() {
        assert_eq!(WikiLanguage::ALL.len(), 11);
        assert_eq!(WikiLanguage::Ukrainian.code().as_str(), "uk");
        assert_eq!(WikiLanguage::Romansh.code().as_str(), "rm");
        assert_eq!(
            WikiLanguage::from_name("japanese"),
            Some(WikiLanguage::Japanese)
        );
        assert_eq!(WikiLanguage::from_name("Klingon"), None);

        for lang in WikiLanguage::ALL {
            assert!(lang.code().as_str().parse::<LanguageCode>().is_ok());
        }
    }

    #[test]
    fn test_category_set_is_order_independent() {
        let make = |cats: &[&str]| ArticleContent {
            title: "T".into(),
            language: LanguageCode::default(),
            summary: String::new(),
            sections: vec![],
            categories: cats.iter().map(|c| c.to_string()).collect(),
        };

        assert_eq!(
            make(&["Category:B", "Category:A", "Category:C"]),
            make(&["Category:C", "Category:B", "Category:A"])
        );
        assert_ne!(make(&["Category:A"]), make(&["Category:B"]));
    }

    #[test]
    fn test_article_reference_url() {
        let reference = ArticleReference::new("Rust (programming language)", LanguageCode::default());
        assert_eq!(reference.to_string(), "en:Rust (programming language)");
        assert_eq!(
            reference.url(),
            "https://en.wikipedia.org/wiki/Rust_(programming_language)"
        );
    }
}
