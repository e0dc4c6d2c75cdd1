//! Wire shapes of the MediaWiki `action=query` responses we consume
//!
//! Only the fields the library reads are modelled; serde ignores the rest.

use serde::Deserialize;

/// `error` object returned instead of a result
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// `list=random`
#[derive(Debug, Deserialize)]
pub(crate) struct RandomResponse {
    pub query: Option<RandomQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RandomQuery {
    #[serde(default)]
    pub random: Vec<RandomPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RandomPage {
    pub title: Option<String>,
}

/// `prop=...&titles=...` with `formatversion=2`
#[derive(Debug, Deserialize)]
pub(crate) struct PagesResponse {
    pub query: Option<PagesQuery>,
    #[serde(rename = "continue")]
    pub continuation: Option<Continuation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PagesQuery {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    pub extract: Option<String>,
    pub categories: Option<Vec<CategoryRef>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRef {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Continuation {
    pub clcontinue: Option<String>,
}

impl PagesResponse {
    /// The single page a `titles=` query asks about
    pub fn into_first_page(self) -> Option<Page> {
        self.query.and_then(|q| q.pages.into_iter().next())
    }
}
