//! Content API wrapper: page existence, plain-text extract and categories.
//!
//! [`ContentApi`] is the seam [`crate::fetcher::ArticleTreeFetcher`] talks to.
//! [`MediaWikiContentApi`] implements it over the MediaWiki Action API; tests
//! and alternative backends can provide their own implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::WikiConfig;
use crate::error::{FetchError, Result};
use crate::mediawiki::MediaWikiClient;
use crate::mediawiki::responses::{Page, PagesResponse};
use crate::types::{LanguageCode, PageInfo};

/// Trait for retrieving the raw content of one article
///
/// Every method is a single attempt. Implementations report network and parse
/// problems as [`crate::Error::Fetch`].
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Existence check; resolves normalization and redirects to a canonical title
    async fn page_info(&self, title: &str, language: &LanguageCode) -> Result<PageInfo>;

    /// Plain-text extract of the whole page with `== Heading ==` section markers
    async fn extract(&self, title: &str, language: &LanguageCode) -> Result<String>;

    /// Category titles of the page, in whatever order the backend returns them
    async fn categories(&self, title: &str, language: &LanguageCode) -> Result<Vec<String>>;
}

/// [`ContentApi`] backed by the MediaWiki Action API
#[derive(Clone, Debug)]
pub struct MediaWikiContentApi {
    client: MediaWikiClient,
    include_hidden_categories: bool,
    max_category_pages: usize,
}

impl MediaWikiContentApi {
    /// Create the content API with its own HTTP client
    ///
    /// # Errors
    /// Returns [`crate::Error::Config`] if the HTTP client cannot be built.
    pub fn new(config: &WikiConfig) -> Result<Self> {
        Ok(Self::with_client(MediaWikiClient::new(config)?, config))
    }

    /// Create the content API over an existing client
    pub fn with_client(client: MediaWikiClient, config: &WikiConfig) -> Self {
        Self {
            client,
            include_hidden_categories: config.include_hidden_categories,
            max_category_pages: config.max_category_pages.max(1),
        }
    }

    async fn single_page(
        &self,
        language: &LanguageCode,
        params: &[(&str, &str)],
    ) -> std::result::Result<(Page, Option<String>), FetchError> {
        let response: PagesResponse = self.client.query(language, params).await?;
        let next = response
            .continuation
            .as_ref()
            .and_then(|c| c.clcontinue.clone());
        let page = response
            .into_first_page()
            .ok_or_else(|| FetchError::Malformed("response has no query.pages entry".into()))?;
        Ok((page, next))
    }
}

#[async_trait]
impl ContentApi for MediaWikiContentApi {
    async fn page_info(&self, title: &str, language: &LanguageCode) -> Result<PageInfo> {
        let (page, _) = self
            .single_page(
                language,
                &[
                    ("action", "query"),
                    ("prop", "info"),
                    ("titles", title),
                    ("redirects", "1"),
                    ("formatversion", "2"),
                ],
            )
            .await?;

        Ok(PageInfo {
            exists: !page.missing && !page.invalid,
            title: page.title,
        })
    }

    async fn extract(&self, title: &str, language: &LanguageCode) -> Result<String> {
        let (page, _) = self
            .single_page(
                language,
                &[
                    ("action", "query"),
                    ("prop", "extracts"),
                    ("explaintext", "1"),
                    ("exsectionformat", "wiki"),
                    ("titles", title),
                    ("formatversion", "2"),
                ],
            )
            .await?;

        // Pages with no prose come back without the field at all
        Ok(page.extract.unwrap_or_default())
    }

    async fn categories(&self, title: &str, language: &LanguageCode) -> Result<Vec<String>> {
        let clshow = if self.include_hidden_categories {
            None
        } else {
            Some("!hidden")
        };

        let mut categories = Vec::new();
        let mut cursor: Option<String> = None;

        for request in 0..self.max_category_pages {
            let mut params = vec![
                ("action", "query"),
                ("prop", "categories"),
                ("cllimit", "max"),
                ("titles", title),
                ("formatversion", "2"),
            ];
            if let Some(show) = clshow {
                params.push(("clshow", show));
            }
            if let Some(cursor) = cursor.as_deref() {
                params.push(("clcontinue", cursor));
            }

            let (page, next) = self.single_page(language, &params).await?;
            categories.extend(page.categories.into_iter().flatten().map(|c| c.title));

            match next {
                Some(next) => {
                    debug!(title, request, continue_from = %next, "following category continuation");
                    cursor = Some(next);
                }
                None => return Ok(categories),
            }
        }

        warn!(
            title,
            pages = self.max_category_pages,
            fetched = categories.len(),
            "category continuation limit reached, list is incomplete"
        );
        Ok(categories)
    }
}
