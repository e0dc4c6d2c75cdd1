//! Article retrieval: existence check, summary, section tree and categories.

use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::config::Config;
use crate::content::{ContentApi, MediaWikiContentApi};
use crate::error::{Error, Result};
use crate::sections::parse_extract;
use crate::types::{ArticleContent, LanguageCode};

/// Fetches the full content of one article through a [`ContentApi`]
///
/// A fetch is a single attempt. A page that does not exist yields
/// [`Error::NotFound`] before any content is requested; any other failure is
/// passed through as [`Error::Fetch`]. Partially built articles are never
/// returned.
#[derive(Clone, Debug)]
pub struct ArticleTreeFetcher<C = MediaWikiContentApi> {
    api: C,
    max_section_depth: usize,
}

impl ArticleTreeFetcher<MediaWikiContentApi> {
    /// Create a fetcher backed by the MediaWiki API
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            MediaWikiContentApi::new(&config.wiki)?,
            config.display.max_section_depth,
        ))
    }
}

impl<C: ContentApi> ArticleTreeFetcher<C> {
    /// Create a fetcher over any content backend
    pub fn new(api: C, max_section_depth: usize) -> Self {
        Self {
            api,
            max_section_depth: max_section_depth.max(1),
        }
    }

    /// The content backend
    pub fn api(&self) -> &C {
        &self.api
    }

    /// Fetch summary, section tree and categories of `title`
    ///
    /// # Errors
    /// - [`Error::NotFound`] if the page does not exist
    /// - [`Error::Fetch`] on network, status or parse failures
    pub async fn fetch(&self, title: &str, language: &LanguageCode) -> Result<ArticleContent> {
        let info = self.api.page_info(title, language).await?;
        if !info.exists {
            info!(title, language = %language, "article does not exist");
            return Err(Error::NotFound {
                title: title.to_string(),
            });
        }
        if info.title != title {
            debug!(requested = title, canonical = %info.title, "title normalized");
        }

        let extract = self.api.extract(&info.title, language).await?;
        let parsed = parse_extract(&extract, self.max_section_depth);

        let categories: BTreeSet<String> = self
            .api
            .categories(&info.title, language)
            .await?
            .into_iter()
            .collect();

        debug!(
            title = %info.title,
            sections = parsed.sections.len(),
            categories = categories.len(),
            "article fetched"
        );

        Ok(ArticleContent {
            title: info.title,
            language: language.clone(),
            summary: parsed.summary,
            sections: parsed.sections,
            categories,
        })
    }
}
