//! Random article titles from the MediaWiki `list=random` endpoint.

use tracing::{debug, warn};

use crate::config::WikiConfig;
use crate::error::{Error, FetchError, Result};
use crate::mediawiki::MediaWikiClient;
use crate::mediawiki::responses::RandomResponse;
use crate::types::{ArticleReference, LanguageCode};

/// Resolves one random main-namespace article per call
#[derive(Clone, Debug)]
pub struct RandomTitleResolver {
    client: MediaWikiClient,
}

impl RandomTitleResolver {
    /// Create a resolver with its own HTTP client
    ///
    /// # Errors
    /// Returns [`crate::Error::Config`] if the HTTP client cannot be built.
    pub fn new(config: &WikiConfig) -> Result<Self> {
        Ok(Self::with_client(MediaWikiClient::new(config)?))
    }

    /// Create a resolver over an existing client
    pub fn with_client(client: MediaWikiClient) -> Self {
        Self { client }
    }

    /// Ask `language`'s Wikipedia for one random article title
    ///
    /// Only namespace 0 (articles) is considered. An empty or missing title is a
    /// failure, never a result.
    ///
    /// # Errors
    /// Returns [`Error::TitleResolution`] on network errors, non-2xx statuses,
    /// malformed bodies and empty titles.
    pub async fn resolve(&self, language: &LanguageCode) -> Result<ArticleReference> {
        self.request_title(language)
            .await
            .map_err(Error::TitleResolution)
    }

    async fn request_title(
        &self,
        language: &LanguageCode,
    ) -> std::result::Result<ArticleReference, FetchError> {
        let response: RandomResponse = self
            .client
            .query(
                language,
                &[
                    ("action", "query"),
                    ("list", "random"),
                    ("rnnamespace", "0"),
                    ("rnlimit", "1"),
                ],
            )
            .await
            .inspect_err(|e| warn!(language = %language, error = %e, "random title request failed"))?;

        let title = response
            .query
            .ok_or_else(|| FetchError::Malformed("response has no query object".into()))?
            .random
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Malformed("query.random is empty".into()))?
            .title
            .ok_or_else(|| FetchError::Malformed("query.random[0] has no title".into()))?;

        if title.trim().is_empty() {
            warn!(language = %language, "random title response carried an empty title");
            return Err(FetchError::EmptyTitle);
        }

        debug!(language = %language, title = %title, "resolved random title");
        Ok(ArticleReference::new(title, language.clone()))
    }
}
