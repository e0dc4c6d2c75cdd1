//! The "give me a random article" facade used by both front-ends.

use async_trait::async_trait;
use tracing::info;

use crate::config::Config;
use crate::content::MediaWikiContentApi;
use crate::error::Result;
use crate::fetcher::ArticleTreeFetcher;
use crate::mediawiki::MediaWikiClient;
use crate::resolver::RandomTitleResolver;
use crate::types::{ArticleContent, LanguageCode};

/// Source of complete random articles
///
/// [`WikiReflector`] is the production implementation; [`crate::session::FetchSession`]
/// only depends on this trait, so front-ends can be exercised with fakes.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Resolve a random title in `language` and fetch its content
    async fn random_article(&self, language: &LanguageCode) -> Result<ArticleContent>;
}

/// Random title resolver and article fetcher sharing one HTTP client
#[derive(Clone, Debug)]
pub struct WikiReflector {
    resolver: RandomTitleResolver,
    fetcher: ArticleTreeFetcher<MediaWikiContentApi>,
}

impl WikiReflector {
    /// Build the resolver and fetcher from a validated configuration
    ///
    /// # Errors
    /// Returns [`crate::Error::Config`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let client = MediaWikiClient::new(&config.wiki)?;
        Ok(Self {
            resolver: RandomTitleResolver::with_client(client.clone()),
            fetcher: ArticleTreeFetcher::new(
                MediaWikiContentApi::with_client(client, &config.wiki),
                config.display.max_section_depth,
            ),
        })
    }

    /// The title resolver
    pub fn resolver(&self) -> &RandomTitleResolver {
        &self.resolver
    }

    /// The article fetcher
    pub fn fetcher(&self) -> &ArticleTreeFetcher<MediaWikiContentApi> {
        &self.fetcher
    }

    /// Fetch a specific article
    ///
    /// # Errors
    /// See [`ArticleTreeFetcher::fetch`].
    pub async fn article(&self, title: &str, language: &LanguageCode) -> Result<ArticleContent> {
        self.fetcher.fetch(title, language).await
    }
}

#[async_trait]
impl ArticleSource for WikiReflector {
    async fn random_article(&self, language: &LanguageCode) -> Result<ArticleContent> {
        let reference = self.resolver.resolve(language).await?;
        info!(article = %reference, "fetching article");
        self.fetcher.fetch(reference.title(), reference.language()).await
    }
}
