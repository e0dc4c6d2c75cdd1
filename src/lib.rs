//! # wiki-reflect
//!
//! Fetch a random Wikipedia article and explore its summary, section tree and
//! categories.
//!
//! ## Design Philosophy
//!
//! wiki-reflect is designed to be:
//! - **Single-attempt** - Every failure is reported once, nothing is retried
//! - **Sensible defaults** - Works out of the box against any Wikipedia edition
//! - **Front-end neutral** - The console binary and a desktop window share the same core
//! - **Bounded** - Section trees are built and walked without recursion, up to a configurable depth
//!
//! ## Quick Start
//!
//! ```no_run
//! use wiki_reflect::{ArticleSource, Config, WikiReflector};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let reflector = WikiReflector::new(&config)?;
//!
//!     let article = reflector.random_article(&config.language).await?;
//!     println!("{} ({} sections)", article.title, article.sections.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

use std::future::Future;

/// Configuration types
pub mod config;
/// Article content backends
pub mod content;
/// Error types
pub mod error;
/// Article fetching
pub mod fetcher;
/// Interface translations
pub mod i18n;
/// MediaWiki API plumbing
pub mod mediawiki;
/// Random article facade
pub mod reflector;
/// Console and panel presentation
pub mod render;
/// Random title resolution
pub mod resolver;
/// Section tree building and traversal
pub mod sections;
/// Background fetch session for interactive front-ends
pub mod session;
/// Core types
pub mod types;
/// Utility functions
pub mod utils;

// Re-export commonly used types
pub use config::{Config, DisplayConfig, InterfaceConfig, WikiConfig};
pub use content::{ContentApi, MediaWikiContentApi};
pub use error::{Error, ErrorDetail, ErrorReport, FetchError, Result};
pub use fetcher::ArticleTreeFetcher;
pub use i18n::{Locale, MessageKey, translate};
pub use mediawiki::MediaWikiClient;
pub use reflector::{ArticleSource, WikiReflector};
pub use render::{ArticlePanel, ConsoleRenderer, PanelLabels, Theme, failure_message};
pub use resolver::RandomTitleResolver;
pub use sections::{SectionVisit, SectionWalk};
pub use session::{FetchId, FetchSession, ViewState};
pub use types::{
    ArticleContent, ArticleReference, LanguageCode, PageInfo, Section, WikiLanguage,
};

/// Run a future until it completes or a termination signal arrives.
///
/// Returns `None` if a signal won the race; the future is dropped, which
/// abandons any request it had in flight.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// # Example
///
/// ```no_run
/// use wiki_reflect::{ArticleSource, Config, WikiReflector, run_until_signal};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::default();
///     let reflector = WikiReflector::new(&config)?;
///
///     match run_until_signal(reflector.random_article(&config.language)).await {
///         Some(article) => println!("{}", article?.title),
///         None => eprintln!("interrupted"),
///     }
///
///     Ok(())
/// }
/// ```
pub async fn run_until_signal<F: Future>(fut: F) -> Option<F::Output> {
    tokio::select! {
        biased;
        output = fut => Some(output),
        _ = wait_for_signal() => None,
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Signal registration may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), Ok(mut sigint)) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            sigint.recv().await;
            tracing::info!("Received SIGINT signal (Ctrl+C)");
        }
        (Ok(mut sigterm), Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            sigterm.recv().await;
            tracing::info!("Received SIGTERM signal");
        }
        (Err(e), Err(_)) => {
            tracing::error!(error = %e, "Could not register any signal handlers, using ctrl_c fallback");
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
            std::future::pending::<()>().await;
        }
    }
}
