//! Presentation of fetched articles
//!
//! Two front-ends share the same data and traversal:
//! - [`console`]: the plain-text (or JSON) report printed by the `wiki-reflect` binary
//! - [`panel`]: the view model a desktop window binds its widgets to
//!
//! Neither truncates stored data; snippets are cut here, at render time.

pub mod console;
pub mod panel;

pub use console::ConsoleRenderer;
pub use panel::{ArticlePanel, PanelLabels, Theme};

use crate::error::{Error, FetchError};

/// Two lines: the underlying cause, then the fixed notice
pub(crate) fn title_failure_text(cause: &FetchError) -> String {
    format!(
        "Error fetching random article title: {}\nCould not retrieve a random article title.",
        cause
    )
}

/// Human-readable text for a failed fetch
///
/// These are the messages both front-ends show in place of an article.
pub fn failure_message(error: &Error) -> String {
    match error {
        Error::NotFound { title } => format!("Article '{}' not found.", title),
        Error::TitleResolution(cause) => title_failure_text(cause),
        Error::Fetch(e) => format!("Error fetching article content: {}", e),
        Error::Task(reason) => format!("Error fetching article content: {}", reason),
        Error::Cancelled => "Fetch cancelled.".to_string(),
        other => other.to_string(),
    }
}
