//! Plain-text and JSON reports for the terminal.
//!
//! The text layout:
//!
//! ```text
//! Fetching article: Lake Bled
//!
//! ==================================================
//! Article: Lake Bled
//! ==================================================
//!
//! Summary:
//! ----------
//! Lake Bled is a lake in the Julian Alps...
//!
//!
//! Sections:
//! ----------
//! ## Geography
//! The lake is 2,120 m long...
//!   ## Island
//!   Bled Island is the only natural island...
//!
//!
//! Categories:
//! ----------
//! - Category:Lakes of Slovenia
//! ```
//!
//! Every section snippet ends in `...`, whether or not it was cut.

use std::io::{self, Write};

use serde::Serialize;
use tracing::debug;

use super::{failure_message, title_failure_text};
use crate::config::DisplayConfig;
use crate::error::{Error, ErrorReport};
use crate::sections::SectionWalk;
use crate::types::ArticleContent;
use crate::utils::snippet;

const SEPARATOR_WIDTH: usize = 50;
const UNDERLINE_WIDTH: usize = 10;

/// Writes articles and failures to a terminal stream
#[derive(Clone, Debug)]
pub struct ConsoleRenderer {
    snippet_chars: usize,
    max_depth: usize,
}

/// JSON shape of a successful fetch
#[derive(Serialize)]
struct ArticleJson<'a> {
    #[serde(flatten)]
    article: &'a ArticleContent,
    url: String,
}

impl ConsoleRenderer {
    /// Create a renderer using the console snippet length and depth cap
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            snippet_chars: display.console_snippet_chars,
            max_depth: display.max_section_depth,
        }
    }

    /// Announce the title about to be fetched
    pub fn write_fetching<W: Write>(&self, out: &mut W, title: &str) -> io::Result<()> {
        writeln!(out, "Fetching article: {}", title)
    }

    /// Write the full text report of an article
    pub fn write_article<W: Write>(&self, out: &mut W, article: &ArticleContent) -> io::Result<()> {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let underline = "-".repeat(UNDERLINE_WIDTH);

        writeln!(out, "\n{}", separator)?;
        writeln!(out, "Article: {}", article.title)?;
        writeln!(out, "{}\n", separator)?;

        writeln!(out, "Summary:")?;
        writeln!(out, "{}", underline)?;
        writeln!(out, "{}", article.summary)?;
        writeln!(out, "\n")?;

        if !article.sections.is_empty() {
            writeln!(out, "Sections:")?;
            writeln!(out, "{}", underline)?;
            self.write_sections(out, article)?;
            writeln!(out, "\n")?;
        }

        if !article.categories.is_empty() {
            writeln!(out, "Categories:")?;
            writeln!(out, "{}", underline)?;
            for category in &article.categories {
                writeln!(out, "- {}", category)?;
            }
            writeln!(out, "\n")?;
        }

        Ok(())
    }

    fn write_sections<W: Write>(&self, out: &mut W, article: &ArticleContent) -> io::Result<()> {
        let mut walk = SectionWalk::new(&article.sections, self.max_depth);
        for visit in walk.by_ref() {
            let indent = "  ".repeat(visit.depth);
            writeln!(out, "{}## {}", indent, visit.section.title)?;
            writeln!(
                out,
                "{}{}...",
                indent,
                snippet(&visit.section.text, self.snippet_chars)
            )?;
        }
        if walk.skipped() > 0 {
            debug!(
                title = %article.title,
                skipped = walk.skipped(),
                "sections below the depth limit not printed"
            );
        }
        Ok(())
    }

    /// Report a failure to resolve a random title
    ///
    /// The cause line names the underlying fetch error, not its wrapper.
    pub fn write_title_failure<W: Write>(&self, out: &mut W, error: &Error) -> io::Result<()> {
        match error {
            Error::TitleResolution(cause) | Error::Fetch(cause) => {
                writeln!(out, "{}", title_failure_text(cause))
            }
            other => {
                writeln!(out, "Error fetching random article title: {}", other)?;
                writeln!(out, "Could not retrieve a random article title.")
            }
        }
    }

    /// Report a failure to fetch the article itself
    pub fn write_failure<W: Write>(&self, out: &mut W, error: &Error) -> io::Result<()> {
        writeln!(out, "{}", failure_message(error))
    }

    /// Write the article as pretty-printed JSON, including its URL
    pub fn write_article_json<W: Write>(
        &self,
        out: &mut W,
        article: &ArticleContent,
    ) -> io::Result<()> {
        let json = ArticleJson {
            article,
            url: article.url(),
        };
        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)
    }

    /// Write any failure as a JSON [`ErrorReport`]
    pub fn write_failure_json<W: Write>(&self, out: &mut W, error: &Error) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &ErrorReport::from(error))?;
        writeln!(out)
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}
