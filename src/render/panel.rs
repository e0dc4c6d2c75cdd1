//! View model for a desktop article window.
//!
//! [`ArticlePanel::build`] turns the session's [`ViewState`] into the strings a
//! window shows: localized labels, the title line, the summary box, an HTML
//! fragment for the sections pane and the category list. Widgets and theming
//! stay with the toolkit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::i18n::{Locale, MessageKey, translate};
use crate::sections::SectionWalk;
use crate::session::ViewState;
use crate::types::{ArticleContent, Section};
use crate::utils::{escape_html, snippet};

/// Deepest HTML heading level used for sections
const MAX_HEADING_LEVEL: usize = 6;

/// Non-breaking spaces per nesting level
const INDENT_WIDTH: usize = 4;

/// Colour scheme of the window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background (default)
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Static interface strings in the selected locale
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelLabels {
    /// Window title
    pub window_title: &'static str,
    /// Interface-language picker label
    pub interface_language: &'static str,
    /// Wikipedia-edition picker label
    pub wikipedia_language: &'static str,
    /// Theme toggle text; names the theme the toggle switches to
    pub theme_toggle: &'static str,
    /// Summary heading
    pub summary: &'static str,
    /// Sections heading
    pub sections: &'static str,
    /// Categories heading
    pub categories: &'static str,
    /// Fetch trigger text
    pub new_article: &'static str,
}

impl PanelLabels {
    /// Labels for `locale` while `theme` is active
    pub fn new(locale: Locale, theme: Theme) -> Self {
        let theme_key = match theme {
            Theme::Light => MessageKey::DarkTheme,
            Theme::Dark => MessageKey::LightTheme,
        };
        Self {
            window_title: translate(locale, MessageKey::WindowTitle),
            interface_language: translate(locale, MessageKey::InterfaceLanguageLabel),
            wikipedia_language: translate(locale, MessageKey::WikipediaLanguageLabel),
            theme_toggle: translate(locale, theme_key),
            summary: translate(locale, MessageKey::Summary),
            sections: translate(locale, MessageKey::Sections),
            categories: translate(locale, MessageKey::Categories),
            new_article: translate(locale, MessageKey::NewArticle),
        }
    }
}

/// Everything the article window displays for one [`ViewState`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticlePanel {
    /// Localized static labels
    pub labels: PanelLabels,
    /// Title line: article title, the fetching placeholder or the error title
    pub title: String,
    /// Summary box: article summary or failure message
    pub summary: String,
    /// Sections pane HTML; `None` hides the pane
    pub sections_html: Option<String>,
    /// Category list, one `- Category` line each; `None` hides the pane
    pub categories_text: Option<String>,
    /// Link opened when the title is clicked
    pub url: Option<String>,
    /// Whether the fetch trigger is enabled
    pub fetch_enabled: bool,
}

impl ArticlePanel {
    /// Build the panel for the current view
    pub fn build(view: &ViewState, locale: Locale, theme: Theme, display: &DisplayConfig) -> Self {
        let labels = PanelLabels::new(locale, theme);
        let fetch_enabled = view.trigger_enabled();

        match view {
            ViewState::Idle => Self {
                labels,
                title: String::new(),
                summary: String::new(),
                sections_html: None,
                categories_text: None,
                url: None,
                fetch_enabled,
            },
            ViewState::Fetching { .. } => Self {
                labels,
                title: translate(locale, MessageKey::Fetching).to_string(),
                summary: String::new(),
                sections_html: None,
                categories_text: None,
                url: None,
                fetch_enabled,
            },
            ViewState::Showing(article) => Self::article(labels, article, display),
            ViewState::Failed { message } => Self {
                labels,
                title: translate(locale, MessageKey::Error).to_string(),
                summary: message.clone(),
                sections_html: None,
                categories_text: None,
                url: None,
                fetch_enabled,
            },
        }
    }

    fn article(labels: PanelLabels, article: &ArticleContent, display: &DisplayConfig) -> Self {
        let sections_html = (!article.sections.is_empty()).then(|| {
            sections_html(
                &article.sections,
                display.panel_snippet_chars,
                display.max_section_depth,
            )
        });
        let categories_text =
            (!article.categories.is_empty()).then(|| category_lines(&article.categories));

        Self {
            labels,
            title: article.title.clone(),
            summary: article.summary.clone(),
            sections_html,
            categories_text,
            url: Some(article.url()),
            fetch_enabled: true,
        }
    }
}

/// Render a section tree as an HTML fragment
///
/// Each section becomes a heading (`<h2>` at the top level, one level deeper
/// per nesting step, never past `<h6>`) and a paragraph holding a snippet of its
/// text. Nesting is also shown by four `&nbsp;` per level. Titles and text are
/// escaped.
pub fn sections_html(sections: &[Section], snippet_chars: usize, max_depth: usize) -> String {
    let mut lines = Vec::new();
    for visit in SectionWalk::new(sections, max_depth) {
        let level = (visit.depth + 2).min(MAX_HEADING_LEVEL);
        let indent = "&nbsp;".repeat(visit.depth * INDENT_WIDTH);
        lines.push(format!(
            "<h{level}>{indent}{}</h{level}>",
            escape_html(&visit.section.title)
        ));
        lines.push(format!(
            "<p>{indent}{}...</p>",
            escape_html(&snippet(&visit.section.text, snippet_chars))
        ));
    }
    lines.join("\n")
}

/// One `- Category` line per category, in sorted order
pub fn category_lines(categories: &BTreeSet<String>) -> String {
    categories
        .iter()
        .map(|category| format!("- {}\n", category))
        .collect()
}
