//! Utility functions for text snippets, article URLs and HTML output

use std::borrow::Cow;

use crate::types::LanguageCode;

/// Characters MediaWiki leaves unescaped in article paths
const PATH_SAFE: &str = "-._~()!*',:;@$/";

/// Build the browser URL of an article
///
/// Spaces become underscores, as in canonical Wikipedia links; anything outside
/// the path-safe set is percent-encoded.
///
/// # Examples
///
/// ```
/// use wiki_reflect::utils::article_url;
///
/// let lang = "en".parse().unwrap();
/// assert_eq!(
///     article_url(&lang, "Ada Lovelace"),
///     "https://en.wikipedia.org/wiki/Ada_Lovelace"
/// );
/// ```
pub fn article_url(language: &LanguageCode, title: &str) -> String {
    let mut path = String::with_capacity(title.len());
    for c in title.trim().chars() {
        if c == ' ' {
            path.push('_');
        } else if c.is_ascii_alphanumeric() || PATH_SAFE.contains(c) {
            path.push(c);
        } else {
            let mut buf = [0u8; 4];
            path.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    format!("https://{}.wikipedia.org/wiki/{}", language, path)
}

/// Cut `text` down to at most `max_chars` characters
///
/// Counts characters, not bytes, so multi-byte scripts are never split. Returns
/// the input unchanged (borrowed) when it already fits.
#[must_use]
pub fn snippet(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Cow::Owned(text[..byte_idx].to_string()),
        None => Cow::Borrowed(text),
    }
}

/// Escape text for embedding in an HTML fragment
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
