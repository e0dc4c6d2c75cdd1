//! Section trees: building them from plain-text extracts and walking them.
//!
//! MediaWiki's `exsectionformat=wiki` extracts mark headings as lines of the form
//! `== Title ==`, `=== Subtitle ===` and so on. [`parse_extract`] splits such an
//! extract into the lead summary and a [`Section`] tree; [`SectionWalk`] visits a
//! tree depth-first, parent before children. Neither recurses: both keep an
//! explicit stack and cap nesting at a configurable depth.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::Section;

/// `== Title ==` with any number (>= 2) of equals signs on either side
///
/// The title must start with something other than `=` or whitespace, so a
/// line made only of equals signs is body text.
#[allow(clippy::expect_used)]
fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*(={2,})[ \t]*([^=\s].*?)[ \t]*={2,}[ \t]*\r?$")
            .expect("heading regex is valid")
    })
}

/// Lead text and section tree of one article
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedExtract {
    /// Text before the first heading (trimmed)
    pub summary: String,
    /// Top-level sections in source order
    pub sections: Vec<Section>,
}

/// Split a wiki-format extract into summary and section tree
///
/// A heading with `n` equals signs sits at depth `n - 2`, clamped to
/// `max_depth - 1`. When levels skip (`==` followed by `====`) the deeper
/// heading becomes a child of the nearest open shallower section. Each section
/// is attached to its parent only once all of its own children are in place.
pub fn parse_extract(extract: &str, max_depth: usize) -> ParsedExtract {
    let max_depth = max_depth.max(1);

    let mut headings = Vec::new();
    let mut summary_end = extract.len();
    for caps in heading_regex().captures_iter(extract) {
        let (Some(whole), Some(marks), Some(title)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if headings.is_empty() {
            summary_end = whole.start();
        }
        let depth = (marks.as_str().len() - 2).min(max_depth - 1);
        headings.push((depth, title.as_str().trim(), whole.start(), whole.end()));
    }

    let mut builder = TreeBuilder::default();
    for (i, &(depth, title, _, body_start)) in headings.iter().enumerate() {
        let body_end = headings
            .get(i + 1)
            .map_or(extract.len(), |&(_, _, next_start, _)| next_start);
        builder.push(depth, Section::new(title, extract[body_start..body_end].trim()));
    }

    ParsedExtract {
        summary: extract[..summary_end].trim().to_string(),
        sections: builder.finish(),
    }
}

/// Stack of open sections; the top is the most recently opened one
#[derive(Default)]
struct TreeBuilder {
    open: Vec<(usize, Section)>,
    roots: Vec<Section>,
}

impl TreeBuilder {
    fn push(&mut self, depth: usize, section: Section) {
        while self.open.last().is_some_and(|(open_depth, _)| *open_depth >= depth) {
            self.close_top();
        }
        self.open.push((depth, section));
    }

    fn close_top(&mut self) {
        if let Some((_, done)) = self.open.pop() {
            match self.open.last_mut() {
                Some((_, parent)) => parent.sections.push(done),
                None => self.roots.push(done),
            }
        }
    }

    fn finish(mut self) -> Vec<Section> {
        while !self.open.is_empty() {
            self.close_top();
        }
        self.roots
    }
}

/// One step of a [`SectionWalk`]
#[derive(Clone, Copy, Debug)]
pub struct SectionVisit<'a> {
    /// Nesting depth, 0 for top-level sections
    pub depth: usize,
    /// The visited section
    pub section: &'a Section,
}

/// Depth-first, pre-order iterator over a section tree
///
/// Sections are yielded parent first, then children in source order. Children
/// of sections at depth `max_depth - 1` are skipped and counted in
/// [`SectionWalk::skipped`].
#[derive(Clone, Debug)]
pub struct SectionWalk<'a> {
    stack: Vec<(usize, &'a Section)>,
    max_depth: usize,
    skipped: usize,
}

impl<'a> SectionWalk<'a> {
    /// Walk `sections` down to `max_depth` levels (at least one)
    pub fn new(sections: &'a [Section], max_depth: usize) -> Self {
        Self {
            stack: sections.iter().rev().map(|s| (0, s)).collect(),
            max_depth: max_depth.max(1),
            skipped: 0,
        }
    }

    /// Number of direct children left unvisited because of the depth cap so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> Iterator for SectionWalk<'a> {
    type Item = SectionVisit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, section) = self.stack.pop()?;
        if depth + 1 < self.max_depth {
            self.stack
                .extend(section.sections.iter().rev().map(|child| (depth + 1, child)));
        } else {
            self.skipped += section.sections.len();
        }
        Some(SectionVisit { depth, section })
    }
}
