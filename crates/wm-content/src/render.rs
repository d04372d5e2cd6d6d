//! Markdown rendering with heading anchors and table of contents.

use std::collections::{HashMap, HashSet};

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (2 or 3).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Rendered markdown body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedContent {
    /// HTML with an `id` on every heading.
    pub html: String,
    /// Level-2 and level-3 headings in document order.
    pub toc: Vec<TocEntry>,
}

/// Generates unique heading anchors.
///
/// A `-N` suffix is skipped when a heading already produced that id
/// verbatim, so `Example`, `Example`, `Example 1` yields
/// `example`, `example-1`, `example-1-1`.
#[derive(Default)]
struct HeadingIds {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl HeadingIds {
    fn next(&mut self, text: &str) -> String {
        let mut base_id = slugify(text);
        if base_id.is_empty() {
            "heading".clone_into(&mut base_id);
        }
        let count = self.counts.entry(base_id.clone()).or_default();
        let mut id = match *count {
            0 => base_id.clone(),
            n => format!("{base_id}-{n}"),
        };
        while self.issued.contains(&id) {
            *count += 1;
            id = format!("{base_id}-{count}");
        }
        *count += 1;
        self.issued.insert(id.clone());
        id
    }
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Render markdown to HTML.
///
/// Tables, strikethrough, task lists and footnotes are enabled. Every heading
/// receives a unique slug id; repeated headings get a numeric suffix.
#[must_use]
pub fn render_markdown(text: &str) -> RenderedContent {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let mut events: Vec<Event<'_>> = Parser::new_ext(text, options).collect();

    let mut ids = HeadingIds::default();
    let mut toc = Vec::new();
    let mut i = 0;
    while i < events.len() {
        let Event::Start(Tag::Heading { level, .. }) = events[i] else {
            i += 1;
            continue;
        };

        let start = i;
        let mut heading_text = String::new();
        i += 1;
        while i < events.len() && !matches!(events[i], Event::End(TagEnd::Heading(_))) {
            if let Event::Text(t) | Event::Code(t) = &events[i] {
                heading_text.push_str(t);
            }
            i += 1;
        }

        let anchor = ids.next(&heading_text);
        let level = heading_level_to_num(level);
        if matches!(level, 2 | 3) {
            toc.push(TocEntry {
                level,
                title: heading_text.trim().to_owned(),
                id: anchor.clone(),
            });
        }
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
            *id = Some(CowStr::from(anchor));
        }
    }

    let mut html = String::with_capacity(text.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());

    RenderedContent { html, toc }
}

/// Convert text to URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dashes/underscores with single dashes,
/// and removes other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
