//! Shared state structs for markdown rendering.
//!
//! These structs track context during event processing so the renderer's
//! event loop stays flat.

use pulldown_cmark::Alignment;
use serde::{Deserialize, Serialize};

use crate::slug::SlugGenerator;

/// Deepest heading level that participates in the outline.
const OUTLINE_MAX_LEVEL: u8 = 3;

/// One outline entry, in document order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineHeading {
    /// Anchor id, unique within one render.
    pub id: String,
    /// Plain heading text (inline formatting removed).
    pub text: String,
    /// Heading level (1–3; deeper headings are rendered but not listed).
    pub level: u8,
}

/// State for tracking code block rendering.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    language: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    /// Start a new code block with optional language.
    pub(crate) fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    /// End the current code block and return (language, content).
    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn push_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// State for tracking table rendering.
#[derive(Default)]
pub(crate) struct TableState {
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Alignment style attribute for the current cell.
    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for capturing image alt text.
#[derive(Default)]
pub(crate) struct ImageState {
    active: bool,
    alt_text: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.alt_text.clear();
    }

    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt_text)
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// State for tracking headings, anchor ids and the outline.
///
/// Owns the per-render [`SlugGenerator`], so anchor uniqueness is scoped to
/// one `HeadingState` (and therefore one render call).
pub(crate) struct HeadingState {
    /// Current heading level being processed (None outside headings).
    current_level: Option<u8>,
    /// Buffer for heading plain text (for the outline and the slug).
    text: String,
    /// Buffer for heading HTML (with inline formatting).
    html: String,
    slugs: SlugGenerator,
    outline: Vec<OutlineHeading>,
}

impl HeadingState {
    pub(crate) fn new() -> Self {
        Self {
            current_level: None,
            text: String::new(),
            html: String::new(),
            slugs: SlugGenerator::new(),
            outline: Vec::new(),
        }
    }

    /// Check if we're currently inside a heading.
    pub(crate) fn is_active(&self) -> bool {
        self.current_level.is_some()
    }

    /// Start tracking a heading.
    pub(crate) fn start_heading(&mut self, level: u8) {
        self.current_level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    /// Complete the heading: assign its anchor and record the outline entry.
    ///
    /// Returns `(level, id, html)` or `None` when not inside a heading.
    pub(crate) fn complete_heading(&mut self) -> Option<(u8, String, String)> {
        let level = self.current_level.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);

        let id = self.slugs.slug(&text);

        if level <= OUTLINE_MAX_LEVEL {
            self.outline.push(OutlineHeading {
                id: id.clone(),
                text: text.trim().to_owned(),
                level,
            });
        }

        Some((level, id, html))
    }

    /// Append plain text to the heading text buffer.
    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append HTML to the heading html buffer.
    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    /// Get the heading HTML buffer reference.
    pub(crate) fn html_buffer(&mut self) -> &mut String {
        &mut self.html
    }

    /// Take the collected outline entries.
    pub(crate) fn take_outline(&mut self) -> Vec<OutlineHeading> {
        std::mem::take(&mut self.outline)
    }
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
