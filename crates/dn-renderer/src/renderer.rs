//! Markdown rendering with outline extraction.

use std::fmt::Write;

use linkify::{LinkFinder, LinkKind};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::highlight::highlight;
use crate::state::{CodeBlockState, HeadingState, ImageState, OutlineHeading, TableState, escape_html};

/// Result of rendering one note.
#[derive(Clone, Debug)]
pub struct RenderedNote {
    /// Rendered HTML content.
    pub html: String,
    /// Outline entries for headings of level 1–3, in document order.
    ///
    /// Every entry's `id` appears as an element id in `html`.
    pub outline: Vec<OutlineHeading>,
}

/// Render markdown source into HTML plus its heading outline.
///
/// The dialect matches what note authors expect from a web notebook: raw
/// embedded HTML passes through, bare URLs become links, smart punctuation
/// applies, and tables/strikethrough are available. Each heading (levels 1–6)
/// receives a unique anchor id from a generator scoped to this call; fenced
/// code blocks with a recognized language are syntax-highlighted and fall
/// back to escaped plain code otherwise.
///
/// Rendering never fails: malformed constructs degrade to escaped text.
#[must_use]
pub fn render(source: &str) -> RenderedNote {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION;
    Renderer::new().run(Parser::new_ext(source, options))
}

/// Event-loop renderer. One instance per render call.
struct Renderer {
    output: String,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    heading: HeadingState,
    pending_image: Option<(String, String)>,
    /// Nesting depth of explicit links; bare URLs are not re-linked inside.
    link_depth: usize,
    link_finder: LinkFinder,
}

impl Renderer {
    fn new() -> Self {
        let mut link_finder = LinkFinder::new();
        link_finder.kinds(&[LinkKind::Url]);

        Self {
            output: String::with_capacity(4096),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            heading: HeadingState::new(),
            pending_image: None,
            link_depth: 0,
            link_finder,
        }
    }

    fn run<'a, I>(mut self, events: I) -> RenderedNote
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }

        RenderedNote {
            html: self.output,
            outline: self.heading.take_outline(),
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(&tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.raw_html(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.hard_break(),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {
                // Not part of the note dialect
            }
        }
    }

    fn start_tag(&mut self, tag: &Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("<p>");
                }
            }
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the anchor id exists.
                self.heading.start_heading(heading_level_to_num(*level));
            }
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => info
                        .split_whitespace()
                        .next()
                        .map(ToOwned::to_owned),
                    _ => None,
                };
                self.code.start(lang);
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::Table(alignments) => {
                self.table.start(alignments.clone());
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.start_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.current_alignment_style();
                let cell = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.output, "<{cell}{align}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Link { dest_url, .. } => {
                self.link_depth += 1;
                let link_tag = format!(r#"<a href="{}">"#, escape_html(dest_url));
                self.push_inline(&link_tag);
            }
            Tag::Image { dest_url, title, .. } => {
                // Collect alt text; the tag is written in end_tag.
                self.image.start();
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
            Tag::FootnoteDefinition(_)
            | Tag::HtmlBlock
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Superscript
            | Tag::Subscript => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("</p>");
                }
            }
            TagEnd::Heading(_) => {
                if let Some((level, id, html)) = self.heading.complete_heading() {
                    write!(
                        self.output,
                        r#"<h{level} id="{id}">{}</h{level}>"#,
                        html.trim()
                    )
                    .unwrap();
                }
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => {
                let (lang, content) = self.code.end();
                self.code_block(lang.as_deref(), &content);
            }
            TagEnd::List(ordered) => {
                self.output.push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Link => {
                self.push_inline("</a>");
                self.link_depth = self.link_depth.saturating_sub(1);
            }
            TagEnd::Image => {
                let alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    self.image_tag(&src, &alt, &title);
                }
            }
            TagEnd::FootnoteDefinition
            | TagEnd::HtmlBlock
            | TagEnd::MetadataBlock(_)
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition
            | TagEnd::Superscript
            | TagEnd::Subscript => {}
        }
    }

    /// Push content to output or heading buffer based on context.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else if self.link_depth > 0 {
            self.output.push_str(&escape_html(text));
        } else {
            let linked = self.autolink(text);
            self.output.push_str(&linked);
        }
    }

    /// Escape body text, turning bare URLs into anchors.
    fn autolink(&self, text: &str) -> String {
        let mut html = String::with_capacity(text.len());
        for span in self.link_finder.spans(text) {
            if matches!(span.kind(), Some(LinkKind::Url)) {
                let url = escape_html(span.as_str());
                write!(html, r#"<a href="{url}">{url}</a>"#).unwrap();
            } else {
                html.push_str(&escape_html(span.as_str()));
            }
        }
        html
    }

    fn inline_code(&mut self, code: &str) {
        if self.heading.is_active() {
            self.heading.push_text(code);
            write!(
                self.heading.html_buffer(),
                "<code>{}</code>",
                escape_html(code)
            )
            .unwrap();
        } else {
            write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
        }
    }

    fn raw_html(&mut self, html: &str) {
        self.output.push_str(html);
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else {
            self.push_inline("\n");
        }
    }

    fn hard_break(&mut self) {
        self.push_inline("<br>");
    }

    /// Write a fenced or indented code block, highlighting when possible.
    fn code_block(&mut self, lang: Option<&str>, content: &str) {
        match lang {
            Some(lang) => {
                let body = highlight(lang, content).unwrap_or_else(|| escape_html(content));
                write!(
                    self.output,
                    r#"<pre><code class="language-{}">{body}</code></pre>"#,
                    escape_html(lang)
                )
                .unwrap();
            }
            None => {
                write!(self.output, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
            }
        }
    }

    fn image_tag(&mut self, src: &str, alt: &str, title: &str) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            self.output,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
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
