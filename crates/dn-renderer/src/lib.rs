//! Markdown renderer with outline extraction for the daily-notes engine.
//!
//! [`render`] turns one note's markdown source into HTML plus a flat outline
//! of its top-level headings. Anchor ids come from [`SlugGenerator`], which
//! is scoped to a single render call so repeated headings disambiguate
//! deterministically (`faq`, `faq-1`, `faq-2`, …).
//!
//! Rendering never fails: unknown code-block languages and grammar errors
//! fall back to escaped plain code, and malformed input degrades rather than
//! propagating an error.
//!
//! # Example
//!
//! ```
//! let result = dn_renderer::render("# Notes\n\n## Today");
//!
//! assert!(result.html.contains(r#"<h2 id="today">"#));
//! assert_eq!(result.outline.len(), 2);
//! ```

mod highlight;
mod renderer;
mod slug;
mod state;

pub use renderer::{RenderedNote, render};
pub use slug::SlugGenerator;
pub use state::{OutlineHeading, escape_html};
