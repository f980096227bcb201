//! docmark - Markup tree for API documentation pages
//!
//! This crate provides the node types a documentation generator assembles
//! pages from (headings, paragraphs, tables, code boxes, links, notes), the
//! constructors that build them, and a plain-text projection of any tree.
//! Rendering to HTML or Markdown and resolving API references into URLs are
//! done by the consumers of the tree.
//!
//! # Architecture
//!
//! ```text
//! text / code / links ──▶ rows, cells, note boxes ──▶ ┌──────────┐
//!                                                     │  Markup  │ ──▶ renderer
//! headings, breaks ─────────────────────────────────▶ │   tree   │ ──▶ plain text
//!                                                     └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use docmark::{extract_text_content, page, text, web_link, TextOptions, PARAGRAPH};
//!
//! let mut doc = page("Getting started");
//! doc.elements.extend(text("Read the", TextOptions::default()).into_iter().map(Into::into));
//! doc.elements.push(web_link(text(" guide", TextOptions::default()), "https://example.com")?.into());
//! doc.elements.push(PARAGRAPH.clone().into());
//!
//! assert_eq!(extract_text_content(&[doc]), "Getting started\nRead the guide\n\n");
//! # Ok::<(), docmark::MarkupError>(())
//! ```

mod ast;
mod build;
mod extract;
#[cfg(feature = "serde")]
pub mod json;
mod options;

pub use ast::{
    ApiItemReference, BasicElement, LinkTextElement, MarkupApiLink, MarkupElement, MarkupHeading,
    MarkupHighlightedText, MarkupKind, MarkupNoteBox, MarkupPage, MarkupTable, MarkupTableCell,
    MarkupTableRow, MarkupText, MarkupWebLink, StructuredElement, BREAK, PARAGRAPH,
};
pub use build::{
    api_link, api_link_from_text, code, code_box, heading1, heading2, normalize_whitespace,
    note_box, note_box_from_text, page, table, table_row, text, text_paragraphs, web_link,
    web_link_from_text,
};
pub use extract::{extract_text_content, ExtractText};
pub use options::{Highlighter, TextOptions};

/// Error type for markup operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// A required field was empty (link text, link URL, code text)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A `kind` tag outside the closed set of markup variants
    #[error("Unsupported element: {0}")]
    UnsupportedElement(String),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
