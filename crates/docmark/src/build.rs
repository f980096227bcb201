//! Constructors for markup nodes.
//!
//! Constructors reject structurally invalid input (empty link text, blank link
//! targets, empty code) up front, so a tree that was built here never needs
//! to be checked again while it is rendered or traversed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{
    ApiItemReference, BasicElement, LinkTextElement, MarkupApiLink, MarkupHeading,
    MarkupHighlightedText, MarkupNoteBox, MarkupPage, MarkupTable, MarkupTableCell,
    MarkupTableRow, MarkupText, MarkupWebLink, PARAGRAPH,
};
use crate::options::{Highlighter, TextOptions};
use crate::{MarkupError, Result};

/// A newline, optional whitespace, and another newline
static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Collapse every run of whitespace (including newlines) into a single space.
///
/// Leading and trailing whitespace is collapsed, not removed.
pub fn normalize_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}

/// Create text nodes for `text`.
///
/// Returns an empty vector for empty input and a single node otherwise, so the
/// result can be appended to a content sequence without checking.
pub fn text(text: &str, options: TextOptions) -> Vec<LinkTextElement> {
    if text.is_empty() {
        return Vec::new();
    }

    vec![LinkTextElement::Text(MarkupText {
        text: normalize_whitespace(text),
        bold: options.bold,
        italics: options.italics,
    })]
}

/// Split `text` into paragraphs at blank lines.
///
/// Paragraphs are separated by [`PARAGRAPH`]; blank paragraphs are dropped.
pub fn text_paragraphs(text: &str, options: TextOptions) -> Vec<BasicElement> {
    let mut result = Vec::new();

    for paragraph in BLANK_LINE.split(text) {
        if paragraph.trim().is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(PARAGRAPH.clone());
        }
        result.extend(self::text(paragraph, options).into_iter().map(Into::into));
    }

    result
}

/// Create a link to a documented API item.
///
/// # Errors
///
/// Returns [`MarkupError::InvalidArgument`] if `elements` is empty.
pub fn api_link(
    elements: Vec<LinkTextElement>,
    target: ApiItemReference,
) -> Result<LinkTextElement> {
    ensure_link_text(&elements, "api-link")?;
    Ok(LinkTextElement::ApiLink(MarkupApiLink { elements, target }))
}

/// Create a link to a documented API item, displaying plain text.
///
/// # Errors
///
/// Returns [`MarkupError::InvalidArgument`] if `text` is empty.
pub fn api_link_from_text(text: &str, target: ApiItemReference) -> Result<LinkTextElement> {
    api_link(self::text(text, TextOptions::default()), target)
}

/// Create a link to an external URL.
///
/// # Errors
///
/// Returns [`MarkupError::InvalidArgument`] if `elements` is empty or `url` is
/// blank.
pub fn web_link(elements: Vec<LinkTextElement>, url: &str) -> Result<BasicElement> {
    ensure_link_text(&elements, "web-link")?;
    ensure_target_url(url)?;
    Ok(BasicElement::WebLink(MarkupWebLink {
        elements,
        target_url: url.to_string(),
    }))
}

/// Create a link to an external URL, displaying plain text.
///
/// # Errors
///
/// Returns [`MarkupError::InvalidArgument`] if `text` is empty or `url` is
/// blank.
pub fn web_link_from_text(text: &str, url: &str) -> Result<BasicElement> {
    web_link(self::text(text, TextOptions::default()), url)
}

/// Create an inline code span. Pass `Highlighter::default()` for plain text.
///
/// # Errors
///
/// Returns [`MarkupError::InvalidArgument`] if `text` is empty.
pub fn code(text: &str, highlighter: Highlighter) -> Result<LinkTextElement> {
    ensure_code_text(text, "code")?;
    Ok(LinkTextElement::Code(MarkupHighlightedText {
        text: text.to_string(),
        highlighter,
    }))
}

/// Create a code block.
///
/// # Errors
///
/// Returns [`MarkupError::InvalidArgument`] if `text` is empty.
pub fn code_box(text: &str, highlighter: Highlighter) -> Result<BasicElement> {
    ensure_code_text(text, "code-box")?;
    Ok(BasicElement::CodeBox(MarkupHighlightedText {
        text: text.to_string(),
        highlighter,
    }))
}

pub fn heading1(text: &str) -> BasicElement {
    BasicElement::Heading1(MarkupHeading {
        text: normalize_whitespace(text),
    })
}

pub fn heading2(text: &str) -> BasicElement {
    BasicElement::Heading2(MarkupHeading {
        text: normalize_whitespace(text),
    })
}

/// Wrap `elements` in a note box. Empty content is allowed.
pub fn note_box(elements: Vec<BasicElement>) -> BasicElement {
    BasicElement::NoteBox(MarkupNoteBox { elements })
}

pub fn note_box_from_text(text: &str) -> BasicElement {
    note_box(
        self::text(text, TextOptions::default())
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}

/// Create a table row with one cell per group of elements, in order.
pub fn table_row(cells: Vec<Vec<BasicElement>>) -> MarkupTableRow {
    MarkupTableRow {
        cells: cells
            .into_iter()
            .map(|elements| MarkupTableCell { elements })
            .collect(),
    }
}

/// Create an empty table, with a header row if `header_cells` is given.
pub fn table(header_cells: Option<Vec<Vec<BasicElement>>>) -> MarkupTable {
    MarkupTable {
        header: header_cells.map(table_row),
        rows: Vec::new(),
    }
}

/// Create an empty page.
pub fn page(title: &str) -> MarkupPage {
    MarkupPage {
        title: normalize_whitespace(title),
        breadcrumb: Vec::new(),
        elements: Vec::new(),
    }
}

#[cfg(feature = "serde")]
pub(crate) fn ensure_text(text: &str) -> Result<()> {
    if text.is_empty() {
        tracing::debug!("rejected empty text");
        return Err(MarkupError::InvalidArgument("text requires non-empty text".to_string()));
    }
    Ok(())
}

pub(crate) fn ensure_link_text(elements: &[LinkTextElement], kind: &str) -> Result<()> {
    if elements.is_empty() {
        tracing::debug!(kind, "rejected link without link text");
        return Err(MarkupError::InvalidArgument(format!(
            "{kind} requires at least one link text element"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_target_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        tracing::debug!(url, "rejected web-link with blank target URL");
        return Err(MarkupError::InvalidArgument(
            "web-link requires a non-blank target URL".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn ensure_code_text(text: &str, kind: &str) -> Result<()> {
    if text.is_empty() {
        tracing::debug!(kind, "rejected empty code");
        return Err(MarkupError::InvalidArgument(format!(
            "{kind} requires non-empty text"
        )));
    }
    Ok(())
}
