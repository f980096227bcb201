//! JSON encoding of markup trees
//!
//! Nodes are encoded as objects tagged by `kind`, with camelCase field names:
//!
//! ```json
//! {"kind": "web-link", "elements": [{"kind": "text", "text": "docs"}], "targetUrl": "https://example.com"}
//! ```
//!
//! Decoding checks every `kind` tag against the closed set of markup kinds and
//! re-applies the constructor rules (non-empty text, links and code, and
//! whitespace normalization of text, headings and page titles), so a decoded
//! tree holds the same guarantees as one built with the functions in this
//! crate.

use serde::Serialize;
use serde_json::Value;

use crate::ast::{
    BasicElement, LinkTextElement, MarkupApiLink, MarkupElement, MarkupHeading,
    MarkupHighlightedText, MarkupKind, MarkupPage, MarkupTable, MarkupTableRow, MarkupText,
    MarkupWebLink, StructuredElement,
};
use crate::build::{
    ensure_code_text, ensure_link_text, ensure_target_url, ensure_text, normalize_whitespace,
};
use crate::{MarkupError, Result};

/// Encode a sequence of markup nodes as a JSON array.
///
/// # Errors
///
/// Returns [`MarkupError::InvalidArgument`] if serialization fails.
pub fn to_json_string<E: Serialize>(elements: &[E]) -> Result<String> {
    serde_json::to_string(elements)
        .map_err(|e| MarkupError::InvalidArgument(format!("cannot encode markup: {e}")))
}

/// Decode a JSON array of markup nodes.
///
/// Text, heading and page title fields are whitespace-normalized the way the
/// constructors normalize them.
///
/// # Errors
///
/// Returns [`MarkupError::UnsupportedElement`] if any node has a `kind` tag
/// outside the known set, and [`MarkupError::InvalidArgument`] if the JSON is
/// malformed, a node sits where its kind is not allowed, or a node breaks a
/// constructor rule (empty text, empty link text, blank URL, empty code).
pub fn from_json_str(json: &str) -> Result<Vec<MarkupElement>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| MarkupError::InvalidArgument(format!("malformed markup JSON: {e}")))?;

    check_kinds(&value)?;

    let mut elements: Vec<MarkupElement> = serde_json::from_value(value)
        .map_err(|e| MarkupError::InvalidArgument(format!("invalid markup: {e}")))?;

    elements.iter_mut().try_for_each(conform_element)?;
    tracing::debug!(elements = elements.len(), "decoded markup JSON");
    Ok(elements)
}

fn check_kinds(value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => items.iter().try_for_each(check_kinds),
        Value::Object(map) => {
            if let Some(kind) = map.get("kind") {
                let tag = kind.as_str().ok_or_else(|| {
                    MarkupError::UnsupportedElement(format!("non-string markup kind {kind}"))
                })?;
                tag.parse::<MarkupKind>()?;
            }
            map.values().try_for_each(check_kinds)
        }
        _ => Ok(()),
    }
}

// The conform_* pass checks constructor rules and normalizes text in place.

fn conform_element(element: &mut MarkupElement) -> Result<()> {
    match element {
        MarkupElement::Break | MarkupElement::Paragraph => Ok(()),
        MarkupElement::Text(text) => conform_text(text),
        MarkupElement::Heading1(heading) | MarkupElement::Heading2(heading) => {
            conform_heading(heading);
            Ok(())
        }
        MarkupElement::Code(code) => conform_code(code, MarkupKind::Code),
        MarkupElement::CodeBox(code) => conform_code(code, MarkupKind::CodeBox),
        MarkupElement::WebLink(link) => conform_web_link(link),
        MarkupElement::ApiLink(link) => conform_api_link(link),
        MarkupElement::NoteBox(note) => note.elements.iter_mut().try_for_each(conform_basic),
        MarkupElement::TableCell(cell) => cell.elements.iter_mut().try_for_each(conform_basic),
        MarkupElement::TableRow(row) => conform_row(row),
        MarkupElement::Table(table) => conform_table(table),
        MarkupElement::Page(page) => conform_page(page),
    }
}

fn conform_structured(element: &mut StructuredElement) -> Result<()> {
    match element {
        StructuredElement::Break | StructuredElement::Paragraph => Ok(()),
        StructuredElement::Text(text) => conform_text(text),
        StructuredElement::Heading1(heading) | StructuredElement::Heading2(heading) => {
            conform_heading(heading);
            Ok(())
        }
        StructuredElement::Code(code) => conform_code(code, MarkupKind::Code),
        StructuredElement::CodeBox(code) => conform_code(code, MarkupKind::CodeBox),
        StructuredElement::WebLink(link) => conform_web_link(link),
        StructuredElement::ApiLink(link) => conform_api_link(link),
        StructuredElement::NoteBox(note) => note.elements.iter_mut().try_for_each(conform_basic),
        StructuredElement::Table(table) => conform_table(table),
    }
}

fn conform_basic(element: &mut BasicElement) -> Result<()> {
    match element {
        BasicElement::Break | BasicElement::Paragraph => Ok(()),
        BasicElement::Text(text) => conform_text(text),
        BasicElement::Heading1(heading) | BasicElement::Heading2(heading) => {
            conform_heading(heading);
            Ok(())
        }
        BasicElement::Code(code) => conform_code(code, MarkupKind::Code),
        BasicElement::CodeBox(code) => conform_code(code, MarkupKind::CodeBox),
        BasicElement::WebLink(link) => conform_web_link(link),
        BasicElement::ApiLink(link) => conform_api_link(link),
        BasicElement::NoteBox(note) => note.elements.iter_mut().try_for_each(conform_basic),
    }
}

fn conform_link_text(element: &mut LinkTextElement) -> Result<()> {
    match element {
        LinkTextElement::Text(text) => conform_text(text),
        LinkTextElement::Code(code) => conform_code(code, MarkupKind::Code),
        LinkTextElement::ApiLink(link) => conform_api_link(link),
    }
}

fn conform_text(text: &mut MarkupText) -> Result<()> {
    ensure_text(&text.text)?;
    text.text = normalize_whitespace(&text.text);
    Ok(())
}

fn conform_heading(heading: &mut MarkupHeading) {
    heading.text = normalize_whitespace(&heading.text);
}

fn conform_code(code: &MarkupHighlightedText, kind: MarkupKind) -> Result<()> {
    ensure_code_text(&code.text, kind.as_str())
}

fn conform_web_link(link: &mut MarkupWebLink) -> Result<()> {
    ensure_link_text(&link.elements, MarkupKind::WebLink.as_str())?;
    ensure_target_url(&link.target_url)?;
    link.elements.iter_mut().try_for_each(conform_link_text)
}

fn conform_api_link(link: &mut MarkupApiLink) -> Result<()> {
    ensure_link_text(&link.elements, MarkupKind::ApiLink.as_str())?;
    link.elements.iter_mut().try_for_each(conform_link_text)
}

fn conform_row(row: &mut MarkupTableRow) -> Result<()> {
    row.cells
        .iter_mut()
        .flat_map(|cell| cell.elements.iter_mut())
        .try_for_each(conform_basic)
}

fn conform_table(table: &mut MarkupTable) -> Result<()> {
    table
        .header
        .iter_mut()
        .chain(table.rows.iter_mut())
        .try_for_each(conform_row)
}

fn conform_page(page: &mut MarkupPage) -> Result<()> {
    page.title = normalize_whitespace(&page.title);
    page.breadcrumb.iter_mut().try_for_each(conform_basic)?;
    page.elements.iter_mut().try_for_each(conform_structured)
}
