//! Markup tree
//!
//! This module defines the node types of a documentation page. Every node
//! carries a `kind` tag that determines its fields. The set of kinds is
//! closed, and three nested groups constrain where a node may appear:
//!
//! - [`LinkTextElement`]: what a link may display (text, inline code, API links)
//! - [`BasicElement`]: what a note box, table cell or breadcrumb may hold
//! - [`StructuredElement`]: what a page may hold (basic elements and tables)
//!
//! [`MarkupElement`] is the union of every kind.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::options::Highlighter;
use crate::MarkupError;

/// Forced line break. Shared by every tree that uses one.
pub static BREAK: BasicElement = BasicElement::Break;

/// Paragraph separator. Shared by every tree that uses one.
pub static PARAGRAPH: BasicElement = BasicElement::Paragraph;

/// The `kind` tag of a markup node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    Text,
    Break,
    Paragraph,
    Code,
    CodeBox,
    Heading1,
    Heading2,
    WebLink,
    ApiLink,
    NoteBox,
    TableCell,
    TableRow,
    Table,
    Page,
}

impl MarkupKind {
    /// Every kind, in declaration order
    pub const ALL: [MarkupKind; 14] = [
        MarkupKind::Text,
        MarkupKind::Break,
        MarkupKind::Paragraph,
        MarkupKind::Code,
        MarkupKind::CodeBox,
        MarkupKind::Heading1,
        MarkupKind::Heading2,
        MarkupKind::WebLink,
        MarkupKind::ApiLink,
        MarkupKind::NoteBox,
        MarkupKind::TableCell,
        MarkupKind::TableRow,
        MarkupKind::Table,
        MarkupKind::Page,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkupKind::Text => "text",
            MarkupKind::Break => "break",
            MarkupKind::Paragraph => "paragraph",
            MarkupKind::Code => "code",
            MarkupKind::CodeBox => "code-box",
            MarkupKind::Heading1 => "heading1",
            MarkupKind::Heading2 => "heading2",
            MarkupKind::WebLink => "web-link",
            MarkupKind::ApiLink => "api-link",
            MarkupKind::NoteBox => "note-box",
            MarkupKind::TableCell => "table-cell",
            MarkupKind::TableRow => "table-row",
            MarkupKind::Table => "table",
            MarkupKind::Page => "page",
        }
    }

    /// Whether nodes of this kind may appear inside a link
    pub fn is_link_text(&self) -> bool {
        matches!(self, MarkupKind::Text | MarkupKind::Code | MarkupKind::ApiLink)
    }

    /// Whether nodes of this kind may appear inside a note box or table cell
    pub fn is_basic(&self) -> bool {
        !matches!(
            self,
            MarkupKind::TableCell | MarkupKind::TableRow | MarkupKind::Table | MarkupKind::Page
        )
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkupKind {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarkupKind::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| MarkupError::UnsupportedElement(format!("unknown markup kind `{s}`")))
    }
}

/// Reference to a documented API item.
///
/// Produced by the reference resolver and stored as-is; nothing in this crate
/// looks inside it. Empty strings mean "not present".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ApiItemReference {
    pub scope_name: String,
    pub package_name: String,
    pub export_name: String,
    pub member_name: String,
}

impl ApiItemReference {
    pub fn new(package_name: &str, export_name: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            export_name: export_name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope_name: &str) -> Self {
        self.scope_name = scope_name.to_string();
        self
    }

    pub fn with_member(mut self, member_name: &str) -> Self {
        self.member_name = member_name.to_string();
        self
    }
}

impl fmt::Display for ApiItemReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scope_name.is_empty() {
            write!(f, "@{}/", self.scope_name.trim_start_matches('@'))?;
        }
        write!(f, "{}:{}", self.package_name, self.export_name)?;
        if !self.member_name.is_empty() {
            write!(f, ".{}", self.member_name)?;
        }
        Ok(())
    }
}

/// Plain text, optionally bold and/or italic
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupText {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "std::ops::Not::not"))]
    pub bold: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "std::ops::Not::not"))]
    pub italics: bool,
}

/// Source code shown inline (`code`) or as a block (`code-box`)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupHighlightedText {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlighter: Highlighter,
}

/// Heading text (level is given by the variant holding it)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupHeading {
    pub text: String,
}

/// Hyperlink to an external URL
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MarkupWebLink {
    /// Link text, never empty
    pub elements: Vec<LinkTextElement>,
    /// Target URL, never blank
    pub target_url: String,
}

/// Hyperlink to another documented API item
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupApiLink {
    /// Link text, never empty
    pub elements: Vec<LinkTextElement>,
    pub target: ApiItemReference,
}

/// Highlighted box, e.g. a "Note:" callout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupNoteBox {
    pub elements: Vec<BasicElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupTableCell {
    pub elements: Vec<BasicElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupTableRow {
    pub cells: Vec<MarkupTableCell>,
}

/// Table with an optional header row. Callers append to `rows`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupTable {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub header: Option<MarkupTableRow>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rows: Vec<MarkupTableRow>,
}

/// A documentation page. Callers append to `breadcrumb` and `elements`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupPage {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub breadcrumb: Vec<BasicElement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub elements: Vec<StructuredElement>,
}

/// Nodes allowed as the visible content of a link
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum LinkTextElement {
    Text(MarkupText),
    Code(MarkupHighlightedText),
    ApiLink(MarkupApiLink),
}

/// Nodes allowed inside note boxes, table cells and breadcrumbs
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum BasicElement {
    Text(MarkupText),
    Break,
    Paragraph,
    Code(MarkupHighlightedText),
    CodeBox(MarkupHighlightedText),
    Heading1(MarkupHeading),
    Heading2(MarkupHeading),
    WebLink(MarkupWebLink),
    ApiLink(MarkupApiLink),
    NoteBox(MarkupNoteBox),
}

/// Nodes allowed directly on a page
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum StructuredElement {
    Text(MarkupText),
    Break,
    Paragraph,
    Code(MarkupHighlightedText),
    CodeBox(MarkupHighlightedText),
    Heading1(MarkupHeading),
    Heading2(MarkupHeading),
    WebLink(MarkupWebLink),
    ApiLink(MarkupApiLink),
    NoteBox(MarkupNoteBox),
    Table(MarkupTable),
}

/// Any markup node
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum MarkupElement {
    Text(MarkupText),
    Break,
    Paragraph,
    Code(MarkupHighlightedText),
    CodeBox(MarkupHighlightedText),
    Heading1(MarkupHeading),
    Heading2(MarkupHeading),
    WebLink(MarkupWebLink),
    ApiLink(MarkupApiLink),
    NoteBox(MarkupNoteBox),
    TableCell(MarkupTableCell),
    TableRow(MarkupTableRow),
    Table(MarkupTable),
    Page(MarkupPage),
}

impl LinkTextElement {
    pub fn kind(&self) -> MarkupKind {
        match self {
            LinkTextElement::Text(_) => MarkupKind::Text,
            LinkTextElement::Code(_) => MarkupKind::Code,
            LinkTextElement::ApiLink(_) => MarkupKind::ApiLink,
        }
    }
}

impl BasicElement {
    pub fn kind(&self) -> MarkupKind {
        match self {
            BasicElement::Text(_) => MarkupKind::Text,
            BasicElement::Break => MarkupKind::Break,
            BasicElement::Paragraph => MarkupKind::Paragraph,
            BasicElement::Code(_) => MarkupKind::Code,
            BasicElement::CodeBox(_) => MarkupKind::CodeBox,
            BasicElement::Heading1(_) => MarkupKind::Heading1,
            BasicElement::Heading2(_) => MarkupKind::Heading2,
            BasicElement::WebLink(_) => MarkupKind::WebLink,
            BasicElement::ApiLink(_) => MarkupKind::ApiLink,
            BasicElement::NoteBox(_) => MarkupKind::NoteBox,
        }
    }
}

impl StructuredElement {
    pub fn kind(&self) -> MarkupKind {
        match self {
            StructuredElement::Text(_) => MarkupKind::Text,
            StructuredElement::Break => MarkupKind::Break,
            StructuredElement::Paragraph => MarkupKind::Paragraph,
            StructuredElement::Code(_) => MarkupKind::Code,
            StructuredElement::CodeBox(_) => MarkupKind::CodeBox,
            StructuredElement::Heading1(_) => MarkupKind::Heading1,
            StructuredElement::Heading2(_) => MarkupKind::Heading2,
            StructuredElement::WebLink(_) => MarkupKind::WebLink,
            StructuredElement::ApiLink(_) => MarkupKind::ApiLink,
            StructuredElement::NoteBox(_) => MarkupKind::NoteBox,
            StructuredElement::Table(_) => MarkupKind::Table,
        }
    }
}

impl MarkupElement {
    pub fn kind(&self) -> MarkupKind {
        match self {
            MarkupElement::Text(_) => MarkupKind::Text,
            MarkupElement::Break => MarkupKind::Break,
            MarkupElement::Paragraph => MarkupKind::Paragraph,
            MarkupElement::Code(_) => MarkupKind::Code,
            MarkupElement::CodeBox(_) => MarkupKind::CodeBox,
            MarkupElement::Heading1(_) => MarkupKind::Heading1,
            MarkupElement::Heading2(_) => MarkupKind::Heading2,
            MarkupElement::WebLink(_) => MarkupKind::WebLink,
            MarkupElement::ApiLink(_) => MarkupKind::ApiLink,
            MarkupElement::NoteBox(_) => MarkupKind::NoteBox,
            MarkupElement::TableCell(_) => MarkupKind::TableCell,
            MarkupElement::TableRow(_) => MarkupKind::TableRow,
            MarkupElement::Table(_) => MarkupKind::Table,
            MarkupElement::Page(_) => MarkupKind::Page,
        }
    }
}

impl From<MarkupText> for LinkTextElement {
    fn from(text: MarkupText) -> Self {
        LinkTextElement::Text(text)
    }
}

impl From<MarkupApiLink> for LinkTextElement {
    fn from(link: MarkupApiLink) -> Self {
        LinkTextElement::ApiLink(link)
    }
}

impl From<LinkTextElement> for BasicElement {
    fn from(element: LinkTextElement) -> Self {
        match element {
            LinkTextElement::Text(text) => BasicElement::Text(text),
            LinkTextElement::Code(code) => BasicElement::Code(code),
            LinkTextElement::ApiLink(link) => BasicElement::ApiLink(link),
        }
    }
}

impl From<MarkupWebLink> for BasicElement {
    fn from(link: MarkupWebLink) -> Self {
        BasicElement::WebLink(link)
    }
}

impl From<MarkupNoteBox> for BasicElement {
    fn from(note: MarkupNoteBox) -> Self {
        BasicElement::NoteBox(note)
    }
}

impl From<BasicElement> for StructuredElement {
    fn from(element: BasicElement) -> Self {
        match element {
            BasicElement::Text(text) => StructuredElement::Text(text),
            BasicElement::Break => StructuredElement::Break,
            BasicElement::Paragraph => StructuredElement::Paragraph,
            BasicElement::Code(code) => StructuredElement::Code(code),
            BasicElement::CodeBox(code) => StructuredElement::CodeBox(code),
            BasicElement::Heading1(heading) => StructuredElement::Heading1(heading),
            BasicElement::Heading2(heading) => StructuredElement::Heading2(heading),
            BasicElement::WebLink(link) => StructuredElement::WebLink(link),
            BasicElement::ApiLink(link) => StructuredElement::ApiLink(link),
            BasicElement::NoteBox(note) => StructuredElement::NoteBox(note),
        }
    }
}

impl From<LinkTextElement> for StructuredElement {
    fn from(element: LinkTextElement) -> Self {
        BasicElement::from(element).into()
    }
}

impl From<MarkupTable> for StructuredElement {
    fn from(table: MarkupTable) -> Self {
        StructuredElement::Table(table)
    }
}

impl From<StructuredElement> for MarkupElement {
    fn from(element: StructuredElement) -> Self {
        match element {
            StructuredElement::Text(text) => MarkupElement::Text(text),
            StructuredElement::Break => MarkupElement::Break,
            StructuredElement::Paragraph => MarkupElement::Paragraph,
            StructuredElement::Code(code) => MarkupElement::Code(code),
            StructuredElement::CodeBox(code) => MarkupElement::CodeBox(code),
            StructuredElement::Heading1(heading) => MarkupElement::Heading1(heading),
            StructuredElement::Heading2(heading) => MarkupElement::Heading2(heading),
            StructuredElement::WebLink(link) => MarkupElement::WebLink(link),
            StructuredElement::ApiLink(link) => MarkupElement::ApiLink(link),
            StructuredElement::NoteBox(note) => MarkupElement::NoteBox(note),
            StructuredElement::Table(table) => MarkupElement::Table(table),
        }
    }
}

impl From<BasicElement> for MarkupElement {
    fn from(element: BasicElement) -> Self {
        StructuredElement::from(element).into()
    }
}

impl From<LinkTextElement> for MarkupElement {
    fn from(element: LinkTextElement) -> Self {
        BasicElement::from(element).into()
    }
}

impl From<MarkupTableCell> for MarkupElement {
    fn from(cell: MarkupTableCell) -> Self {
        MarkupElement::TableCell(cell)
    }
}

impl From<MarkupTableRow> for MarkupElement {
    fn from(row: MarkupTableRow) -> Self {
        MarkupElement::TableRow(row)
    }
}

impl From<MarkupTable> for MarkupElement {
    fn from(table: MarkupTable) -> Self {
        MarkupElement::Table(table)
    }
}

impl From<MarkupPage> for MarkupElement {
    fn from(page: MarkupPage) -> Self {
        MarkupElement::Page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> MarkupText {
        MarkupText {
            text: text.to_string(),
            bold: false,
            italics: false,
        }
    }

    #[test]
    fn test_kind_round_trips_through_tag() {
        for kind in MarkupKind::ALL {
            assert_eq!(kind.as_str().parse::<MarkupKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let err = "blink".parse::<MarkupKind>().unwrap_err();
        assert!(matches!(err, MarkupError::UnsupportedElement(ref msg) if msg.contains("blink")));
    }

    #[test]
    fn test_kind_groups() {
        let link_text: Vec<_> = MarkupKind::ALL.iter().filter(|k| k.is_link_text()).collect();
        assert_eq!(
            link_text,
            vec![&MarkupKind::Text, &MarkupKind::Code, &MarkupKind::ApiLink]
        );

        assert!(MarkupKind::NoteBox.is_basic());
        assert!(MarkupKind::Break.is_basic());
        assert!(!MarkupKind::Table.is_basic());
        assert!(!MarkupKind::TableCell.is_basic());
        assert!(!MarkupKind::Page.is_basic());
    }

    #[test]
    fn test_singletons() {
        assert_eq!(BREAK.kind(), MarkupKind::Break);
        assert_eq!(PARAGRAPH.kind(), MarkupKind::Paragraph);
    }

    #[test]
    fn test_widening_keeps_kind() {
        let link = LinkTextElement::ApiLink(MarkupApiLink {
            elements: vec![plain("Foo").into()],
            target: ApiItemReference::new("pkg", "Foo"),
        });
        let basic = BasicElement::from(link.clone());
        let structured = StructuredElement::from(basic.clone());
        let element = MarkupElement::from(structured.clone());

        assert_eq!(link.kind(), MarkupKind::ApiLink);
        assert_eq!(basic.kind(), MarkupKind::ApiLink);
        assert_eq!(structured.kind(), MarkupKind::ApiLink);
        assert_eq!(element.kind(), MarkupKind::ApiLink);
    }

    #[test]
    fn test_structured_table_kind() {
        let table = StructuredElement::from(MarkupTable::default());
        assert_eq!(table.kind(), MarkupKind::Table);
        assert_eq!(MarkupElement::from(table).kind(), MarkupKind::Table);
    }

    #[test]
    fn test_api_item_reference_display() {
        let reference = ApiItemReference::new("core", "Widget");
        assert_eq!(reference.to_string(), "core:Widget");

        let reference = reference.with_scope("acme").with_member("render");
        assert_eq!(reference.to_string(), "@acme/core:Widget.render");
    }
}
