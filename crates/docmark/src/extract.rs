//! Plain-text projection of markup trees
//!
//! Extraction keeps the words of a tree and drops its formatting. The output
//! is meant for word counts, search indexes, and "is this documented" checks,
//! not for display. Code spans and code boxes are left out entirely.

use crate::ast::{
    BasicElement, LinkTextElement, MarkupApiLink, MarkupElement, MarkupHeading,
    MarkupHighlightedText, MarkupNoteBox, MarkupPage, MarkupTable, MarkupTableCell,
    MarkupTableRow, MarkupText, MarkupWebLink, StructuredElement,
};

/// A markup node that can write its plain text into a buffer
pub trait ExtractText {
    /// Append this node's text to `out`
    fn extract_into(&self, out: &mut String);
}

/// Extract the plain text of a sequence of markup nodes.
///
/// | Node | Text |
/// |---|---|
/// | text, headings | the text |
/// | break | `\n` |
/// | paragraph | `\n\n` |
/// | code, code box | nothing |
/// | links, note box | their elements |
/// | page | title, `\n`, then its elements |
/// | table | header row, then every row |
/// | table row | its cells, then `\n` |
/// | table cell | its elements, then `\n` |
pub fn extract_text_content<E: ExtractText>(elements: &[E]) -> String {
    let mut out = String::new();
    extract_all(elements, &mut out);
    tracing::trace!(
        elements = elements.len(),
        bytes = out.len(),
        "extracted text content"
    );
    out
}

fn extract_all<E: ExtractText>(elements: &[E], out: &mut String) {
    for element in elements {
        element.extract_into(out);
    }
}

// Group enums only dispatch; each emission rule lives on its payload type or
// in `extract_break` / `extract_paragraph`.

fn extract_break(out: &mut String) {
    out.push('\n');
}

fn extract_paragraph(out: &mut String) {
    out.push_str("\n\n");
}

impl ExtractText for LinkTextElement {
    fn extract_into(&self, out: &mut String) {
        match self {
            LinkTextElement::Text(text) => text.extract_into(out),
            LinkTextElement::Code(code) => code.extract_into(out),
            LinkTextElement::ApiLink(link) => link.extract_into(out),
        }
    }
}

impl ExtractText for BasicElement {
    fn extract_into(&self, out: &mut String) {
        match self {
            BasicElement::Text(text) => text.extract_into(out),
            BasicElement::Break => extract_break(out),
            BasicElement::Paragraph => extract_paragraph(out),
            BasicElement::Code(code) | BasicElement::CodeBox(code) => code.extract_into(out),
            BasicElement::Heading1(heading) | BasicElement::Heading2(heading) => {
                heading.extract_into(out);
            }
            BasicElement::WebLink(link) => link.extract_into(out),
            BasicElement::ApiLink(link) => link.extract_into(out),
            BasicElement::NoteBox(note) => note.extract_into(out),
        }
    }
}

impl ExtractText for StructuredElement {
    fn extract_into(&self, out: &mut String) {
        match self {
            StructuredElement::Text(text) => text.extract_into(out),
            StructuredElement::Break => extract_break(out),
            StructuredElement::Paragraph => extract_paragraph(out),
            StructuredElement::Code(code) | StructuredElement::CodeBox(code) => {
                code.extract_into(out);
            }
            StructuredElement::Heading1(heading) | StructuredElement::Heading2(heading) => {
                heading.extract_into(out);
            }
            StructuredElement::WebLink(link) => link.extract_into(out),
            StructuredElement::ApiLink(link) => link.extract_into(out),
            StructuredElement::NoteBox(note) => note.extract_into(out),
            StructuredElement::Table(table) => table.extract_into(out),
        }
    }
}

impl ExtractText for MarkupElement {
    fn extract_into(&self, out: &mut String) {
        match self {
            MarkupElement::Text(text) => text.extract_into(out),
            MarkupElement::Break => extract_break(out),
            MarkupElement::Paragraph => extract_paragraph(out),
            MarkupElement::Code(code) | MarkupElement::CodeBox(code) => code.extract_into(out),
            MarkupElement::Heading1(heading) | MarkupElement::Heading2(heading) => {
                heading.extract_into(out);
            }
            MarkupElement::WebLink(link) => link.extract_into(out),
            MarkupElement::ApiLink(link) => link.extract_into(out),
            MarkupElement::NoteBox(note) => note.extract_into(out),
            MarkupElement::TableCell(cell) => cell.extract_into(out),
            MarkupElement::TableRow(row) => row.extract_into(out),
            MarkupElement::Table(table) => table.extract_into(out),
            MarkupElement::Page(page) => page.extract_into(out),
        }
    }
}

impl ExtractText for MarkupText {
    fn extract_into(&self, out: &mut String) {
        out.push_str(&self.text);
    }
}

impl ExtractText for MarkupHeading {
    fn extract_into(&self, out: &mut String) {
        out.push_str(&self.text);
    }
}

// Code is not prose
impl ExtractText for MarkupHighlightedText {
    fn extract_into(&self, _out: &mut String) {}
}

impl ExtractText for MarkupWebLink {
    fn extract_into(&self, out: &mut String) {
        extract_all(&self.elements, out);
    }
}

impl ExtractText for MarkupApiLink {
    fn extract_into(&self, out: &mut String) {
        extract_all(&self.elements, out);
    }
}

impl ExtractText for MarkupNoteBox {
    fn extract_into(&self, out: &mut String) {
        extract_all(&self.elements, out);
    }
}

impl ExtractText for MarkupTableCell {
    fn extract_into(&self, out: &mut String) {
        extract_all(&self.elements, out);
        out.push('\n');
    }
}

impl ExtractText for MarkupTableRow {
    fn extract_into(&self, out: &mut String) {
        extract_all(&self.cells, out);
        out.push('\n');
    }
}

impl ExtractText for MarkupTable {
    fn extract_into(&self, out: &mut String) {
        if let Some(header) = &self.header {
            header.extract_into(out);
        }
        extract_all(&self.rows, out);
    }
}

// Breadcrumbs are navigation, not page content
impl ExtractText for MarkupPage {
    fn extract_into(&self, out: &mut String) {
        out.push_str(&self.title);
        out.push('\n');
        extract_all(&self.elements, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ApiItemReference, BREAK, PARAGRAPH};
    use crate::build::{
        api_link, api_link_from_text, code, code_box, heading1, heading2, note_box, page, table,
        table_row, text, web_link, web_link_from_text,
    };
    use crate::options::{Highlighter, TextOptions};
    use proptest::prelude::*;

    fn basic(s: &str) -> Vec<BasicElement> {
        text(s, TextOptions::default())
            .into_iter()
            .map(Into::into)
            .collect()
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(extract_text_content::<MarkupElement>(&[]), "");
    }

    #[test]
    fn test_break_between_text() {
        let mut elements = basic("a");
        elements.push(BREAK.clone());
        elements.extend(basic("b"));
        assert_eq!(extract_text_content(&elements), "a\nb");
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(extract_text_content(&[PARAGRAPH.clone()]), "\n\n");
    }

    #[test]
    fn test_headings_have_no_separator() {
        let elements = vec![heading1("Title"), heading2("Sub"), basic("Body").remove(0)];
        assert_eq!(extract_text_content(&elements), "TitleSubBody");
    }

    #[test]
    fn test_page() {
        let mut doc = page("Title");
        doc.elements.extend(basic("Body").into_iter().map(Into::into));
        assert_eq!(extract_text_content(&[doc]), "Title\nBody");
    }

    #[test]
    fn test_page_skips_breadcrumb() {
        let mut doc = page("Widget");
        doc.breadcrumb.extend(basic("Home"));
        assert_eq!(extract_text_content(&[doc]), "Widget\n");
    }

    #[test]
    fn test_table_newlines() {
        let mut t = table(Some(vec![basic("H1")]));
        t.rows.push(table_row(vec![basic("R1")]));
        // cell newline plus row newline
        assert_eq!(extract_text_content(&[t]), "H1\n\nR1\n\n");
    }

    #[test]
    fn test_table_row_with_several_cells() {
        let row = table_row(vec![basic("a"), basic("b")]);
        assert_eq!(extract_text_content(&[row]), "a\nb\n\n");
    }

    #[test]
    fn test_table_reflects_appended_rows() {
        let mut t = table(None);
        assert!(t.header.is_none());
        assert!(t.rows.is_empty());
        assert_eq!(extract_text_content(std::slice::from_ref(&t)), "");

        t.rows.push(table_row(vec![basic("added")]));
        assert_eq!(extract_text_content(&[t]), "added\n\n");
    }

    #[test]
    fn test_code_is_excluded_at_any_depth() {
        let secret = "let hidden = 42;";
        let mut t = table(None);
        t.rows.push(table_row(vec![vec![note_box(vec![
            code_box(secret, Highlighter::JavaScript).unwrap(),
        ])]]));

        let mut doc = page("Page");
        doc.elements.push(code_box(secret, Highlighter::Plain).unwrap().into());
        doc.elements.push(t.into());
        doc.elements.push(
            web_link(
                vec![code(secret, Highlighter::Plain).unwrap()],
                "https://example.com",
            )
            .unwrap()
            .into(),
        );

        let extracted = extract_text_content(&[MarkupElement::from(doc)]);
        assert!(!extracted.contains(secret));
        assert_eq!(extracted, "Page\n\n\n");
    }

    #[test]
    fn test_links_and_note_box() {
        let target = ApiItemReference::new("widgets", "Widget");
        let link = api_link(
            vec![
                text("see ", TextOptions::default()).remove(0),
                api_link_from_text("Widget", target.clone()).unwrap(),
            ],
            target,
        )
        .unwrap();

        let elements = vec![
            link.into(),
            BREAK.clone(),
            web_link_from_text("docs", "https://example.com").unwrap(),
            note_box(basic(" (note)")),
        ];
        assert_eq!(extract_text_content(&elements), "see Widget\ndocs (note)");
    }

    #[test]
    fn test_every_element_level() {
        let elements: Vec<MarkupElement> = vec![
            MarkupElement::from(table_row(vec![basic("row")]).cells.remove(0)),
            table_row(vec![basic("r")]).into(),
            page("P").into(),
        ];
        assert_eq!(extract_text_content(&elements), "row\nr\n\nP\n");
    }

    #[test]
    fn test_same_node_extracts_alike_in_every_group() {
        let nodes = vec![
            heading1("Head"),
            BREAK.clone(),
            code_box("skip()", Highlighter::Plain).unwrap(),
            PARAGRAPH.clone(),
            basic("tail").remove(0),
        ];
        let structured: Vec<StructuredElement> = nodes.iter().cloned().map(Into::into).collect();
        let markup: Vec<MarkupElement> = nodes.iter().cloned().map(Into::into).collect();

        let expected = "Head\n\n\ntail";
        assert_eq!(extract_text_content(&nodes), expected);
        assert_eq!(extract_text_content(&structured), expected);
        assert_eq!(extract_text_content(&markup), expected);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let mut doc = page("Title");
        doc.elements.push(heading1("Heading").into());
        doc.elements.push(PARAGRAPH.clone().into());
        doc.elements.extend(basic("Body").into_iter().map(Into::into));

        let first = extract_text_content(std::slice::from_ref(&doc));
        let second = extract_text_content(std::slice::from_ref(&doc));
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn test_text_extracts_to_concatenation(
            words in prop::collection::vec("[a-z]{1,8}", 0..10)
        ) {
            let elements: Vec<BasicElement> = words
                .iter()
                .flat_map(|w| basic(w))
                .collect();
            prop_assert_eq!(extract_text_content(&elements), words.concat());
        }

        #[test]
        fn test_breaks_count_as_newlines(breaks in 0usize..20) {
            let elements = vec![BREAK.clone(); breaks];
            prop_assert_eq!(extract_text_content(&elements), "\n".repeat(breaks));
        }
    }
}
