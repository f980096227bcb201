//! Options accepted by the markup constructors

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Syntax highlighter a renderer should apply to a code span or code box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Highlighter {
    /// No highlighting
    #[default]
    Plain,
    JavaScript,
    TypeScript,
    Json,
}

impl Highlighter {
    /// The tag string renderers see in serialized trees
    pub fn as_str(&self) -> &'static str {
        match self {
            Highlighter::Plain => "plain",
            Highlighter::JavaScript => "javascript",
            Highlighter::TypeScript => "typescript",
            Highlighter::Json => "json",
        }
    }
}

/// Formatting flags for text nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    /// Render the text in bold
    pub bold: bool,

    /// Render the text in italics
    pub italics: bool,
}

impl TextOptions {
    /// Options with bold enabled
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    /// Options with italics enabled
    pub fn italics() -> Self {
        Self {
            italics: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_highlighter_is_plain() {
        assert_eq!(Highlighter::default(), Highlighter::Plain);
        assert_eq!(Highlighter::default().as_str(), "plain");
    }

    #[test]
    fn test_text_options_helpers() {
        let plain = TextOptions {
            bold: false,
            italics: false,
        };
        assert_eq!(TextOptions::default(), plain);
        assert!(TextOptions::bold().bold);
        assert!(!TextOptions::bold().italics);
        assert!(TextOptions::italics().italics);
    }
}
