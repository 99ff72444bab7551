//! Style-object forest: the host-language-neutral input of the analyzer.
//!
//! Whatever finds style objects in a host file (an AST walk, a test
//! fixture, a JSON file) hands them over in this shape. All spans are byte
//! offsets into the host file.

use serde::{Deserialize, Serialize};
use tasty_core::Span;

/// One object literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleObject {
    #[serde(default)]
    pub properties: Vec<StyleProperty>,
}

impl StyleObject {
    pub fn new(properties: Vec<StyleProperty>) -> Self {
        Self { properties }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleProperty> {
        self.properties.iter()
    }
}

impl<'a> IntoIterator for &'a StyleObject {
    type Item = &'a StyleProperty;
    type IntoIter = std::slice::Iter<'a, StyleProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProperty {
    pub key: String,
    pub key_span: Span,
    pub value: StyleValue,
}

impl StyleProperty {
    pub fn new(key: impl Into<String>, key_span: Span, value: StyleValue) -> Self {
        Self {
            key: key.into(),
            key_span,
            value,
        }
    }

    /// Offset of the key's text in the host file.
    pub fn key_offset(&self) -> usize {
        self.key_span.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StyleValue {
    /// String literal; `span` covers the content without quotes.
    String { text: String, span: Span },
    Object(StyleObject),
    /// Anything else (numbers, identifiers, calls). Not analyzed.
    Other { span: Span },
}

impl StyleValue {
    /// String literal whose content starts at `offset`.
    pub fn string(text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let span = Span::new(offset, offset + text.len());
        Self::String { text, span }
    }

    pub fn object(properties: Vec<StyleProperty>) -> Self {
        Self::Object(StyleObject::new(properties))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&StyleObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}
