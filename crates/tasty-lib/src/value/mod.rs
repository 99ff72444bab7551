//! Value grammar: one style property value to a token tree.
//!
//! Classification is permissive. Names the project does not know still get
//! their most likely kind; the validator decides whether they are errors.

mod lexer;

#[cfg(test)]
mod lexer_tests;

use tasty_core::{NameLookup, Token};

/// Project names the value tokenizer consults while classifying.
///
/// Color token and custom property names never change a token's kind, so
/// they are not part of the context.
#[derive(Clone, Copy, Default)]
pub struct ValueContext<'a> {
    /// Extra units from configuration; built-in units are always known.
    pub units: Option<&'a dyn NameLookup>,
    pub presets: Option<&'a dyn NameLookup>,
}

impl<'a> ValueContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, units: &'a dyn NameLookup) -> Self {
        self.units = Some(units);
        self
    }

    pub fn with_presets(mut self, presets: &'a dyn NameLookup) -> Self {
        self.presets = Some(presets);
        self
    }

    fn has_unit(&self, unit: &str) -> bool {
        self.units.is_some_and(|units| units.contains_name(unit))
    }

    fn has_preset(&self, name: &str) -> bool {
        self.presets.is_some_and(|presets| presets.contains_name(name))
    }
}

impl std::fmt::Debug for ValueContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueContext")
            .field("units", &self.units.is_some())
            .field("presets", &self.presets.is_some())
            .finish()
    }
}

/// Tokenize a style value.
///
/// Total: every byte of `input` is covered by exactly one top-level token,
/// whitespace included. Spans are relative to `input`.
pub fn tokenize(input: &str, ctx: ValueContext<'_>) -> Vec<Token> {
    lexer::ValueLexer::new(input, ctx).run()
}
