//! State-key grammar: one conditional mapping key to a token tree.
//!
//! Logical operators and grouping parens come out as a flat stream. No
//! precedence tree is built; the style engine interprets the sequence.

mod lexer;


use tasty_core::{NameLookup, Span, Token, TokenKind};

/// Tokenize a state key.
///
/// `aliases` holds known state alias names with their `@`. A bare `@name`
/// found there is a [`TokenKind::StateAlias`] even when it spells an at-rule
/// keyword.
///
/// An empty or whitespace-only key is a single [`TokenKind::DefaultState`];
/// a key starting with `&` is a single [`TokenKind::SelectorAffix`].
pub fn tokenize(input: &str, aliases: &dyn NameLookup) -> Vec<Token> {
    let whole = Span::new(0, input.len());
    if input.trim().is_empty() {
        return vec![Token::new(TokenKind::DefaultState, input, whole)];
    }
    if input.starts_with('&') {
        return vec![Token::new(TokenKind::SelectorAffix, input, whole)];
    }
    lexer::StateLexer::new(input, aliases).key()
}
