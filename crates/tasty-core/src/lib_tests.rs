use crate::{Span, Token, TokenKind};

#[test]
fn span_shift_and_len() {
    let span = Span::new(2, 7).shift(10);
    assert_eq!(span, Span::new(12, 17));
    assert_eq!(span.len(), 5);
    assert!(span.contains(12));
    assert!(!span.contains(17));
}

#[test]
fn span_from_reversed_tuple_is_normalized() {
    let span = Span::from((9, 4));
    assert_eq!(span, Span::new(4, 9));
}

#[test]
fn span_serializes_as_pair() {
    let json = serde_json::to_string(&Span::new(3, 8)).unwrap();
    assert_eq!(json, "[3,8]");
    let back: Span = serde_json::from_str("[3,8]").unwrap();
    assert_eq!(back, Span::new(3, 8));
}

#[test]
fn token_text_is_sliced_from_input() {
    let token = Token::new(TokenKind::CssUnit, "gap 10px", Span::new(4, 8));
    assert_eq!(token.text, "10px");
    assert!(!token.has_children());
}

#[test]
fn shifted_rebases_children() {
    let input = "calc(1x)";
    let child = Token::new(TokenKind::CustomUnit, input, Span::new(5, 7));
    let token = Token::new(TokenKind::Function, input, Span::new(0, 8)).with_children(vec![child]);

    let moved = token.shifted(100);
    assert_eq!(moved.span, Span::new(100, 108));
    assert_eq!(moved.children[0].span, Span::new(105, 107));
    assert_eq!(moved.children[0].text, "1x");
}

#[test]
fn walk_is_depth_first() {
    let input = "a(b(c))";
    let c = Token::new(TokenKind::Identifier, input, Span::new(4, 5));
    let b = Token::new(TokenKind::Function, input, Span::new(2, 6)).with_children(vec![c]);
    let a = Token::new(TokenKind::Function, input, Span::new(0, 7)).with_children(vec![b]);

    let texts: Vec<_> = a.walk().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["a(b(c))", "b(c)", "c"]);
}

#[test]
fn state_only_kinds() {
    assert!(TokenKind::DefaultState.is_state_only());
    assert!(TokenKind::AtRule.is_state_only());
    assert!(!TokenKind::Operator.is_state_only());
    assert!(!TokenKind::Unknown.is_state_only());
    assert!(TokenKind::Whitespace.is_trivia());
}
