use indexmap::IndexSet;
use tasty_core::{Token, TokenKind};

use super::{ValueContext, tokenize};
use crate::dump::{DumpOptions, dump_tokens};

fn snapshot(input: &str) -> String {
    dump_tokens(&tokenize(input, ValueContext::new()), DumpOptions::full())
}

fn kinds(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input, ValueContext::new())
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| (t.kind, t.text))
        .collect()
}

fn single(input: &str) -> Token {
    let mut tokens = tokenize(input, ValueContext::new());
    assert_eq!(tokens.len(), 1, "expected one token for {input:?}: {tokens:?}");
    tokens.remove(0)
}

#[test]
fn color_token() {
    let token = single("#primary");
    assert_eq!(token.kind, TokenKind::ColorToken);
    assert_eq!(token.text, "#primary");
}

#[test]
fn hex_color_lengths() {
    for input in ["#abc", "#abcd", "#aabbcc", "#aabbccdd", "#FFF"] {
        assert_eq!(single(input).kind, TokenKind::HexColor, "{input}");
    }
}

#[test]
fn hex_run_broken_by_identifier_char() {
    assert_eq!(single("#abc-color").kind, TokenKind::ColorToken);
    assert_eq!(single("#abcdefg").kind, TokenKind::ColorToken);
    assert_eq!(single("#abcde").kind, TokenKind::ColorToken);
}

#[test]
fn color_token_opacity_suffix() {
    assert_eq!(single("#primary.50").text, "#primary.50");
    assert_eq!(single("#primary.$alpha").text, "#primary.$alpha");
    assert_eq!(
        kinds("#primary."),
        vec![
            (TokenKind::ColorToken, "#primary".to_string()),
            (TokenKind::Unknown, ".".to_string()),
        ]
    );
}

#[test]
fn name_references() {
    insta::assert_snapshot!(snapshot("##primary $$gap $gap"), @r###"
    ColorTokenName "##primary" 0..9
    Whitespace " " 9..10
    CustomPropertyName "$$gap" 10..15
    Whitespace " " 15..16
    CustomProperty "$gap" 16..20
    "###);
}

#[test]
fn lone_sigils_are_unknown() {
    assert_eq!(single("#").kind, TokenKind::Unknown);
    assert_eq!(single("$").kind, TokenKind::Unknown);
}

#[test]
fn numbers_and_units() {
    assert_eq!(
        kinds("2x 10px 50% 1.5 .5 3foo"),
        vec![
            (TokenKind::CustomUnit, "2x".to_string()),
            (TokenKind::CssUnit, "10px".to_string()),
            (TokenKind::CssUnit, "50%".to_string()),
            (TokenKind::Number, "1.5".to_string()),
            (TokenKind::Number, ".5".to_string()),
            (TokenKind::CustomUnit, "3foo".to_string()),
        ]
    );
}

#[test]
fn configured_unit_wins_over_css_unit() {
    let units: IndexSet<String> = ["em".to_string()].into_iter().collect();
    let tokens = tokenize("2em", ValueContext::new().with_units(&units));
    assert_eq!(tokens[0].kind, TokenKind::CustomUnit);

    assert_eq!(single("2em").kind, TokenKind::CssUnit);
}

#[test]
fn sign_binds_to_following_digit() {
    assert_eq!(
        kinds("-1x 1 - 2 +.5 a/b 2*3"),
        vec![
            (TokenKind::CustomUnit, "-1x".to_string()),
            (TokenKind::Number, "1".to_string()),
            (TokenKind::Operator, "-".to_string()),
            (TokenKind::Number, "2".to_string()),
            (TokenKind::Number, "+.5".to_string()),
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Operator, "/".to_string()),
            (TokenKind::Identifier, "b".to_string()),
            (TokenKind::Number, "2".to_string()),
            (TokenKind::Operator, "*".to_string()),
            (TokenKind::Number, "3".to_string()),
        ]
    );
}

#[test]
fn dashed_identifiers() {
    assert_eq!(single("-webkit-box").kind, TokenKind::Identifier);
    assert_eq!(single("--custom").kind, TokenKind::Identifier);
}

#[test]
fn identifier_classification_order() {
    let presets = ["h1", "top"];
    let ctx = ValueContext::new().with_presets(&presets);
    let classified: Vec<_> = tokenize("true bold top h1 calc auto", ctx)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        classified,
        vec![
            TokenKind::Boolean,
            TokenKind::PresetModifier,
            TokenKind::Direction,
            TokenKind::Preset,
            TokenKind::Function,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn function_children_are_rebased() {
    insta::assert_snapshot!(snapshot("calc(1x + $gap)"), @r#"
    Function "calc(1x + $gap)" 0..15
      CustomUnit "1x" 5..7
      Whitespace " " 7..8
      Operator "+" 8..9
      Whitespace " " 9..10
      CustomProperty "$gap" 10..14
    "#);
}

#[test]
fn nested_functions() {
    insta::assert_snapshot!(snapshot("2x rgb(#fff, calc(1x))"), @r##"
    CustomUnit "2x" 0..2
    Whitespace " " 2..3
    Function "rgb(#fff, calc(1x))" 3..22
      HexColor "#fff" 7..11
      Punctuation "," 11..12
      Whitespace " " 12..13
      Function "calc(1x)" 13..21
        CustomUnit "1x" 18..20
    "##);
}

#[test]
fn unknown_function_is_still_a_function() {
    let token = single("frobnicate(1)");
    assert_eq!(token.kind, TokenKind::Function);
    assert_eq!(token.children.len(), 1);
}

#[test]
fn unclosed_function_runs_to_end() {
    let token = single("calc(1x + 2");
    assert_eq!(token.kind, TokenKind::Function);
    assert_eq!(token.span.end, 11);
    assert_eq!(token.children.last().map(|t| t.text.as_str()), Some("2"));
}

#[test]
fn strings_and_quotes_inside_functions() {
    assert_eq!(
        kinds(r#"url(")") 'a b'"#)
            .into_iter()
            .map(|(k, _)| k)
            .collect::<Vec<_>>(),
        vec![TokenKind::Function, TokenKind::String]
    );
}

#[test]
fn spans_tile_the_input() {
    let inputs = [
        "",
        "   ",
        "#primary.50 2x calc(1x+ $a) ~?",
        "1 2 3 ((",
        "é → #x",
        "#",
        "##",
        "$$",
        "'unterminated",
        "calc(",
        "-",
        "--",
    ];
    for input in inputs {
        let tokens = tokenize(input, ValueContext::new());
        let mut offset = 0;
        for token in &tokens {
            assert_eq!(token.span.start, offset, "gap in {input:?}: {tokens:?}");
            assert!(token.span.end > token.span.start, "empty token in {input:?}");
            assert_eq!(token.text, &input[token.span.range()]);
            offset = token.span.end;
        }
        assert_eq!(offset, input.len(), "{input:?}");
    }
}
