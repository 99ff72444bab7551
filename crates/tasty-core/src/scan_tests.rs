use crate::scan::{Cursor, find_matching, is_ident_dash_char, read_balanced_parens};

#[test]
fn cursor_eats_identifiers() {
    let mut cursor = Cursor::new("primary-color.5");
    assert_eq!(cursor.eat_ident_with_dashes(), "primary-color".len());
    assert!(cursor.eat('.'));
    assert_eq!(cursor.eat_digits(), 1);
    assert!(cursor.is_eof());
}

#[test]
fn cursor_ident_requires_letter_or_underscore() {
    let mut cursor = Cursor::new("9abc");
    assert!(!cursor.eat_ident());
    assert_eq!(cursor.pos(), 0);

    let mut cursor = Cursor::new("_abc9-x");
    assert!(cursor.eat_ident());
    assert_eq!(cursor.slice(0), "_abc9");
}

#[test]
fn cursor_steps_over_multibyte_chars() {
    let mut cursor = Cursor::new("é1");
    assert_eq!(cursor.bump(), Some('é'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.peek(), Some('1'));
}

#[test]
fn quoted_string_with_escape() {
    let src = r#""a\"b" rest"#;
    let mut cursor = Cursor::new(src);
    assert!(cursor.eat_quoted());
    assert_eq!(cursor.slice(0), r#""a\"b""#);
}

#[test]
fn unterminated_quote_runs_to_end() {
    let mut cursor = Cursor::new("'abc");
    assert!(cursor.eat_quoted());
    assert!(cursor.is_eof());
}

#[test]
fn matching_paren_counts_depth() {
    let src = "fn(a(b), c) tail";
    assert_eq!(find_matching(src, 2, '(', ')'), Some(10));
    assert_eq!(find_matching(src, 4, '(', ')'), Some(6));
}

#[test]
fn matching_paren_skips_quotes() {
    let src = r#"url(")") x"#;
    assert_eq!(find_matching(src, 3, '(', ')'), Some(7));
}

#[test]
fn unclosed_group_extends_to_end() {
    let src = "calc(1 + (2";
    let (body, next) = read_balanced_parens(src, 4);
    assert_eq!(&src[body], "1 + (2");
    assert_eq!(next, src.len());
}

#[test]
fn dash_is_identifier_char() {
    assert!(is_ident_dash_char('-'));
    assert!(!is_ident_dash_char('.'));
}

#[test]
fn number_literal_forms() {
    for (src, consumed) in [("12", "12"), ("-1.5x", "-1.5"), (".5", ".5"), ("+3px", "+3")] {
        let mut cursor = Cursor::new(src);
        assert!(cursor.eat_number_literal(), "{src}");
        assert_eq!(cursor.slice(0), consumed);
    }
}

#[test]
fn number_literal_needs_a_digit() {
    let mut cursor = Cursor::new("-x");
    assert!(!cursor.eat_number_literal());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn unit_after_number() {
    let mut cursor = Cursor::new("10px)");
    cursor.eat_number_literal();
    assert_eq!(cursor.eat_unit(), Some("px"));

    let mut cursor = Cursor::new("50%");
    cursor.eat_number_literal();
    assert_eq!(cursor.eat_unit(), Some("%"));

    let mut cursor = Cursor::new("7 ");
    cursor.eat_number_literal();
    assert_eq!(cursor.eat_unit(), None);
}
