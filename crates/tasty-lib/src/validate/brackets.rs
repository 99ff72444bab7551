use tasty_core::Span;
use tasty_core::scan::Cursor;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Check `(`/`[` balance of a raw state key.
///
/// Works on the text alone; quoted strings are skipped. A mismatched closer
/// still consumes its opener so one typo yields one error.
pub fn check_brackets(key: &str, base: usize, diagnostics: &mut Diagnostics) {
    let mut open: Vec<(char, usize)> = Vec::new();
    let mut cursor = Cursor::new(key);

    while let Some(c) = cursor.peek() {
        if c == '"' || c == '\'' {
            cursor.eat_quoted();
            continue;
        }
        let at = cursor.pos();
        cursor.bump();
        let span = Span::new(base + at, base + cursor.pos());

        match c {
            '(' | '[' => open.push((c, at)),
            ')' | ']' => match open.pop() {
                None => diagnostics
                    .report(DiagnosticKind::UnmatchedBracket, span)
                    .message(c.to_string())
                    .emit(),
                Some((opener, _)) if closer_of(opener) == c => {}
                Some((opener, _)) => diagnostics
                    .report(DiagnosticKind::MismatchedBracket, span)
                    .message(format!("expected '{}' but found '{c}'", closer_of(opener)))
                    .emit(),
            },
            _ => {}
        }
    }

    for (opener, at) in open {
        diagnostics
            .report(DiagnosticKind::UnclosedBracket, Span::new(base + at, base + at + 1))
            .message(opener.to_string())
            .emit();
    }
}

fn closer_of(opener: char) -> char {
    if opener == '(' { ')' } else { ']' }
}
