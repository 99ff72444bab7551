//! Plain-text token tree dump.
//!
//! One token per line, children indented by two spaces:
//!
//! ```text
//! Function "calc(1x + $gap)" 0..15
//!   CustomUnit "1x" 5..7
//!   Operator "+" 8..9
//!   CustomProperty "$gap" 10..14
//! ```

use std::fmt::Write;

use tasty_core::Token;

/// Dump options.
#[derive(Debug, Clone, Copy, Default)]
pub struct DumpOptions {
    /// Include whitespace tokens.
    pub trivia: bool,
    /// Append `start..end` to every line.
    pub spans: bool,
}

impl DumpOptions {
    pub fn full() -> Self {
        Self {
            trivia: true,
            spans: true,
        }
    }
}

pub fn dump_tokens(tokens: &[Token], options: DumpOptions) -> String {
    let mut out = String::new();
    for token in tokens {
        dump_token(&mut out, token, options, 0);
    }
    out
}

fn dump_token(out: &mut String, token: &Token, options: DumpOptions, depth: usize) {
    if token.kind.is_trivia() && !options.trivia {
        return;
    }
    let indent = "  ".repeat(depth);
    write!(out, "{indent}{:?} {:?}", token.kind, token.text).expect("write to String");
    if options.spans {
        write!(out, " {}", token.span).expect("write to String");
    }
    out.push('\n');
    for child in &token.children {
        dump_token(out, child, options, depth + 1);
    }
}
