//! Scanning primitives shared by both tokenizers.
//!
//! Everything here works on byte offsets into a `&str` and never splits a
//! UTF-8 sequence: the cursor advances one whole `char` at a time.

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
pub fn is_ident_dash_char(c: char) -> bool {
    is_ident_char(c) || c == '-'
}

#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Forward-only cursor over a string.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn at(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    #[inline]
    pub fn src(&self) -> &'a str {
        self.src
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(self.src.is_char_boundary(pos));
        self.pos = pos;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub fn peek_is(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    pub fn nth_is(&self, n: usize, pred: impl Fn(char) -> bool) -> bool {
        self.peek_nth(n).is_some_and(pred)
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn eat(&mut self, c: char) -> bool {
        if self.peek_is(c) {
            self.pos += c.len_utf8();
            return true;
        }
        false
    }

    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            return true;
        }
        false
    }

    /// Advance while `pred` holds; returns the number of bytes consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.pos - start
    }

    pub fn skip_whitespace(&mut self) -> bool {
        self.eat_while(is_whitespace) > 0
    }

    /// Identifier without dashes: `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn eat_ident(&mut self) -> bool {
        if !self.nth_is(0, is_ident_start) {
            return false;
        }
        self.eat_while(is_ident_char);
        true
    }

    /// Run of `[A-Za-z0-9_-]`, any leading character allowed.
    pub fn eat_ident_with_dashes(&mut self) -> usize {
        self.eat_while(is_ident_dash_char)
    }

    pub fn eat_digits(&mut self) -> usize {
        self.eat_while(is_digit)
    }

    /// Consume a quoted string starting at the opening quote.
    ///
    /// Backslash escapes the next character. An unterminated string runs to
    /// the end of input. Returns `false` if the cursor is not at a quote.
    pub fn eat_quoted(&mut self) -> bool {
        let Some(quote) = self.peek().filter(|c| *c == '"' || *c == '\'') else {
            return false;
        };
        self.bump();
        while let Some(c) = self.bump() {
            if c == '\\' {
                self.bump();
            } else if c == quote {
                break;
            }
        }
        true
    }

    /// Optional sign, integer digits, optional `.digits` fraction.
    ///
    /// Returns `false` (consuming nothing) unless at least one digit follows.
    pub fn eat_number_literal(&mut self) -> bool {
        let start = self.pos;
        self.eat('+') || self.eat('-');
        let int_digits = self.eat_digits();
        let has_fraction = self.peek_is('.') && self.nth_is(1, is_digit);
        if has_fraction {
            self.bump();
            self.eat_digits();
        }
        if int_digits == 0 && !has_fraction {
            self.pos = start;
            return false;
        }
        true
    }

    /// Unit suffix right after a number: `%` or a run of ASCII letters.
    pub fn eat_unit(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if self.eat('%') || self.eat_while(|c| c.is_ascii_alphabetic()) > 0 {
            return Some(self.slice(start));
        }
        None
    }

    pub fn slice(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }
}

/// Find the byte offset of the closer matching the opener at `open_pos`.
///
/// Depth counts only `open`/`close`; quoted strings are skipped so `url(")")`
/// balances. Returns `None` when the input ends first.
pub fn find_matching(src: &str, open_pos: usize, open: char, close: char) -> Option<usize> {
    let mut cursor = Cursor::at(src, open_pos);
    if !cursor.eat(open) {
        return None;
    }
    let mut depth = 1usize;
    while let Some(c) = cursor.peek() {
        if c == '"' || c == '\'' {
            cursor.eat_quoted();
            continue;
        }
        let at = cursor.pos();
        cursor.bump();
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(at);
            }
        }
    }
    None
}

/// Read a balanced parenthesized group starting at `open_pos`.
///
/// Returns the byte range of the body (between the parens) and the offset
/// just past the group. An unclosed group extends to the end of `src`.
pub fn read_balanced_parens(src: &str, open_pos: usize) -> (std::ops::Range<usize>, usize) {
    let body_start = open_pos + 1;
    match find_matching(src, open_pos, '(', ')') {
        Some(close) => (body_start..close, close + 1),
        None => (body_start.min(src.len())..src.len(), src.len()),
    }
}
