use tasty_core::scan::{
    Cursor, is_digit, is_hex_digit, is_ident_dash_char, is_ident_start, is_whitespace,
    read_balanced_parens,
};
use tasty_core::tables::{
    is_builtin_unit, is_css_function, is_css_unit, is_direction, is_preset_modifier,
};
use tasty_core::{Span, Token, TokenKind};

use super::ValueContext;

pub(super) struct ValueLexer<'src, 'ctx> {
    cursor: Cursor<'src>,
    ctx: ValueContext<'ctx>,
    tokens: Vec<Token>,
}

impl<'src, 'ctx> ValueLexer<'src, 'ctx> {
    pub(super) fn new(input: &'src str, ctx: ValueContext<'ctx>) -> Self {
        Self {
            cursor: Cursor::new(input),
            ctx,
            tokens: Vec::new(),
        }
    }

    pub(super) fn run(mut self) -> Vec<Token> {
        while let Some(c) = self.cursor.peek() {
            let token = self.next_token(c);
            self.tokens.push(token);
        }
        self.tokens
    }

    fn next_token(&mut self, c: char) -> Token {
        let start = self.cursor.pos();
        let kind = match c {
            c if is_whitespace(c) => {
                self.cursor.skip_whitespace();
                TokenKind::Whitespace
            }
            '#' => self.hash(),
            '$' => self.dollar(),
            '"' | '\'' => {
                self.cursor.eat_quoted();
                TokenKind::String
            }
            '(' | ')' | ',' => {
                self.cursor.bump();
                TokenKind::Punctuation
            }
            _ if self.at_number() => self.number(),
            '-' if self.cursor.nth_is(1, |n| n == '-' || is_ident_start(n)) => {
                return self.word(start);
            }
            '+' | '-' | '*' | '/' => {
                self.cursor.bump();
                TokenKind::Operator
            }
            c if is_ident_start(c) => return self.word(start),
            _ => {
                self.cursor.bump();
                TokenKind::Unknown
            }
        };
        self.token(kind, start)
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, self.cursor.src(), Span::new(start, self.cursor.pos()))
    }

    fn at_number(&self) -> bool {
        let digit_at = |n| self.cursor.nth_is(n, is_digit);
        match self.cursor.peek() {
            Some(c) if is_digit(c) => true,
            Some('.') => digit_at(1),
            Some('+' | '-') => digit_at(1) || (self.cursor.nth_is(1, |n| n == '.') && digit_at(2)),
            _ => false,
        }
    }

    /// `##name`, `#fff`, `#name`, `#name.50`, `#name.$alpha`
    fn hash(&mut self) -> TokenKind {
        self.cursor.bump();
        if self.cursor.eat('#') {
            self.cursor.eat_ident_with_dashes();
            return TokenKind::ColorTokenName;
        }

        let hex_len = self
            .cursor
            .rest()
            .chars()
            .take_while(|c| is_hex_digit(*c))
            .count();
        let hex_ends = !self.cursor.nth_is(hex_len, is_ident_dash_char);
        if matches!(hex_len, 3 | 4 | 6 | 8) && hex_ends {
            self.cursor.set_pos(self.cursor.pos() + hex_len);
            return TokenKind::HexColor;
        }

        if self.cursor.eat_ident_with_dashes() == 0 {
            return TokenKind::Unknown;
        }
        self.opacity_suffix();
        TokenKind::ColorToken
    }

    fn opacity_suffix(&mut self) {
        if !self.cursor.peek_is('.') {
            return;
        }
        if self.cursor.nth_is(1, is_digit) {
            self.cursor.bump();
            self.cursor.eat_digits();
        } else if self.cursor.nth_is(1, |c| c == '$') && self.cursor.nth_is(2, is_ident_start) {
            self.cursor.bump();
            self.cursor.bump();
            self.cursor.eat_ident_with_dashes();
        }
    }

    /// `$$name` or `$name`
    fn dollar(&mut self) -> TokenKind {
        self.cursor.bump();
        if self.cursor.eat('$') {
            self.cursor.eat_ident_with_dashes();
            return TokenKind::CustomPropertyName;
        }
        if self.cursor.eat_ident_with_dashes() == 0 {
            return TokenKind::Unknown;
        }
        TokenKind::CustomProperty
    }

    fn number(&mut self) -> TokenKind {
        self.cursor.eat_number_literal();
        match self.cursor.eat_unit() {
            None => TokenKind::Number,
            Some(unit) if is_builtin_unit(unit) || self.ctx.has_unit(unit) => TokenKind::CustomUnit,
            Some(unit) if is_css_unit(unit) => TokenKind::CssUnit,
            Some(_) => TokenKind::CustomUnit,
        }
    }

    /// Identifier, or a function call when `(` follows immediately.
    fn word(&mut self, start: usize) -> Token {
        self.cursor.eat_ident_with_dashes();
        if self.cursor.peek_is('(') {
            return self.function(start);
        }
        let kind = self.classify_word(self.cursor.slice(start));
        self.token(kind, start)
    }

    fn function(&mut self, start: usize) -> Token {
        let src = self.cursor.src();
        let (body, next) = read_balanced_parens(src, self.cursor.pos());
        let children = super::tokenize(&src[body.clone()], self.ctx)
            .into_iter()
            .map(|child| child.shifted(body.start))
            .collect();
        self.cursor.set_pos(next);
        self.token(TokenKind::Function, start).with_children(children)
    }

    fn classify_word(&self, word: &str) -> TokenKind {
        match word {
            "true" | "false" => TokenKind::Boolean,
            w if is_preset_modifier(w) => TokenKind::PresetModifier,
            w if is_direction(w) => TokenKind::Direction,
            w if self.ctx.has_preset(w) => TokenKind::Preset,
            w if is_css_function(w) => TokenKind::Function,
            _ => TokenKind::Identifier,
        }
    }
}
