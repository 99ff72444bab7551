use std::ops::Range;

use tasty_core::scan::{
    Cursor, find_matching, is_digit, is_ident_dash_char, is_ident_start, is_whitespace,
    read_balanced_parens,
};
use tasty_core::tables::{is_css_unit, is_selector_pseudo_function};
use tasty_core::{NameLookup, Span, Token, TokenKind};

/// Parenthesized bodies with a grammar of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    /// `:has(...)`, `:is(...)`, `:where(...)`, `:not(...)`
    SelectorList,
    /// `@(...)`
    Container,
    Media,
    Supports,
    Root,
    Own,
}

impl Body {
    fn identifier_kind(self) -> TokenKind {
        match self {
            Body::Root | Body::Own => TokenKind::BooleanMod,
            _ => TokenKind::Identifier,
        }
    }
}

pub(super) struct StateLexer<'src, 'a> {
    cursor: Cursor<'src>,
    aliases: &'a dyn NameLookup,
    tokens: Vec<Token>,
    /// Current run of unrecognized characters, flushed as one `Unknown`.
    garbage: Option<Span>,
}

impl<'src, 'a> StateLexer<'src, 'a> {
    pub(super) fn new(input: &'src str, aliases: &'a dyn NameLookup) -> Self {
        Self {
            cursor: Cursor::new(input),
            aliases,
            tokens: Vec::new(),
            garbage: None,
        }
    }

    /// Top-level key grammar.
    pub(super) fn key(mut self) -> Vec<Token> {
        while let Some(c) = self.cursor.peek() {
            let start = self.cursor.pos();
            match c {
                c if is_whitespace(c) => self.whitespace(),
                '&' | '|' | '!' | '^' => self.single(TokenKind::Operator),
                '(' | ')' | ',' => self.single(TokenKind::Punctuation),
                ':' => self.pseudo(start),
                '.' => self.class_selector(start),
                '[' => self.attribute(start),
                '@' => self.advanced(start),
                c if is_ident_start(c) => self.modifier(start, TokenKind::BooleanMod),
                _ => self.garbage(),
            }
        }
        self.finish()
    }

    fn body(mut self, body: Body) -> Vec<Token> {
        match body {
            Body::SelectorList => self.selector_list(),
            _ => self.at_body(body),
        }
        self.finish()
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush_garbage();
        self.tokens
    }

    fn selector_list(&mut self) {
        while let Some(c) = self.cursor.peek() {
            let start = self.cursor.pos();
            match c {
                c if is_whitespace(c) => self.whitespace(),
                '>' | '+' | '~' => self.single(TokenKind::Operator),
                '(' | ')' | ',' => self.single(TokenKind::Punctuation),
                '*' => self.single(TokenKind::Identifier),
                ':' => self.pseudo(start),
                '.' => self.class_selector(start),
                '[' => self.attribute(start),
                c if is_ident_start(c) => {
                    self.cursor.eat_ident_with_dashes();
                    let kind = if c.is_ascii_uppercase() {
                        TokenKind::SubElement
                    } else {
                        TokenKind::BooleanMod
                    };
                    self.push_from(kind, start);
                }
                _ => self.garbage(),
            }
        }
    }

    fn at_body(&mut self, body: Body) {
        while let Some(c) = self.cursor.peek() {
            let start = self.cursor.pos();
            match c {
                c if is_whitespace(c) => self.whitespace(),
                '&' | '|' | '!' | '^' => self.single(TokenKind::Operator),
                '(' | ')' | ',' => self.single(TokenKind::Punctuation),
                '<' | '>' => {
                    self.cursor.bump();
                    self.cursor.eat('=');
                    self.push_from(TokenKind::StateOperator, start);
                }
                '=' => self.single(TokenKind::StateOperator),
                '"' | '\'' => {
                    self.cursor.eat_quoted();
                    self.push_from(TokenKind::String, start);
                }
                '$' if self.cursor.nth_is(1, is_ident_dash_char) => {
                    self.cursor.bump();
                    self.cursor.eat_ident_with_dashes();
                    self.push_from(TokenKind::CustomProperty, start);
                }
                ':' if self.cursor.nth_is(1, |n| n == ':' || is_ident_start(n)) => {
                    self.pseudo(start)
                }
                ':' => self.single(TokenKind::Punctuation),
                '@' => self.advanced(start),
                _ if self.at_number() => self.number(start),
                c if is_ident_start(c) => self.modifier(start, body.identifier_kind()),
                _ => self.garbage(),
            }
        }
    }

    fn at_number(&self) -> bool {
        match self.cursor.peek() {
            Some(c) if is_digit(c) => true,
            Some('.' | '-') => self.cursor.nth_is(1, is_digit),
            _ => false,
        }
    }

    fn number(&mut self, start: usize) {
        self.cursor.eat_number_literal();
        let kind = match self.cursor.eat_unit() {
            None => TokenKind::Number,
            Some(unit) if is_css_unit(unit) => TokenKind::CssUnit,
            Some(_) => TokenKind::CustomUnit,
        };
        self.push_from(kind, start);
    }

    /// `name`, or `name=value` with an optionally quoted value.
    fn modifier(&mut self, start: usize, plain: TokenKind) {
        self.cursor.eat_ident_with_dashes();
        if !self.cursor.eat('=') {
            self.push_from(plain, start);
            return;
        }
        if !self.cursor.eat_quoted() {
            self.cursor.eat_while(|c| {
                !is_whitespace(c) && !matches!(c, '&' | '|' | '!' | '^' | '(' | ')' | ',')
            });
        }
        self.push_from(TokenKind::ValueMod, start);
    }

    /// `:name`, `::name`, `:name(...)`.
    fn pseudo(&mut self, start: usize) {
        self.cursor.bump();
        let element = self.cursor.eat(':');
        let name_start = self.cursor.pos();
        if !self.cursor.nth_is(0, is_ident_start) {
            return self.rewind_to_garbage(start);
        }
        self.cursor.eat_ident_with_dashes();
        let name = self.cursor.slice(name_start);

        if !self.cursor.peek_is('(') {
            return self.push_from(TokenKind::PseudoClass, start);
        }
        let (body, next) = read_balanced_parens(self.cursor.src(), self.cursor.pos());
        self.cursor.set_pos(next);
        let token = self.token_from(TokenKind::PseudoClass, start);
        if !element && is_selector_pseudo_function(name) {
            let children = self.nested(body, Body::SelectorList);
            self.push(token.with_children(children));
        } else {
            self.push(token);
        }
    }

    fn class_selector(&mut self, start: usize) {
        self.cursor.bump();
        if self.cursor.eat_ident_with_dashes() == 0 {
            return self.rewind_to_garbage(start);
        }
        self.push_from(TokenKind::ClassSelector, start);
    }

    /// `[...]`, not decomposed further.
    fn attribute(&mut self, start: usize) {
        let src = self.cursor.src();
        let end = find_matching(src, start, '[', ']').map_or(src.len(), |close| close + 1);
        self.cursor.set_pos(end);
        self.push_from(TokenKind::AttributeSelector, start);
    }

    /// Everything after `@`.
    fn advanced(&mut self, start: usize) {
        self.cursor.bump();
        if self.cursor.peek_is('(') {
            return self.at_rule_body(start, TokenKind::ContainerState, Body::Container);
        }
        if self.cursor.eat_ident_with_dashes() == 0 {
            return self.rewind_to_garbage(start);
        }
        if self.aliases.contains_name(self.cursor.slice(start)) {
            return self.push_from(TokenKind::StateAlias, start);
        }
        match &self.cursor.slice(start)[1..] {
            "media" => {
                self.media_type();
                self.at_rule_body(start, TokenKind::MediaState, Body::Media)
            }
            "supports" => self.at_rule_body(start, TokenKind::SupportsState, Body::Supports),
            "root" => self.at_rule_body(start, TokenKind::RootState, Body::Root),
            "own" => self.at_rule_body(start, TokenKind::OwnState, Body::Own),
            "starting" => self.push_from(TokenKind::StartingState, start),
            "keyframes" | "properties" => self.push_from(TokenKind::AtRule, start),
            _ => self.push_from(TokenKind::StateAlias, start),
        }
    }

    /// `@media:print`
    fn media_type(&mut self) {
        if self.cursor.peek_is(':') && self.cursor.nth_is(1, is_ident_start) {
            self.cursor.bump();
            self.cursor.eat_ident_with_dashes();
        }
    }

    /// The at-rule token, with its parenthesized body as children if present.
    fn at_rule_body(&mut self, start: usize, kind: TokenKind, body: Body) {
        if !self.cursor.peek_is('(') {
            return self.push_from(kind, start);
        }
        let (range, next) = read_balanced_parens(self.cursor.src(), self.cursor.pos());
        self.cursor.set_pos(next);
        let children = self.nested(range, body);
        let token = self.token_from(kind, start).with_children(children);
        self.push(token);
    }

    /// Tokenize `range` of the current input with `body`'s grammar.
    fn nested(&self, range: Range<usize>, body: Body) -> Vec<Token> {
        let inner = &self.cursor.src()[range.clone()];
        StateLexer::new(inner, self.aliases)
            .body(body)
            .into_iter()
            .map(|token| token.shifted(range.start))
            .collect()
    }

    fn whitespace(&mut self) {
        let start = self.cursor.pos();
        self.cursor.skip_whitespace();
        self.push_from(TokenKind::Whitespace, start);
    }

    fn single(&mut self, kind: TokenKind) {
        let start = self.cursor.pos();
        self.cursor.bump();
        self.push_from(kind, start);
    }

    fn rewind_to_garbage(&mut self, start: usize) {
        self.cursor.set_pos(start);
        self.garbage();
    }

    fn garbage(&mut self) {
        let start = self.cursor.pos();
        self.cursor.bump();
        let end = self.cursor.pos();
        if let Some(run) = &mut self.garbage
            && run.end == start
        {
            run.end = end;
            return;
        }
        self.flush_garbage();
        self.garbage = Some(Span::new(start, end));
    }

    fn flush_garbage(&mut self) {
        if let Some(span) = self.garbage.take() {
            let token = Token::new(TokenKind::Unknown, self.cursor.src(), span);
            self.tokens.push(token);
        }
    }

    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, self.cursor.src(), Span::new(start, self.cursor.pos()))
    }

    fn push_from(&mut self, kind: TokenKind, start: usize) {
        let token = self.token_from(kind, start);
        self.push(token);
    }

    fn push(&mut self, token: Token) {
        self.flush_garbage();
        self.tokens.push(token);
    }
}
