use tasty_core::scan::Cursor;
use tasty_core::tables::{is_css_function, is_reserved_color_token};
use tasty_core::{Span, Token, TokenKind};

use super::Validator;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::names::KnownNames;

impl Validator<'_> {
    pub(super) fn check_value(
        &self,
        tokens: &[Token],
        base: usize,
        property: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) {
        for token in tokens {
            match token.kind {
                TokenKind::ColorToken => self.check_color_token(token, base, diagnostics),
                TokenKind::CustomProperty => self.check_custom_property(token, base, diagnostics),
                TokenKind::CustomUnit => self.check_unit(token, base, diagnostics),
                TokenKind::Function => self.check_function(token, base, diagnostics),
                TokenKind::Identifier => match property {
                    Some("preset") => self.check_preset(token, base, diagnostics),
                    Some("recipe") => self.check_recipe(token, base, diagnostics),
                    _ => {}
                },
                _ => {}
            }
            // Arguments are not preset or recipe names.
            self.check_value(&token.children, base, None, diagnostics);
        }
    }

    fn check_color_token(&self, token: &Token, base: usize, diagnostics: &mut Diagnostics) {
        let (name, opacity) = match token.text.split_once('.') {
            Some((name, opacity)) => (name, Some(opacity)),
            None => (token.text.as_str(), None),
        };

        let tokens = &self.config().tokens;
        if tokens.is_disabled() {
            return;
        }

        if let Some(opacity) = opacity {
            let start = token.start() + name.len() + 1;
            let span = Span::new(start, token.end()).shift(base);
            check_opacity(opacity, span, diagnostics);
        }

        if tokens.is_empty() {
            return;
        }
        let reserved = name.strip_prefix('#').is_some_and(is_reserved_color_token);
        if reserved || self.names.has_token(name) {
            return;
        }
        let span = Span::new(token.start(), token.start() + name.len()).shift(base);
        self.report_unknown(
            DiagnosticKind::UnknownColorToken,
            name,
            span,
            &self.names.color_tokens,
            diagnostics,
        );
    }

    fn check_custom_property(&self, token: &Token, base: usize, diagnostics: &mut Diagnostics) {
        if self.config().tokens.is_empty() || self.names.has_token(&token.text) {
            return;
        }
        self.report_unknown(
            DiagnosticKind::UnknownCustomProperty,
            &token.text,
            token.span.shift(base),
            &self.names.custom_properties,
            diagnostics,
        );
    }

    fn check_unit(&self, token: &Token, base: usize, diagnostics: &mut Diagnostics) {
        if self.config().units.is_disabled() {
            return;
        }
        let mut cursor = Cursor::new(&token.text);
        cursor.eat_number_literal();
        let number_len = cursor.pos();
        let Some(unit) = cursor.eat_unit() else {
            return;
        };
        if self.names.has_unit(unit) {
            return;
        }
        let span = Span::new(token.start() + number_len, token.end()).shift(base);
        self.report_unknown(
            DiagnosticKind::UnknownUnit,
            unit,
            span,
            &self.names.unit_hints,
            diagnostics,
        );
    }

    fn check_function(&self, token: &Token, base: usize, diagnostics: &mut Diagnostics) {
        if self.config().funcs.is_disabled() {
            return;
        }
        let Some((name, _)) = token.text.split_once('(') else {
            // Bare name: only classified as a function when it is a CSS one.
            return;
        };
        if is_css_function(name) || self.names.has_function(name) {
            return;
        }
        let span = Span::new(token.start(), token.start() + name.len()).shift(base);
        self.report_unknown(
            DiagnosticKind::UnknownFunction,
            name,
            span,
            &self.names.functions,
            diagnostics,
        );
    }

    fn check_preset(&self, token: &Token, base: usize, diagnostics: &mut Diagnostics) {
        if self.config().presets.is_empty() || self.names.is_valid_preset(&token.text) {
            return;
        }
        self.report_unknown(
            DiagnosticKind::UnknownPreset,
            &token.text,
            token.span.shift(base),
            &self.names.presets,
            diagnostics,
        );
    }

    fn check_recipe(&self, token: &Token, base: usize, diagnostics: &mut Diagnostics) {
        if self.names.recipes.is_empty() || self.names.has_recipe(&token.text) {
            return;
        }
        self.report_unknown(
            DiagnosticKind::UnknownRecipe,
            &token.text,
            token.span.shift(base),
            &self.names.recipes,
            diagnostics,
        );
    }

    pub(super) fn report_unknown(
        &self,
        kind: DiagnosticKind,
        name: &str,
        span: Span,
        candidates: &indexmap::IndexSet<String>,
        diagnostics: &mut Diagnostics,
    ) {
        let mut builder = diagnostics.report(kind, span).message(name);
        if let Some(similar) = KnownNames::suggest(name, candidates) {
            builder = builder.suggest(similar);
        }
        builder.emit();
    }
}

/// `.50` is 50%, `.5` is shorthand for 50%. `$name` is checked at runtime.
fn check_opacity(suffix: &str, span: Span, diagnostics: &mut Diagnostics) {
    if suffix.starts_with('$') {
        return;
    }
    let valid = match suffix.parse::<u32>() {
        Ok(value) if suffix.len() == 1 => value * 10 <= 100,
        Ok(value) => value <= 100,
        Err(_) => false,
    };
    if !valid {
        diagnostics
            .report(DiagnosticKind::InvalidOpacity, span)
            .message(suffix)
            .emit();
    }
}
