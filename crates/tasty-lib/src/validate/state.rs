use tasty_core::{Token, TokenKind};

use super::Validator;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

impl Validator<'_> {
    pub(super) fn check_state(
        &self,
        tokens: &[Token],
        base: usize,
        in_sub_element: bool,
        diagnostics: &mut Diagnostics,
    ) {
        let check_aliases = !self.names.states.is_empty();
        for token in tokens.iter().flat_map(Token::walk) {
            let span = token.span.shift(base);
            match token.kind {
                TokenKind::Unknown => diagnostics
                    .report(DiagnosticKind::InvalidStateSyntax, span)
                    .message(format!("unexpected `{}`", token.text))
                    .emit(),
                TokenKind::OwnState if !in_sub_element => diagnostics
                    .report(DiagnosticKind::OwnOutsideSubElement, span)
                    .emit(),
                TokenKind::StateAlias if check_aliases && !self.names.has_state(&token.text) => {
                    self.report_unknown(
                        DiagnosticKind::UnknownStateAlias,
                        &token.text,
                        span,
                        &self.names.states,
                        diagnostics,
                    );
                }
                _ => {}
            }
        }
    }
}
