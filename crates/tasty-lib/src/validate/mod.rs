//! Diagnostic engine: token trees checked against configuration and local
//! definitions.
//!
//! Tokenizers never reject names; everything name-related is decided here.
//! Each category is skipped when the project switched it off or declares
//! nothing to check against.

mod brackets;
mod state;
mod value;

#[cfg(test)]
mod state_tests;
#[cfg(test)]
mod value_tests;

use tasty_core::Token;

pub use brackets::check_brackets;

use crate::config::MergedConfig;
use crate::defs::LocalDefinitions;
use crate::diagnostics::Diagnostics;
use crate::names::KnownNames;

/// Which grammar produced the tokens, and where they sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context<'p> {
    /// A style value; `property` is the key it is assigned to.
    Value { property: Option<&'p str> },
    /// A state key; `@own` is only meaningful inside a sub-element.
    StateKey { in_sub_element: bool },
}

/// Validate one top-level token tree.
///
/// `base` is the host-file offset of the tokenized string; every reported
/// range is shifted by it.
pub fn validate(
    tokens: &[Token],
    base: usize,
    context: Context<'_>,
    config: &MergedConfig,
    defs: &LocalDefinitions,
) -> Diagnostics {
    let validator = Validator::new(config, defs);
    let mut diagnostics = Diagnostics::new();
    validator.check(tokens, base, context, &mut diagnostics);
    diagnostics
}

/// Reusable checker for one file.
pub struct Validator<'a> {
    names: KnownNames<'a>,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a MergedConfig, defs: &'a LocalDefinitions) -> Self {
        Self {
            names: KnownNames::new(config, defs),
        }
    }

    pub fn names(&self) -> &KnownNames<'a> {
        &self.names
    }

    pub fn check(
        &self,
        tokens: &[Token],
        base: usize,
        context: Context<'_>,
        diagnostics: &mut Diagnostics,
    ) {
        match context {
            Context::Value { property } => {
                self.check_value(tokens, base, property, diagnostics);
            }
            Context::StateKey { in_sub_element } => {
                self.check_state(tokens, base, in_sub_element, diagnostics);
            }
        }
    }

    fn config(&self) -> &'a MergedConfig {
        self.names.config()
    }
}
