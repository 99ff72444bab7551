//! Every name valid at a given place in a file: built-ins, configuration
//! and local definitions together.
//!
//! The validator draws its suggestion candidates from here; completion and
//! hover renderers read the same sets.

use indexmap::IndexSet;
use tasty_core::Span;
use tasty_core::tables::{
    BUILTIN_UNITS, CSS_FUNCTIONS, CSS_UNITS, PRESET_MODIFIERS, RESERVED_COLOR_TOKENS,
    is_css_global_value, is_preset_modifier,
};
use tasty_core::utils::{DEFAULT_SUGGESTION_THRESHOLD, find_similar, strip_sigil};

use crate::config::{MergedConfig, normalize_state_name};
use crate::defs::LocalDefinitions;

#[derive(Debug, Clone)]
pub struct KnownNames<'a> {
    config: &'a MergedConfig,
    defs: &'a LocalDefinitions,
    /// `#name`, reserved tokens first.
    pub color_tokens: IndexSet<String>,
    /// `$name`
    pub custom_properties: IndexSet<String>,
    /// Built-in units, then configured ones.
    pub units: IndexSet<String>,
    /// `units` followed by the CSS units. Suggestions only: CSS units never
    /// reach the unit check.
    pub unit_hints: IndexSet<String>,
    /// CSS functions, then configured ones.
    pub functions: IndexSet<String>,
    /// `@name` aliases from configuration, then local ones.
    pub states: IndexSet<String>,
    /// Configured presets, then preset modifiers.
    pub presets: IndexSet<String>,
    pub recipes: IndexSet<String>,
}

impl<'a> KnownNames<'a> {
    pub fn new(config: &'a MergedConfig, defs: &'a LocalDefinitions) -> Self {
        let mut color_tokens: IndexSet<String> =
            RESERVED_COLOR_TOKENS.iter().map(|t| format!("#{t}")).collect();
        let mut custom_properties = IndexSet::new();
        for name in config.tokens.iter().chain(defs.tokens.iter().map(String::as_str)) {
            match name.chars().next() {
                Some('#') => {
                    color_tokens.insert(name.to_string());
                }
                Some('$') => {
                    custom_properties.insert(name.to_string());
                }
                _ => {
                    color_tokens.insert(format!("#{name}"));
                    custom_properties.insert(format!("${name}"));
                }
            }
        }

        let units = BUILTIN_UNITS
            .iter()
            .copied()
            .chain(config.units.iter())
            .map(str::to_string)
            .collect::<IndexSet<_>>();
        let mut unit_hints = units.clone();
        unit_hints.extend(CSS_UNITS.iter().map(|u| u.to_string()));
        let functions = CSS_FUNCTIONS
            .iter()
            .copied()
            .chain(config.funcs.iter())
            .map(str::to_string)
            .collect();
        let states = config
            .states
            .iter()
            .chain(defs.states.iter())
            .cloned()
            .collect();
        let presets = config
            .presets
            .iter()
            .cloned()
            .chain(PRESET_MODIFIERS.iter().map(|m| m.to_string()))
            .collect();

        Self {
            config,
            defs,
            color_tokens,
            custom_properties,
            units,
            unit_hints,
            functions,
            states,
            presets,
            recipes: config.recipes.clone(),
        }
    }

    pub fn config(&self) -> &'a MergedConfig {
        self.config
    }

    pub fn definitions(&self) -> &'a LocalDefinitions {
        self.defs
    }

    /// `#name` or `$name` defined by configuration or in the file.
    pub fn has_token(&self, name: &str) -> bool {
        self.config.has_token(name) || self.defs.has_token(name)
    }

    pub fn has_unit(&self, unit: &str) -> bool {
        self.units.contains(unit)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains(name)
    }

    /// Configured preset, preset modifier or CSS-wide keyword.
    pub fn is_valid_preset(&self, name: &str) -> bool {
        self.config.presets.contains(name) || is_preset_modifier(name) || is_css_global_value(name)
    }

    pub fn has_recipe(&self, name: &str) -> bool {
        self.recipes.contains(name)
    }

    pub fn suggest<'s>(name: &str, candidates: &'s IndexSet<String>) -> Option<&'s str> {
        find_similar(
            name,
            candidates.iter().map(String::as_str),
            DEFAULT_SUGGESTION_THRESHOLD,
        )
    }

    /// Hover text for `#name`/`$name`; an unsigiled config key covers both.
    pub fn describe_token(&self, name: &str) -> Option<&'a str> {
        let descriptions = &self.config.token_descriptions;
        descriptions
            .get(name)
            .or_else(|| descriptions.get(strip_sigil(name)))
            .map(String::as_str)
    }

    pub fn describe_preset(&self, name: &str) -> Option<&'a str> {
        self.config.preset_descriptions.get(name).map(String::as_str)
    }

    pub fn describe_recipe(&self, name: &str) -> Option<&'a str> {
        self.config.recipe_descriptions.get(name).map(String::as_str)
    }

    pub fn describe_state(&self, name: &str) -> Option<&'a str> {
        self.config
            .state_descriptions
            .get(&normalize_state_name(name))
            .map(String::as_str)
    }

    /// Where a token or alias is defined in the file.
    pub fn local_definition(&self, name: &str) -> Option<Span> {
        if name.starts_with('@') {
            self.defs.state_location(name)
        } else {
            self.defs.token_location(name)
        }
    }
}
