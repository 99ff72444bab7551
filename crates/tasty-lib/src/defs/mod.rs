//! In-file definitions of tokens and state aliases.
//!
//! Collection runs once over the whole forest before any validation, so a
//! definition anywhere in a file is visible everywhere in it.

mod forest;
mod keys;


use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tasty_core::Span;

pub use forest::{StyleObject, StyleProperty, StyleValue};
pub use keys::{
    KeyKind, classify_key, is_alias_name, is_definition_key, is_selector_affix, is_state_key,
    is_sub_element,
};

/// Names defined inside one host file.
///
/// Names keep their sigil: `#brand`, `$gap`, `@mobile`. Each name is
/// recorded once; the location is that of its first definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDefinitions {
    pub tokens: IndexSet<String>,
    pub states: IndexSet<String>,
    pub token_locations: IndexMap<String, Span>,
    pub state_locations: IndexMap<String, Span>,
}

impl LocalDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the name was already defined.
    pub fn define_token(&mut self, name: &str, span: Span) -> bool {
        if !self.tokens.insert(name.to_string()) {
            return false;
        }
        self.token_locations.insert(name.to_string(), span);
        true
    }

    /// Returns `false` if the alias was already defined.
    pub fn define_state(&mut self, name: &str, span: Span) -> bool {
        if !self.states.insert(name.to_string()) {
            return false;
        }
        self.state_locations.insert(name.to_string(), span);
        true
    }

    pub fn has_token(&self, name: &str) -> bool {
        self.tokens.contains(name)
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains(name)
    }

    pub fn token_location(&self, name: &str) -> Option<Span> {
        self.token_locations.get(name).copied()
    }

    pub fn state_location(&self, name: &str) -> Option<Span> {
        self.state_locations.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.states.is_empty()
    }
}

/// Collect every token and state alias defined in `forest`.
pub fn collect(forest: &[StyleObject]) -> LocalDefinitions {
    let mut collector = Collector::default();
    for object in forest {
        collector.style_object(object);
    }
    collector.defs
}

#[derive(Default)]
struct Collector {
    defs: LocalDefinitions,
}

impl Collector {
    fn style_object(&mut self, object: &StyleObject) {
        for prop in object {
            match (classify_key(&prop.key), &prop.value) {
                (KeyKind::Definition, value) => {
                    self.defs.define_token(&prop.key, prop.key_span);
                    if let StyleValue::Object(mapping) = value {
                        self.state_mapping(mapping);
                    }
                }
                (KeyKind::SubElement | KeyKind::SelectorAffix, StyleValue::Object(nested)) => {
                    self.style_object(nested);
                }
                (KeyKind::Keyframes, _) => {}
                (KeyKind::Properties, StyleValue::Object(props)) => self.properties_block(props),
                (KeyKind::AtRule, StyleValue::String { .. }) => self.alias_definition(prop),
                (KeyKind::AtRule, StyleValue::Object(body)) => self.style_object(body),
                (_, StyleValue::Object(mapping)) => self.state_mapping(mapping),
                _ => {}
            }
        }
    }

    /// State keys are usages. Only `'@name': '...'` entries define.
    fn state_mapping(&mut self, mapping: &StyleObject) {
        for prop in mapping {
            match &prop.value {
                StyleValue::String { .. } => self.alias_definition(prop),
                StyleValue::Object(nested) => self.state_mapping(nested),
                StyleValue::Other { .. } => {}
            }
        }
    }

    fn properties_block(&mut self, props: &StyleObject) {
        for prop in props {
            if is_definition_key(&prop.key) {
                self.defs.define_token(&prop.key, prop.key_span);
            }
        }
    }

    fn alias_definition(&mut self, prop: &StyleProperty) {
        if is_alias_name(&prop.key) {
            self.defs.define_state(&prop.key, prop.key_span);
        }
    }
}
