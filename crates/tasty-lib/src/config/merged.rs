use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

use super::raw::{NameList, RawConfig};

/// A closed name set that can be switched off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSet {
    /// `false`: validation for the category is off.
    Disabled,
    Names(IndexSet<String>),
}

impl Default for NameSet {
    fn default() -> Self {
        Self::Names(IndexSet::new())
    }
}

impl NameSet {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    pub fn names(&self) -> Option<&IndexSet<String>> {
        match self {
            Self::Disabled => None,
            Self::Names(names) => Some(names),
        }
    }

    /// Disabled or no names at all.
    pub fn is_empty(&self) -> bool {
        self.names().is_none_or(|names| names.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().is_some_and(|names| names.contains(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names().into_iter().flatten().map(String::as_str)
    }

    /// Fold one layer's value into this set.
    ///
    /// `false` wins over every list in the chain, before or after it.
    /// Lists union otherwise.
    pub fn apply(&mut self, layer: Option<&NameList>) {
        match (layer, self) {
            (Some(NameList::Toggle(false)), this) => *this = Self::Disabled,
            (Some(NameList::Names(list)), Self::Names(names)) => {
                names.extend(list.iter().cloned());
            }
            _ => {}
        }
    }
}

impl Serialize for NameSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Names(names) => names.serialize(serializer),
        }
    }
}

/// The configuration in effect for one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedConfig {
    /// Color tokens (`#name`) and custom properties (`$name`). An entry
    /// without a sigil stands for both.
    pub tokens: NameSet,
    /// Units beyond the built-in ones.
    pub units: NameSet,
    /// Functions beyond the built-in CSS ones.
    pub funcs: NameSet,
    /// State aliases, normalized to start with `@`.
    pub states: IndexSet<String>,
    pub presets: IndexSet<String>,
    pub recipes: IndexSet<String>,

    pub token_descriptions: IndexMap<String, String>,
    pub preset_descriptions: IndexMap<String, String>,
    pub recipe_descriptions: IndexMap<String, String>,
    pub state_descriptions: IndexMap<String, String>,
}

impl MergedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold layers in order; later layers override earlier ones.
    pub fn from_layers<'a>(layers: impl IntoIterator<Item = &'a RawConfig>) -> Self {
        let mut merged = Self::new();
        for layer in layers {
            merged.apply(layer);
        }
        merged
    }

    pub fn apply(&mut self, layer: &RawConfig) {
        self.tokens.apply(layer.tokens.as_ref());
        self.units.apply(layer.units.as_ref());
        self.funcs.apply(layer.funcs.as_ref());

        self.states.extend(layer.states.iter().map(|s| normalize_state_name(s)));
        self.presets.extend(layer.presets.iter().cloned());
        self.recipes.extend(layer.recipes.iter().cloned());

        extend_descriptions(&mut self.token_descriptions, &layer.token_descriptions);
        extend_descriptions(&mut self.preset_descriptions, &layer.preset_descriptions);
        extend_descriptions(&mut self.recipe_descriptions, &layer.recipe_descriptions);
        for (name, description) in &layer.state_descriptions {
            self.state_descriptions
                .insert(normalize_state_name(name), description.clone());
        }
    }

    /// Whether `name` (with its `#`/`$` sigil) is a configured token.
    pub fn has_token(&self, name: &str) -> bool {
        let bare = tasty_core::utils::strip_sigil(name);
        self.tokens.contains(name) || self.tokens.contains(bare)
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains(name)
    }
}

fn extend_descriptions(into: &mut IndexMap<String, String>, from: &IndexMap<String, String>) {
    into.extend(from.iter().map(|(k, v)| (k.clone(), v.clone())));
}

pub(crate) fn normalize_state_name(name: &str) -> String {
    if name.starts_with('@') {
        name.to_string()
    } else {
        format!("@{name}")
    }
}
