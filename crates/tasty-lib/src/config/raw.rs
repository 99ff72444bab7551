use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One configuration file, as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConfig {
    /// Relative path (`./base.json`) or package reference (`@acme/ui/tasty`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<NameList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<NameList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funcs: Option<NameList>,

    pub states: Vec<String>,
    pub presets: Vec<String>,
    pub recipes: Vec<String>,

    pub token_descriptions: IndexMap<String, String>,
    pub preset_descriptions: IndexMap<String, String>,
    pub recipe_descriptions: IndexMap<String, String>,
    pub state_descriptions: IndexMap<String, String>,
}

/// `string[] | false`. `true` is accepted and changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    Toggle(bool),
    Names(Vec<String>),
}
