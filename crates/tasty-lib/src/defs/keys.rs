//! Property key classification.

use tasty_core::scan::{is_ident_dash_char, is_ident_start};
use tasty_core::tables::is_at_rule_keyword;

/// What a property key means inside a style object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// `#name` or `$name`
    Definition,
    /// `Title`, `Icon`: nested style object for a sub-element
    SubElement,
    /// `&:hover`, `& > a`
    SelectorAffix,
    Keyframes,
    Properties,
    /// Any other `@...` key.
    AtRule,
    /// A key inside a state mapping: `hovered`, `:focus & !disabled`, `''`.
    State,
    /// A plain style property: `padding`, `fill`.
    Property,
}

const STATE_SYNTAX: &[char] = &[
    ':', '&', '|', '!', '^', '(', ')', '[', ']', '.', '=', '<', '>', ' ',
];

pub fn is_sub_element(key: &str) -> bool {
    key.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

pub fn is_selector_affix(key: &str) -> bool {
    key.starts_with('&')
}

pub fn is_definition_key(key: &str) -> bool {
    key.starts_with(['#', '$'])
}

pub fn is_state_key(key: &str) -> bool {
    key.is_empty() || key.starts_with('@') || key.contains(STATE_SYNTAX)
}

/// `@name` with nothing after the name, and not an at-rule keyword.
pub fn is_alias_name(key: &str) -> bool {
    let Some(name) = key.strip_prefix('@') else {
        return false;
    };
    name.starts_with(is_ident_start)
        && name.chars().all(is_ident_dash_char)
        && !is_at_rule_keyword(name)
}

pub fn classify_key(key: &str) -> KeyKind {
    match key {
        "@keyframes" => KeyKind::Keyframes,
        "@properties" => KeyKind::Properties,
        k if is_definition_key(k) => KeyKind::Definition,
        k if k.starts_with('@') => KeyKind::AtRule,
        k if is_selector_affix(k) => KeyKind::SelectorAffix,
        k if is_sub_element(k) => KeyKind::SubElement,
        k if is_state_key(k) => KeyKind::State,
        _ => KeyKind::Property,
    }
}
