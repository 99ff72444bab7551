use tasty_core::{NameLookup, NoNames, Span};

use super::{Context, validate};
use crate::config::{MergedConfig, RawConfig};
use crate::defs::LocalDefinitions;
use crate::diagnostics::Diagnostic;
use crate::state;

fn config(json: &str) -> MergedConfig {
    let raw: RawConfig = serde_json::from_str(json).unwrap();
    MergedConfig::from_layers([&raw])
}

fn check_with(
    key: &str,
    in_sub_element: bool,
    config: &MergedConfig,
    defs: &LocalDefinitions,
    aliases: &dyn NameLookup,
) -> Vec<Diagnostic> {
    let tokens = state::tokenize(key, aliases);
    validate(&tokens, 0, Context::StateKey { in_sub_element }, config, defs).into_vec()
}

fn check(key: &str) -> Vec<Diagnostic> {
    check_with(key, false, &MergedConfig::default(), &LocalDefinitions::new(), &NoNames)
}

#[test]
fn unknown_characters_are_errors() {
    let diags = check("hovered %% focused");
    assert_eq!(diags.len(), 1);
    assert!(diags[0].is_error());
    assert_eq!(diags[0].code(), "invalid-state-syntax");
    assert_eq!(diags[0].range, Span::new(8, 10));
    assert_eq!(diags[0].message, "invalid state key syntax: unexpected `%%`");
}

#[test]
fn unknown_inside_nested_body() {
    let diags = check("@media(w ~ 1px)");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].range, Span::new(9, 10));
}

#[test]
fn well_formed_keys_are_clean() {
    for key in [
        "",
        "hovered & !disabled",
        ":has(Body > Row)",
        "@media(w < 768px) | theme=dark",
        "@(layout, w >= 300px)",
        "[aria-expanded=\"true\"] .active",
        "&:hover",
    ] {
        assert!(check(key).is_empty(), "{key:?}: {:?}", check(key));
    }
}

#[test]
fn own_only_inside_sub_element() {
    let config = MergedConfig::default();
    let defs = LocalDefinitions::new();
    let diags = check_with("@own(hovered)", false, &config, &defs, &NoNames);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code(), "own-outside-sub-element");
    assert!(diags[0].is_warning());

    assert!(check_with("@own(hovered)", true, &config, &defs, &NoNames).is_empty());
}

#[test]
fn unknown_alias_with_suggestion() {
    let config = config(r#"{ "states": ["mobile", "tablet"] }"#);
    let defs = LocalDefinitions::new();
    let diags = check_with("@mobil & hovered", false, &config, &defs, &NoNames);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code(), "unknown-state-alias");
    assert_eq!(diags[0].range, Span::new(0, 6));
    assert_eq!(diags[0].suggestion(), Some("@mobile"));

    assert!(check_with("@tablet", false, &config, &defs, &NoNames).is_empty());
}

#[test]
fn local_alias_is_known() {
    let mut defs = LocalDefinitions::new();
    defs.define_state("@state", Span::new(0, 6));
    let config = MergedConfig::default();

    assert!(check_with("@state", false, &config, &defs, &defs.states).is_empty());

    let diags = check_with("@stat", false, &config, &defs, &defs.states);
    assert_eq!(diags[0].suggestion(), Some("@state"));
}

#[test]
fn alias_checks_skipped_without_any_alias() {
    assert!(check("@whatever").is_empty());
}
