use tasty_core::Span;

use super::{Context, validate};
use crate::config::{MergedConfig, RawConfig};
use crate::defs::LocalDefinitions;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::value::{self, ValueContext};

fn config(json: &str) -> MergedConfig {
    let raw: RawConfig = serde_json::from_str(json).unwrap();
    MergedConfig::from_layers([&raw])
}

fn check_with(
    input: &str,
    property: Option<&str>,
    config: &MergedConfig,
    defs: &LocalDefinitions,
) -> Vec<Diagnostic> {
    let tokens = value::tokenize(input, ValueContext::new());
    validate(&tokens, 0, Context::Value { property }, config, defs).into_vec()
}

fn check(input: &str, config: &MergedConfig) -> Vec<Diagnostic> {
    check_with(input, None, config, &LocalDefinitions::new())
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<&'static str> {
    diagnostics.iter().map(Diagnostic::code).collect()
}

#[test]
fn unknown_color_token_with_suggestion() {
    let config = config(r##"{ "tokens": ["#primary", "#danger"] }"##);
    let diags = check("#primray", &config);
    assert_eq!(codes(&diags), vec!["unknown-color-token"]);
    assert_eq!(diags[0].suggestion(), Some("#primary"));
    assert_eq!(diags[0].range, Span::new(0, 8));
}

#[test]
fn far_name_gets_no_suggestion() {
    let config = config(r##"{ "tokens": ["#primary", "#danger"] }"##);
    let diags = check("#zzzzzzzz", &config);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].suggestions.is_empty());
}

#[test]
fn known_and_reserved_color_tokens() {
    let config = config(r##"{ "tokens": ["#primary", "accent"] }"##);
    assert!(check("#primary #accent #current #transparent.50", &config).is_empty());
}

#[test]
fn color_token_checks_skipped_without_tokens() {
    assert!(check("#anything $whatever", &config("{}")).is_empty());
    assert!(check("#anything $whatever", &config(r#"{ "tokens": false }"#)).is_empty());
}

#[test]
fn opacity_rules() {
    let config = config("{}");
    assert!(check("#primary.50 #primary.100 #primary.5 #primary.$alpha", &config).is_empty());

    let diags = check("#primary.150", &config);
    assert_eq!(codes(&diags), vec!["invalid-opacity"]);
    assert_eq!(diags[0].range, Span::new(9, 12));
    assert_eq!(
        diags[0].message,
        "invalid opacity `150`: expected an integer from 0 to 100"
    );
}

#[test]
fn opacity_skipped_when_tokens_disabled() {
    let config = config(r#"{ "tokens": false }"#);
    assert!(check("#primary.150", &config).is_empty());
}

#[test]
fn custom_property_from_local_definition() {
    let config = config(r#"{ "tokens": ["$radius"] }"#);
    let mut defs = LocalDefinitions::new();
    defs.define_token("$gap", Span::new(0, 4));

    assert!(check_with("$gap $radius", None, &config, &defs).is_empty());

    let diags = check_with("$gpa", None, &config, &defs);
    assert_eq!(codes(&diags), vec!["unknown-custom-property"]);
    assert_eq!(diags[0].suggestion(), Some("$gap"));
}

#[test]
fn units() {
    let config = config(r#"{ "units": ["cols"] }"#);
    assert!(check("2x 1r 3cols 10px 50%", &config).is_empty());

    let diags = check("calc(2colz + 1x)", &config);
    assert_eq!(codes(&diags), vec!["unknown-unit"]);
    assert_eq!(diags[0].range, Span::new(6, 10));
    assert_eq!(diags[0].suggestion(), Some("cols"));

    assert!(check("3colz", &self::config(r#"{ "units": false }"#)).is_empty());
}

#[test]
fn css_unit_typo_suggests_css_unit() {
    let diags = check("10pz", &config("{}"));
    assert_eq!(codes(&diags), vec!["unknown-unit"]);
    assert_eq!(diags[0].range, Span::new(2, 4));
    assert_eq!(diags[0].suggestion(), Some("px"));
}

#[test]
fn functions() {
    let config = config(r#"{ "funcs": ["fluid"] }"#);
    assert!(check("fluid(1x, 2x) calc(1px) var(--x)", &config).is_empty());

    let diags = check("calcc(1x)", &config);
    assert_eq!(codes(&diags), vec!["unknown-function"]);
    assert_eq!(diags[0].range, Span::new(0, 5));
    assert_eq!(diags[0].suggestion(), Some("calc"));

    assert!(check("calcc(1x)", &self::config(r#"{ "funcs": false }"#)).is_empty());
}

#[test]
fn nested_arguments_are_checked() {
    let config = config(r##"{ "tokens": ["#primary"] }"##);
    let diags = check("linear-gradient(#primray, #primary)", &config);
    assert_eq!(codes(&diags), vec!["unknown-color-token"]);
    assert_eq!(diags[0].range, Span::new(16, 24));
}

#[test]
fn presets() {
    let config = config(r#"{ "presets": ["h1", "t2"] }"#);
    let defs = LocalDefinitions::new();
    assert!(check_with("h1 strong", Some("preset"), &config, &defs).is_empty());
    assert!(check_with("inherit", Some("preset"), &config, &defs).is_empty());

    let diags = check_with("h7", Some("preset"), &config, &defs);
    assert_eq!(codes(&diags), vec!["unknown-preset"]);
    assert!(diags[0].suggestion().is_some());

    // Other properties do not check identifiers.
    assert!(check_with("h7", Some("display"), &config, &defs).is_empty());
    // Nothing configured, nothing to check.
    assert!(check_with("h7", Some("preset"), &self::config("{}"), &defs).is_empty());
}

#[test]
fn recipes() {
    let config = config(r#"{ "recipes": ["card", "elevated"] }"#);
    let defs = LocalDefinitions::new();
    assert!(check_with("card elevated", Some("recipe"), &config, &defs).is_empty());

    let diags = check_with("crad", Some("recipe"), &config, &defs);
    assert_eq!(codes(&diags), vec!["unknown-recipe"]);
    assert_eq!(diags[0].suggestion(), Some("card"));
}

#[test]
fn base_offset_is_applied() {
    let config = config(r##"{ "tokens": ["#primary"] }"##);
    let tokens = value::tokenize("1x #nope", ValueContext::new());
    let diags = validate(
        &tokens,
        100,
        Context::Value { property: None },
        &config,
        &LocalDefinitions::new(),
    );
    assert_eq!(diags.as_slice()[0].range, Span::new(103, 108));
}
