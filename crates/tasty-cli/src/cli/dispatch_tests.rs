//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Argument parsing for each command
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Conversion into command args

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, config_command, tokens_command};
use crate::commands::check::CheckArgs;
use crate::commands::tokens::{TokensArgs, TokensInput};

#[test]
fn check_requires_forest() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn check_extracts_all_flags() {
    let m = check_command()
        .try_get_matches_from([
            "check",
            "button.json",
            "-s",
            "Button.tsx",
            "--root",
            "/repo",
            "--strict",
            "--color",
            "never",
        ])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.forest_path, PathBuf::from("button.json"));
    assert_eq!(params.source_path, Some(PathBuf::from("Button.tsx")));
    assert_eq!(params.root, Some(PathBuf::from("/repo")));
    assert!(params.strict);
    assert!(!params.json);
    assert_eq!(params.color, ColorChoice::Never);

    let args: CheckArgs = params.into();
    assert!(!args.color);
}

#[test]
fn check_defaults() {
    let m = check_command().try_get_matches_from(["check", "-"]).unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.forest_path, PathBuf::from("-"));
    assert_eq!(params.source_path, None);
    assert_eq!(params.root, None);
    assert!(!params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_rejects_unknown_color() {
    let result = check_command().try_get_matches_from(["check", "f.json", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn tokens_value_with_lists() {
    let m = tokens_command()
        .try_get_matches_from([
            "tokens", "--value", "2gap", "--units", "gap,row", "--units", "col", "--presets", "h1",
        ])
        .unwrap();
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.value_text.as_deref(), Some("2gap"));
    assert_eq!(params.units, vec!["gap", "row", "col"]);
    assert_eq!(params.presets, vec!["h1"]);

    let args: TokensArgs = params.into();
    assert!(matches!(args.input, TokensInput::Value(ref text) if text == "2gap"));
}

#[test]
fn tokens_key_with_aliases() {
    let m = tokens_command()
        .try_get_matches_from([
            "tokens", "--key", "@mobile", "--alias", "@mobile", "--alias", "dark", "--spans",
        ])
        .unwrap();
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.aliases, vec!["@mobile", "dark"]);
    assert!(params.spans);
    assert!(!params.trivia);

    let args: TokensArgs = params.into();
    assert!(matches!(args.input, TokensInput::Key(ref text) if text == "@mobile"));
}

#[test]
fn tokens_needs_exactly_one_input() {
    assert!(tokens_command().try_get_matches_from(["tokens"]).is_err());
    assert!(
        tokens_command()
            .try_get_matches_from(["tokens", "--value", "1x", "--key", "hovered"])
            .is_err()
    );
}

#[test]
fn config_path_defaults_to_current_dir() {
    let m = config_command().try_get_matches_from(["config"]).unwrap();
    let params = ConfigParams::from_matches(&m);
    assert_eq!(params.path, PathBuf::from("."));
    assert_eq!(params.root, None);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["tasty", "config", "src", "-v"])
        .unwrap();
    assert!(m.get_flag("verbose"));

    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "config");
    assert_eq!(ConfigParams::from_matches(sub).path, PathBuf::from("src"));
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["tasty"]).is_err());
}
