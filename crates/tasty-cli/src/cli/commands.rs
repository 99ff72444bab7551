//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tasty")
        .about("Static analysis for the Tasty styling language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(tokens_command())
        .subcommand(config_command())
}

/// Analyze a style-object forest against the project configuration.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Analyze style objects and report diagnostics")
        .override_usage(
            "\
  tasty check <FOREST>
  tasty check <FOREST> --source <FILE>
  tasty check - --source <FILE> --root <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  tasty check button.forest.json                     # plain diagnostics
  tasty check button.forest.json -s Button.tsx       # annotated with source
  tasty check button.forest.json --strict            # fail on warnings too
  extract Button.tsx | tasty check - -s Button.tsx   # forest from stdin"#,
        )
        .arg(forest_path_arg())
        .arg(source_path_arg())
        .arg(root_arg())
        .arg(strict_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Print the token tree of a value or a state key.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Show the token tree of a style value or state key")
        .override_usage(
            "\
  tasty tokens --value <TEXT> [--units <NAMES>] [--presets <NAMES>]
  tasty tokens --key <TEXT> [--alias <NAME>]...",
        )
        .after_help(
            r#"EXAMPLES:
  tasty tokens --value '2x 4x #primary.50'
  tasty tokens --value '1gap' --units gap --spans
  tasty tokens --key 'hovered & @mobile' --alias @mobile"#,
        )
        .arg(value_text_arg())
        .arg(key_text_arg())
        .arg(units_arg())
        .arg(presets_arg())
        .arg(alias_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
}

/// Print the merged configuration for a path.
pub fn config_command() -> Command {
    Command::new("config")
        .about("Show the merged configuration for a file or directory")
        .after_help(
            r#"EXAMPLES:
  tasty config                          # current directory
  tasty config src/components/Button.tsx
  tasty config packages/ui --root ."#,
        )
        .arg(config_path_arg())
        .arg(root_arg())
}
