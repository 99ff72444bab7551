mod cli;
mod commands;

use cli::{CheckParams, ConfigParams, TokensParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("config", m)) => {
            let params = ConfigParams::from_matches(m);
            commands::config::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `TASTY_LOG` sets the filter (default `warn`); `--verbose` forces `debug`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("TASTY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
