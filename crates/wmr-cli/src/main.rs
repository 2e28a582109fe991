//! # wmr CLI entry point
//!
//! Parses command-line arguments, loads configuration, initialises logging
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wmr_cli::config::{CliConfig, LogConfig};
use wmr_cli::rules::run_rules;
use wmr_cli::validate::{run_validate, ValidateArgs};

/// Waste movement receipt validation.
///
/// Rejects structurally invalid receipts and reports non-blocking
/// compliance warnings for accepted ones.
#[derive(Parser, Debug)]
#[command(name = "wmr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a receipt payload and report warnings.
    Validate(ValidateArgs),

    /// List the registered warning rules in evaluation order.
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(1);
        }
    };

    init_tracing(cli.verbose, &config.log);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "wmr starting");

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, &config),
        Commands::Rules => run_rules(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Map `-v` count (or the configured level) to a filter.
fn filter_for(verbose: u8, configured: Option<&str>) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new(configured.unwrap_or("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_tracing(verbose: u8, log: &LogConfig) {
    let filter = filter_for(verbose, log.level.as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate_with_path() {
        let cli = Cli::try_parse_from(["wmr", "validate", "receipt.json"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.payload, PathBuf::from("receipt.json"));
            assert!(args.tracking_id.is_none());
            assert!(!args.skip_schema);
            assert!(!args.pretty);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_validate_with_all_options() {
        let cli = Cli::try_parse_from([
            "wmr",
            "validate",
            "receipt.json",
            "--tracking-id",
            "abc-123",
            "--skip-schema",
            "--pretty",
        ])
        .unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.tracking_id.as_deref(), Some("abc-123"));
            assert!(args.skip_schema);
            assert!(args.pretty);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_validate_requires_payload() {
        assert!(Cli::try_parse_from(["wmr", "validate"]).is_err());
    }

    #[test]
    fn cli_parse_rules() {
        let cli = Cli::try_parse_from(["wmr", "rules"]).unwrap();
        assert!(matches!(cli.command, Commands::Rules));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["wmr", "rules"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli1 = Cli::try_parse_from(["wmr", "-v", "rules"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli3 = Cli::try_parse_from(["wmr", "rules", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_config_option() {
        let cli = Cli::try_parse_from(["wmr", "--config", "wmr.yaml", "rules"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("wmr.yaml")));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["wmr"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["wmr", "nonexistent"]).is_err());
    }

    #[test]
    fn filter_prefers_flags_over_config() {
        assert_eq!(filter_for(0, None).to_string(), "warn");
        assert_eq!(filter_for(0, Some("debug")).to_string(), "debug");
        assert_eq!(filter_for(1, Some("debug")).to_string(), "info");
        assert_eq!(filter_for(7, None).to_string(), "trace");
    }
}
