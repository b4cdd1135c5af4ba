// adcensor/src/cli.rs
//! This file defines the command-line interface (CLI) for the adcensor application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "adcensor",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Censor server advertisements in chat messages",
    long_about = "adcensor reads chat messages, one per line, and masks every message that advertises another server through an IP address or a domain name, including obfuscated spellings such as 'l92.l68.o.l' or 'myclan(org'. Messages that mention a whitelisted domain always pass through untouched.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `adcensor` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Censors every line of an input file or stdin.
    #[command(about = "Censors every line of an input file or stdin, masking advertisements.")]
    Censor(CensorCommand),

    /// Reports a verdict per line without modifying anything.
    #[command(about = "Scans chat lines and reports which ones would be censored.")]
    Scan(ScanCommand),

    /// Prints the plugin metadata and the active lists.
    #[command(about = "Prints plugin metadata and the built-in lists.")]
    Info,
}

/// Arguments for the `censor` command.
#[derive(Parser, Debug)]
pub struct CensorCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write censored output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Suppress the censor summary.
    #[arg(long = "no-summary", help = "Suppress the censor summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Exit with a non-zero code if the number of censored lines exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the number of censored lines exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Export the scan report to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the scan report to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the scan report as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the scan report to stdout as JSON.")]
    pub json_stdout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_scan_flags() {
        let cli = Cli::try_parse_from([
            "adcensor", "-q", "scan", "-i", "chat.log", "--json-stdout", "--fail-over-threshold", "2",
        ])
        .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Scan(cmd) => {
                assert_eq!(cmd.input_file, Some(PathBuf::from("chat.log")));
                assert!(cmd.json_stdout);
                assert_eq!(cmd.fail_over_threshold, Some(2));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn json_outputs_conflict() {
        let res = Cli::try_parse_from(["adcensor", "scan", "--json-stdout", "--json-file", "out.json"]);
        assert!(res.is_err());
    }

    #[test]
    fn quiet_and_debug_conflict() {
        assert!(Cli::try_parse_from(["adcensor", "-q", "-d", "info"]).is_err());
    }
}
