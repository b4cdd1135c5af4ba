// adcensor/src/main.rs
//! adcensor entry point.
//!
//! Parses the command line, installs the logger, loads the theme and the
//! embedded lists, then dispatches to the selected subcommand.

use adcensor::cli::{Cli, Commands};
use adcensor::commands::{censor, error_msg, info, scan};
use adcensor::logger;
use adcensor::ui::theme::{build_theme_map, ThemeStyle};
use adcensor_core::CensorPlugin;
use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

fn run(cli: Cli) -> Result<()> {
    let theme = build_theme_map(cli.theme.as_deref()).context("Theme error")?;

    let plugin = CensorPlugin::with_default_lists().context("Failed to initialize censor")?;

    match cli.command {
        Commands::Censor(cmd) => censor::run_censor(
            plugin.filter(),
            censor::CensorOptions {
                input_path: cmd.input_file,
                output_path: cmd.output,
                no_summary: cmd.no_summary,
                quiet: cli.quiet,
            },
            &theme,
        ),
        Commands::Scan(cmd) => scan::run_scan(
            plugin.filter(),
            scan::ScanOptions {
                input_path: cmd.input_file,
                json_file: cmd.json_file,
                json_stdout: cmd.json_stdout,
                fail_over_threshold: cmd.fail_over_threshold,
                quiet: cli.quiet,
            },
            &theme,
        ),
        Commands::Info => info::run_info(&plugin, &theme),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    if let Err(e) = run(cli) {
        error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
        std::process::exit(1);
    }
}
