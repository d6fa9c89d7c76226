//! islander CLI - villager compatibility calculator
//!
//! Prints a details table for the requested villagers followed by a grid of
//! pairwise compatibility, or the same data as JSON.
//!
//! # Design Philosophy
//!
//! - **Thin interface**: flags and config in, library call, report out
//! - **All or nothing**: an unknown villager fails before anything is printed
//! - **Quiet stdout**: logs and errors go to stderr only

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use anyhow::Context;
use clap::{Parser, ValueEnum};
use islander_compat::core::presenter::ReportPresenter;
use islander_compat::{ColorMode, CompatibilityMatrixBuilder, Config, OutputFormat};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing::Level;

/// 🏝️ Islander: how well do your villagers get along?
#[derive(Parser, Debug)]
#[command(name = "islander")]
#[command(version = islander_compat::VERSION)]
#[command(about = "🏝️ Islander: villager compatibility by personality, species and star sign")]
#[command(after_help = "EXAMPLES:
  # Compare two villagers
  islander Alice Bob

  # A whole island, as JSON
  islander Ace Jakey Carmen Felicity --format json

  # Your own villager export
  islander --data ./villager.json Alice Bob

MARKS:
  ♥ best  ♦ good  ♣ neutral  × poor
")]
struct Cli {
    // ═══════════════════════════════════════════════════════════════════════════
    // 🐾 VILLAGERS (Essential)
    // ═══════════════════════════════════════════════════════════════════════════

    /// Villager ids, as they appear in the dataset
    #[arg(value_name = "VILLAGER", required = true, help_heading = "🐾 VILLAGERS (Essential)")]
    villagers: Vec<String>,

    /// AC Lister villager export (default: the bundled subset)
    #[arg(short = 'd', long = "data", value_name = "FILE", help_heading = "🐾 VILLAGERS (Essential)")]
    data: Option<PathBuf>,

    /// Personality compatibility table (JSON)
    #[arg(long = "personality-table", value_name = "FILE", help_heading = "🐾 VILLAGERS (Essential)")]
    personality_table: Option<PathBuf>,

    /// Config file path
    #[arg(short = 'c', long = "config", value_name = "FILE", help_heading = "🐾 VILLAGERS (Essential)")]
    config: Option<PathBuf>,

    // ═══════════════════════════════════════════════════════════════════════════
    // 🎨 OUTPUT
    // ═══════════════════════════════════════════════════════════════════════════

    /// Output format [table, json]
    #[arg(long = "format", value_enum, help_heading = "🎨 OUTPUT")]
    format: Option<OutputFormatArg>,

    /// Colour marks and verdicts [auto, always, never]
    #[arg(long = "color", value_enum, help_heading = "🎨 OUTPUT")]
    color: Option<ColorArg>,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, help_heading = "🎨 OUTPUT")]
    verbose: u8,

    /// Errors only on stderr
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", help_heading = "🎨 OUTPUT")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    Table,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn init_logging(level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Flags win over the config file
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(data) = &cli.data {
        config.dataset = Some(data.clone());
    }
    if let Some(table) = &cli.personality_table {
        config.personality_table = Some(table.clone());
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if let Some(color) = cli.color {
        config.color = color.into();
    }
    Ok(config)
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    tracing::debug!(?config, "effective configuration");

    let dataset = config.load_dataset().context("Failed to load villager dataset")?;
    let rules = config.load_rules()?;
    let matrix = CompatibilityMatrixBuilder::new(&rules).build(&cli.villagers, &dataset)?;

    let presenter = ReportPresenter::new().with_theme(config.color.theme());
    let report = presenter.render(&matrix, config.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Main entry point for the islander CLI.
pub fn run() {
    // Fix broken pipe panic when piping to head/tail/etc.
    // Reset SIGPIPE to default behavior (terminate quietly)
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = Cli::parse();
    init_logging(log_level(cli.verbose, cli.quiet));

    if let Err(e) = execute(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn main() {
    run();
}
