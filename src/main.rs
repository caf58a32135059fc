// file: src/main.rs
// description: commandline entry point for auditing a repo sync directory
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use repo_audit::utils::logging::{format_info, format_success, format_summary, format_warning};
use repo_audit::{AuditReport, Auditor, Config, JsonExporter};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "repo_audit")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(
    about = "Report which repos under a sync directory are valid, configured, or stale",
    long_about = None
)]
struct Cli {
    /// Text file with one valid namespace/repo id per line
    #[arg(value_name = "REPO_IDS")]
    repo_ids: PathBuf,

    /// Sync root containing namespace/repo directories
    #[arg(value_name = "SYNC_DIR")]
    sync_dir: PathBuf,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Write the full report as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Show a progress bar with running counts
    #[arg(long, action = ArgAction::SetTrue)]
    progress: bool,

    /// Override the config marker path checked inside each valid repo
    #[arg(long, value_name = "PATH")]
    marker: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    repo_audit::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Repo audit");

    let mut config = load_config(&cli)?;
    if let Some(marker) = &cli.marker {
        config.audit.config_marker = marker.clone();
        config.validate().context("Invalid --marker")?;
    }

    let report = Auditor::new(config.clone())
        .with_progress(cli.progress, cli.color)
        .run(&cli.repo_ids, &cli.sync_dir)
        .context("Audit failed")?;

    print_report(&config, &report);

    if let Some(path) = &cli.json {
        let exporter = JsonExporter::new(path, config.report.pretty_json)
            .context("Failed to prepare JSON export")?;
        exporter
            .export(&report)
            .context("Failed to write JSON report")?;
        println!(
            "{}",
            format_info(&format!("Report written to {}", exporter.output_path().display()))
        );
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        return Config::load(Some(cli.config.as_path())).context("Failed to load configuration");
    }

    warn!(
        "Config file {} not found, using default configuration",
        cli.config.display()
    );
    Ok(Config::load(None).unwrap_or_else(|e| {
        warn!("Falling back to built-in defaults: {}", e);
        Config::default_config()
    }))
}

fn print_report(config: &Config, report: &AuditReport) {
    println!("\n\n");
    for line in format_summary(&report.summary) {
        println!("{}", line);
    }

    if !config.report.list_stale {
        return;
    }

    if report.summary.invalid == 0 {
        println!("\n{}", format_success("No stale repos found"));
        return;
    }

    println!("\n{}", format_warning("Stale repos:"));
    for entry in report.stale() {
        println!("  {}", entry.path.display());
    }
}
