// irms - driver binary for the incident report management service

use anyhow::Context;
use clap::Parser;
use irms::cli::{run_command, Cli};
use irms::config_loader::load_config;
use irms::log_sink::init_tracing;
use std::process::exit;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("irms: {e:#}");
        exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    init_tracing(config.logging.tracing_level()?);
    tracing::debug!(
        level = %config.logging.level,
        max_audit_events = config.audit.max_events,
        "configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Some(summary) = run_command(&cli.command, &config, &mut out)? {
        tracing::info!("{} commands, {} rejected", summary.commands, summary.failures);
    }
    Ok(())
}
