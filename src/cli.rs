use crate::config::IrmsConfig;
use crate::engine::Irms;
use crate::errors::{IrmsError, IrmsResult};
use crate::replay::{replay, ReplaySummary};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Top-level CLI interface for the incident report management service
#[derive(Parser)]
#[command(
    name = "irms",
    version,
    about = "Incident Report Management Service driver"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a session script against a fresh engine
    Replay {
        #[arg(short, long)]
        script: PathBuf,
    },

    /// Load and validate configuration, then print the effective settings
    CheckConfig,
}

/// Execute a parsed command with an already loaded configuration
pub fn run_command<W: Write>(
    command: &Commands,
    config: &IrmsConfig,
    out: &mut W,
) -> IrmsResult<Option<ReplaySummary>> {
    match command {
        Commands::Replay { script } => {
            let text = std::fs::read_to_string(script)
                .map_err(|e| IrmsError::io(format!("reading {}", script.display()), e))?;
            let mut irms = Irms::from_config(config)?;
            let summary = replay(&mut irms, &text, out)?;
            tracing::info!(
                script = %script.display(),
                commands = summary.commands,
                failures = summary.failures,
                "Replay complete"
            );
            Ok(Some(summary))
        }
        Commands::CheckConfig => {
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| IrmsError::config(format!("cannot render configuration: {e}")))?;
            write!(out, "{rendered}").map_err(|e| IrmsError::io("writing configuration", e))?;
            Ok(None)
        }
    }
}
