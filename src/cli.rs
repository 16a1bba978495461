use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;

use commands::{check, export, serve};

#[derive(Parser)]
#[command(name = "aptitude-report")]
#[command(about = "Serve, check and export the aptitude preparation report")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Serialization format for exported catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built frontend bundle
    ///
    /// Settings come from `aptitude-report.toml` and `REPORT_*` environment
    /// variables; the flags below take precedence over both.
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory holding the Trunk build output (index.html and wasm)
        #[arg(short, long)]
        dist_dir: Option<PathBuf>,
    },
    /// Validate the report content
    ///
    /// Checks that every cited source is registered, URLs are present,
    /// skill scores fit the radar scale and topic keys are unique.
    Check {
        /// JSON or YAML catalog to check instead of the builtin one
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Write the builtin catalog to a file or stdout
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, dist_dir } => {
                serve(bind_address, dist_dir).await?;
            }
            Commands::Check { catalog } => {
                check(catalog.as_deref())?;
            }
            Commands::Export { format, output } => {
                export(format, output.as_deref())?;
            }
        }
        Ok(())
    }
}
