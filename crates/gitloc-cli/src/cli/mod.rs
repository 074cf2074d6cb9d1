//! CLI for the gitloc locator resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gitloc_core::config;

use commands::{run_config, run_parse, run_resolve};

/// Top-level CLI for gitloc.
#[derive(Debug, Parser)]
#[command(name = "gitloc")]
#[command(about = "gitloc: parse and resolve git:// resource locators", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a locator into scheme, host, path, query and fragment.
    Parse {
        /// Locator string, e.g. git:///srv/repo/file.txt#main.
        locator: String,

        /// Scheme the locator is registered under (defaults to the configured one).
        #[arg(long)]
        scheme: Option<String>,
    },

    /// Resolve a locator against the repository that contains it.
    Resolve {
        /// Locator string, e.g. git:///srv/repo/file.txt#main?blame=1.
        locator: String,

        /// Scheme the locator is registered under (defaults to the configured one).
        #[arg(long)]
        scheme: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { locator, scheme } => {
                let scheme = scheme.unwrap_or_else(|| cfg.scheme.clone());
                run_parse(&locator, &scheme)?;
            }
            CliCommand::Resolve {
                locator,
                scheme,
                json,
            } => {
                let scheme = scheme.unwrap_or_else(|| cfg.scheme.clone());
                run_resolve(&cfg, locator, scheme, json).await?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}
