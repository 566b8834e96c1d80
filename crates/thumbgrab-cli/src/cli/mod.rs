//! CLI for thumbgrab.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thumbgrab_core::config::{self, ThumbgrabConfig};

use commands::{run_batch, run_fetch};

/// Top-level CLI for thumbgrab.
#[derive(Debug, Parser)]
#[command(name = "thumbgrab")]
#[command(about = "thumbgrab: save the og:image thumbnail of video pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download thumbnails for every URL listed in a file (one per line).
    Batch {
        /// Text file with one page URL per line; blank lines are skipped.
        #[arg(default_value = "links.txt")]
        file: PathBuf,

        /// Directory to save thumbnails into (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Download the thumbnail for a single page URL.
    Fetch {
        /// Page URL whose og:image should be saved.
        url: String,

        /// Save under this name instead of the last segment of the URL.
        #[arg(long, value_name = "NAME")]
        filename: Option<String>,

        /// Directory to save the thumbnail into (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}

/// Built-in defaults when the config file can't be located or parsed;
/// they match a run with no config at all.
fn config_or_default(loaded: Result<ThumbgrabConfig>) -> ThumbgrabConfig {
    match loaded {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            ThumbgrabConfig::default()
        }
    }
}

/// Config with the per-invocation `--output-dir` applied.
fn with_output_dir(mut cfg: ThumbgrabConfig, output_dir: Option<PathBuf>) -> ThumbgrabConfig {
    if let Some(dir) = output_dir {
        cfg.output_dir = dir;
    }
    cfg
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config_or_default(config::load_or_init());
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Batch { file, output_dir } => {
                run_batch(&with_output_dir(cfg, output_dir), &file)?;
            }
            CliCommand::Fetch {
                url,
                filename,
                output_dir,
            } => {
                run_fetch(&with_output_dir(cfg, output_dir), &url, filename.as_deref())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
