//! CLI for wordlen.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordlen_core::config::{self, WordlenConfig};
use wordlen_core::pipeline::CountMode;

use commands::{run_analyze, run_completions, run_config, run_text};

/// Top-level CLI for wordlen.
#[derive(Debug, Parser)]
#[command(name = "wordlen")]
#[command(about = "wordlen: most frequent word of each length across web pages", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/wordlen/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output options shared by the analysis commands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct OutputArgs {
    /// Print a JSON array of {length, word, count} instead of `length <L>: <WORD>` lines.
    #[arg(long)]
    pub json: bool,
    /// Count words with a data-parallel pass (same result, more cores).
    #[arg(long)]
    pub parallel_count: bool,
}

impl OutputArgs {
    pub fn count_mode(self) -> CountMode {
        if self.parallel_count {
            CountMode::Parallel
        } else {
            CountMode::Sequential
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch pages and print the most frequent word of each length.
    Analyze {
        /// Page URLs. With none (and no --input), URLs are read from stdin until a line `-`.
        urls: Vec<String>,
        /// Read URLs from a file (one per line, optional `-` terminator).
        #[arg(long, value_name = "FILE", conflicts_with = "urls")]
        input: Option<PathBuf>,
        /// Pages fetched concurrently (default from config, 3).
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
        /// Per-page transfer timeout in seconds (default from config, 30).
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze local text files (or stdin) without touching the network.
    Text {
        /// Files to read. With none, stdin is read to the end.
        files: Vec<PathBuf>,
        /// Treat input as HTML and analyze only its visible body text.
        #[arg(long)]
        html: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the effective configuration and where it is read from.
    Config,

    /// Generate a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(
    mut cfg: WordlenConfig,
    workers: Option<usize>,
    timeout_secs: Option<u64>,
) -> WordlenConfig {
    if let Some(n) = workers {
        cfg.workers = n.max(1);
    }
    if let Some(secs) = timeout_secs {
        cfg.timeout_secs = secs;
    }
    cfg
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Analyze {
                urls,
                input,
                workers,
                timeout_secs,
                output,
            } => {
                let cfg = apply_overrides(cfg, workers, timeout_secs);
                run_analyze(&cfg, urls, input, output).await?;
            }
            CliCommand::Text {
                files,
                html,
                output,
            } => run_text(files, html, output).await?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
