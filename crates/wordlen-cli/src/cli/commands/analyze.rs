//! `wordlen analyze [URL]...` – fetch pages and report the top word per length.

use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use wordlen_core::config::WordlenConfig;
use wordlen_core::fetch::{FetchReport, HttpOptions, HttpTextSource};
use wordlen_core::input::{self, PROMPT};
use wordlen_core::pipeline::analyze_urls_with;
use wordlen_core::pool::PoolSize;

use super::emit;
use crate::cli::OutputArgs;

pub async fn run_analyze(
    cfg: &WordlenConfig,
    urls: Vec<String>,
    input: Option<PathBuf>,
    output: OutputArgs,
) -> Result<()> {
    let urls = collect_urls(urls, input).await?;
    tracing::info!(count = urls.len(), workers = cfg.workers, "analyze");

    let source = HttpTextSource::new(HttpOptions::from(cfg));
    let workers = PoolSize::new(cfg.workers);
    let mode = output.count_mode();
    let analysis = tokio::task::spawn_blocking(move || {
        let mut err = io::stderr();
        analyze_urls_with(&source, &urls, workers, mode, |report| {
            if let Err(e) = report_failure(report, &mut err) {
                tracing::warn!(error = %e, "write failure line to stderr");
            }
        })
    })
    .await
    .context("fetch task join")?;

    emit(&analysis.result, output, io::stdout().lock())
}

/// URLs from the command line, an input file, or stdin, in that order of preference.
async fn collect_urls(urls: Vec<String>, input: Option<PathBuf>) -> Result<Vec<String>> {
    if !urls.is_empty() {
        return Ok(urls);
    }
    if let Some(path) = input {
        return Ok(input::read_url_file(&path)?);
    }
    tokio::task::spawn_blocking(|| {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("{}", PROMPT);
        }
        input::read_url_list(stdin.lock())
    })
    .await
    .context("stdin task join")?
    .context("read URL list from stdin")
}

/// `invalid url <URL>` for a page that contributed no text, printed as soon as it fails.
fn report_failure<W: io::Write>(report: &FetchReport, err: &mut W) -> io::Result<()> {
    if !report.is_ok() {
        writeln!(err, "invalid url {}", report.url)?;
    }
    Ok(())
}
