//! URL list → fetch pool → tokenizer → aggregator.

use crate::aggregate::{aggregate, aggregate_parallel, LengthResult};
use crate::fetch::{FetchReport, TextSource};
use crate::pool::{fetch_all_reports_with, PoolSize};
use crate::tokenize::words;

/// How the counting phase runs. Both modes give identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountMode {
    #[default]
    Sequential,
    Parallel,
}

/// Result of a URL run: per-URL fetch outcomes (input order) and the per-length winners.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub reports: Vec<FetchReport>,
    pub result: LengthResult,
}

impl Analysis {
    /// Reports for URLs that contributed no text because of an error.
    pub fn failures(&self) -> impl Iterator<Item = &FetchReport> + '_ {
        self.reports.iter().filter(|r| !r.is_ok())
    }
}

/// Tokenize and aggregate already-fetched texts.
pub fn analyze_texts<I, T>(texts: I, mode: CountMode) -> LengthResult
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let texts: Vec<T> = texts.into_iter().collect();
    let all_words = texts.iter().flat_map(|t| words(t.as_ref()));
    match mode {
        CountMode::Sequential => aggregate(all_words),
        CountMode::Parallel => aggregate_parallel(&all_words.collect::<Vec<_>>()),
    }
}

/// Fetch every URL through `source` with a bounded pool, then aggregate the text.
///
/// Always completes: failed pages contribute empty text and show up in
/// [`Analysis::failures`].
pub fn analyze_urls<S>(source: &S, urls: &[String], workers: PoolSize, mode: CountMode) -> Analysis
where
    S: TextSource + ?Sized,
{
    analyze_urls_with(source, urls, workers, mode, |_| {})
}

/// [`analyze_urls`] with a callback seeing each fetch report as it completes,
/// before aggregation starts.
pub fn analyze_urls_with<S, F>(
    source: &S,
    urls: &[String],
    workers: PoolSize,
    mode: CountMode,
    on_report: F,
) -> Analysis
where
    S: TextSource + ?Sized,
    F: FnMut(&FetchReport),
{
    let reports = fetch_all_reports_with(source, urls, workers, on_report);
    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    tracing::info!(
        urls = urls.len(),
        failed,
        "fetch complete, aggregating"
    );
    let result = analyze_texts(reports.iter().map(|r| r.text.as_str()), mode);
    tracing::debug!(lengths = result.len(), "aggregation complete");
    Analysis { reports, result }
}
