//! Bounded fetch pool.
//!
//! A fixed number of worker threads pop `(index, url)` pairs from a shared
//! queue and send `(index, report)` back over a channel. The coordinator owns
//! the result vector and fills slot `index`, so output order always matches
//! input order regardless of which fetch finishes first. It returns only after
//! every worker has exited.

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{mpsc, Mutex};
use std::thread;

use crate::config::DEFAULT_WORKERS;
use crate::fetch::{fetch_report, FetchError, FetchReport, TextSource};

/// Width of the fetch pool. Always at least one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSize(usize);

impl PoolSize {
    pub fn new(workers: usize) -> Self {
        Self(workers.max(1))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PoolSize {
    fn default() -> Self {
        Self(DEFAULT_WORKERS)
    }
}

impl From<usize> for PoolSize {
    fn from(workers: usize) -> Self {
        Self::new(workers)
    }
}

/// Fetch every URL with at most `workers` transfers in flight.
///
/// `result[i]` is the report for `urls[i]`. A failing or panicking fetch yields an
/// empty-text report for its own slot and nothing else changes.
pub fn fetch_all_reports<S>(source: &S, urls: &[String], workers: PoolSize) -> Vec<FetchReport>
where
    S: TextSource + ?Sized,
{
    fetch_all_reports_with(source, urls, workers, |_| {})
}

/// Like [`fetch_all_reports`], but calls `on_report` for each report as soon as
/// its fetch finishes (completion order, on the calling thread).
pub fn fetch_all_reports_with<S, F>(
    source: &S,
    urls: &[String],
    workers: PoolSize,
    mut on_report: F,
) -> Vec<FetchReport>
where
    S: TextSource + ?Sized,
    F: FnMut(&FetchReport),
{
    if urls.is_empty() {
        return Vec::new();
    }

    let num_workers = workers.get().min(urls.len());
    tracing::info!(urls = urls.len(), workers = num_workers, "fetching pages");

    let work: Mutex<VecDeque<(usize, &str)>> =
        Mutex::new(urls.iter().map(String::as_str).enumerate().collect());
    let mut slots: Vec<Option<FetchReport>> = (0..urls.len()).map(|_| None).collect();

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<(usize, FetchReport)>();
        let mut handles = Vec::with_capacity(num_workers);
        for worker in 0..num_workers {
            let tx = tx.clone();
            let work = &work;
            handles.push(scope.spawn(move || loop {
                let next = match work.lock() {
                    Ok(mut queue) => queue.pop_front(),
                    Err(poisoned) => poisoned.into_inner().pop_front(),
                };
                let Some((index, url)) = next else {
                    break;
                };
                let report = panic::catch_unwind(AssertUnwindSafe(|| fetch_report(source, url)))
                    .unwrap_or_else(|_| {
                        tracing::error!(worker, url, "fetch panicked, contributing empty text");
                        FetchReport::failed(url, FetchError::Interrupted)
                    });
                if tx.send((index, report)).is_err() {
                    break;
                }
            }));
        }
        drop(tx);

        for (index, report) in rx {
            on_report(&report);
            slots[index] = Some(report);
        }
        for (worker, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                tracing::error!(worker, "fetch worker exited abnormally");
            }
        }
    });

    slots
        .into_iter()
        .zip(urls)
        .map(|(slot, url)| {
            slot.unwrap_or_else(|| {
                tracing::warn!(url = url.as_str(), "no result from fetch pool, contributing empty text");
                let report = FetchReport::failed(url, FetchError::Interrupted);
                on_report(&report);
                report
            })
        })
        .collect()
}

/// Fetch every URL and return only the texts, in input order (`""` for failures).
pub fn fetch_all<S>(source: &S, urls: &[String], workers: PoolSize) -> Vec<String>
where
    S: TextSource + ?Sized,
{
    fetch_all_reports(source, urls, workers)
        .into_iter()
        .map(|r| r.text)
        .collect()
}
