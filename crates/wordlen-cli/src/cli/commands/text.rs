//! `wordlen text [FILE]...` – analyze local text without fetching.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use wordlen_core::fetch::visible_text;
use wordlen_core::pipeline::analyze_texts;

use super::emit;
use crate::cli::OutputArgs;

pub async fn run_text(files: Vec<PathBuf>, html: bool, output: OutputArgs) -> Result<()> {
    let texts = tokio::task::spawn_blocking(move || read_texts(&files, html))
        .await
        .context("read task join")??;
    let result = analyze_texts(&texts, output.count_mode());
    emit(&result, output, io::stdout().lock())
}

/// Contents of every file (stdin when none), reduced to visible text when `html` is set.
fn read_texts(files: &[PathBuf], html: bool) -> Result<Vec<String>> {
    let raw: Vec<String> = if files.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        vec![buf]
    } else {
        files
            .iter()
            .map(|p| fs::read_to_string(p).with_context(|| format!("read {}", p.display())))
            .collect::<Result<_>>()?
    };
    if html {
        Ok(raw.iter().map(|doc| visible_text(doc)).collect())
    } else {
        Ok(raw)
    }
}
