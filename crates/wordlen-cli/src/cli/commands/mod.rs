//! CLI command handlers, one file per command.

mod analyze;
mod completions;
mod config;
mod text;

pub use analyze::run_analyze;
pub use completions::run_completions;
pub use config::run_config;
pub use text::run_text;

use anyhow::Result;
use std::io::Write;
use wordlen_core::aggregate::LengthResult;
use wordlen_core::report;

use crate::cli::OutputArgs;

/// Print the result as `length <L>: <WORD>` lines, or JSON with `--json`.
pub(crate) fn emit<W: Write>(result: &LengthResult, output: OutputArgs, mut out: W) -> Result<()> {
    if output.json {
        writeln!(out, "{}", report::to_json(result)?)?;
        out.flush()?;
    } else {
        report::write_table(result, out)?;
    }
    Ok(())
}
