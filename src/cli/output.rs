//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{DocsiftArgs, OutputFormat};
use crate::error::Result;
use crate::ranker::ScoredDocument;

const SEPARATOR: &str = "__________________________________________________";

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    /// Requested result limit.
    pub limit: usize,
    pub hits: Vec<ScoredDocument>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

/// Write search results to stdout in the selected format.
pub fn output_search_results(results: &SearchResults, args: &DocsiftArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_search_results(&mut out, results, args)?;
    out.flush()?;
    Ok(())
}

/// Write search results to `out` in the selected format.
pub fn write_search_results<W: Write>(
    out: &mut W,
    results: &SearchResults,
    args: &DocsiftArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_human(out, results, args),
        OutputFormat::Json => write_json(out, results, args),
    }
}

fn write_human<W: Write>(out: &mut W, results: &SearchResults, args: &DocsiftArgs) -> Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;
    writeln!(out, "Top {} search results:", results.limit)?;

    for hit in &results.hits {
        writeln!(out, "Path: {}", hit.path.display())?;
        writeln!(out, "Score: {}", hit.score)?;
        writeln!(out)?;
    }

    if args.verbosity() > 1 {
        writeln!(out, "Search time: {}ms", results.duration_ms)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, results: &SearchResults, args: &DocsiftArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, results)?;
    } else {
        serde_json::to_writer(&mut *out, results)?;
    }
    writeln!(out)?;
    Ok(())
}
