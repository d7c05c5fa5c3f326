//! Command implementations for the docsift CLI.

use std::io::{BufRead, Write};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Config;
use crate::error::Result;
use crate::search::{SearchContext, search};
use crate::web::{AppState, run_server};

/// Execute a CLI command.
pub fn execute_command(args: DocsiftArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    debug!("effective configuration: {config:?}");

    match &args.command {
        Command::Search(search_args) => search_documents(search_args, &config, &args),
        Command::Serve(serve_args) => serve(serve_args, &config),
    }
}

/// Apply command line overrides on top of the configured search settings.
pub fn search_context(search_args: &SearchArgs, config: &Config) -> SearchContext {
    let mut ctx = SearchContext::from_config(&config.search);
    if let Some(dir) = &search_args.dir {
        ctx.corpus_root = dir.clone();
    }
    if let Some(limit) = search_args.limit {
        ctx = ctx.with_top_n(limit);
    }
    if search_args.min_score.is_some() {
        ctx = ctx.with_min_score(search_args.min_score);
    }
    ctx
}

fn search_documents(search_args: &SearchArgs, config: &Config, cli_args: &DocsiftArgs) -> Result<()> {
    let query = match &search_args.query {
        Some(query) => query.clone(),
        None => {
            let stdin = std::io::stdin();
            prompt_query(&mut stdin.lock(), &mut std::io::stderr())?
        }
    };

    let ctx = search_context(search_args, config);
    info!(
        "searching {} for {query:?} (limit {})",
        ctx.corpus_root.display(),
        ctx.top_n
    );

    let start = Instant::now();
    let hits = search(&ctx, &query)?;
    let duration = start.elapsed();

    let results = SearchResults {
        query,
        limit: ctx.top_n,
        total_hits: hits.len(),
        hits,
        duration_ms: duration.as_millis() as u64,
    };
    output_search_results(&results, cli_args)
}

/// Ask for a query on `prompt` and read one line from `input`.
///
/// The trailing newline is stripped; end of input yields an empty query.
pub fn prompt_query<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<String> {
    write!(prompt, "Enter search query: ")?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn serve(serve_args: &ServeArgs, config: &Config) -> Result<()> {
    let mut state = AppState::from_config(config)?;
    if let Some(dir) = &serve_args.dir {
        state.search.corpus_root = dir.clone();
    }
    let bind = serve_args
        .bind
        .clone()
        .unwrap_or_else(|| config.server.bind.clone());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(state, &bind))
}
