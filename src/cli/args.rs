//! Command line argument parsing for the docsift CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// docsift - TF-IDF search over a directory of markdown documents
#[derive(Parser, Debug, Clone)]
#[command(name = "docsift")]
#[command(about = "Rank markdown documents against a free-text query")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DocsiftArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (defaults to ./docsift.toml when present)
    #[arg(short, long, value_name = "FILE", env = "DOCSIFT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DocsiftArgs {
    /// Effective verbosity: 0 quiet, 1 default, 2 verbose, 3+ debug.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Log level for the binary's logger: `-q` errors only, warnings by
    /// default, `-v` info, `-vv` and up debug.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the document directory
    Search(SearchArgs),

    /// Serve the search form and document viewer over HTTP
    Serve(ServeArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Search query; read from stdin when omitted
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Directory containing the documents
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Drop results scoring below this value
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,
}

/// Arguments for the web server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to listen on, e.g. 127.0.0.1:5000
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Directory containing the documents
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_search_command() {
        let args = DocsiftArgs::try_parse_from([
            "docsift",
            "search",
            "rust ownership",
            "--dir",
            "/srv/notes",
            "--limit",
            "20",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.query.as_deref(), Some("rust ownership"));
            assert_eq!(search_args.dir, Some(PathBuf::from("/srv/notes")));
            assert_eq!(search_args.limit, Some(20));
            assert_eq!(search_args.min_score, None);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_search_without_query() {
        let args = DocsiftArgs::try_parse_from(["docsift", "search"]).unwrap();

        if let Command::Search(search_args) = args.command {
            assert!(search_args.query.is_none());
            assert!(search_args.dir.is_none());
            assert!(search_args.limit.is_none());
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_serve_command() {
        let args =
            DocsiftArgs::try_parse_from(["docsift", "serve", "--bind", "0.0.0.0:8080"]).unwrap();

        if let Command::Serve(serve_args) = args.command {
            assert_eq!(serve_args.bind.as_deref(), Some("0.0.0.0:8080"));
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = DocsiftArgs::try_parse_from(["docsift", "search", "q"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = DocsiftArgs::try_parse_from(["docsift", "-q", "search", "q"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args = DocsiftArgs::try_parse_from(["docsift", "-v", "search", "q"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = DocsiftArgs::try_parse_from(["docsift", "search", "q", "-vv"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = DocsiftArgs::try_parse_from(["docsift", "-q", "-vv", "search", "q"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_log_level() {
        let level = |argv: &[&str]| {
            DocsiftArgs::try_parse_from(argv.iter().copied())
                .unwrap()
                .log_level()
        };

        assert_eq!(level(&["docsift", "-q", "serve"]), LevelFilter::Error);
        assert_eq!(level(&["docsift", "serve"]), LevelFilter::Warn);
        assert_eq!(level(&["docsift", "-v", "serve"]), LevelFilter::Info);
        assert_eq!(level(&["docsift", "-vvv", "serve"]), LevelFilter::Debug);
    }

    #[test]
    fn test_output_format() {
        let args =
            DocsiftArgs::try_parse_from(["docsift", "--format", "json", "search", "q"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
        assert!(!args.pretty);
    }

    #[test]
    fn test_min_score_flag() {
        let args =
            DocsiftArgs::try_parse_from(["docsift", "search", "q", "--min-score", "0.25"]).unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.min_score, Some(0.25));
        } else {
            panic!("Expected Search command");
        }
    }
}
