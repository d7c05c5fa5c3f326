//! Configuration for docsift.
//!
//! [`Config::load`] layers, in increasing priority: the embedded defaults,
//! a TOML file (the one passed on the command line, or `docsift.toml` in the
//! working directory when present), and `DOCSIFT__<SECTION>__<KEY>`
//! environment variables. [`Config::defaults`] returns the embedded
//! defaults without touching the filesystem.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG: &str = r#"
[search]
corpus_root = "./docs"
extensions  = ["md"]
top_n       = 10

[server]
bind             = "127.0.0.1:5000"
image_extensions = ["png", "jpg", "jpeg"]
"#;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "docsift.toml";

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    pub server: ServerConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Directory scanned for documents on every search.
    pub corpus_root: PathBuf,
    /// File extensions (without the dot) that count as documents.
    pub extensions: Vec<String>,
    /// Maximum number of results.
    pub top_n: usize,
    /// Results scoring below this are dropped. Unset keeps everything.
    #[serde(default)]
    pub min_score: Option<f64>,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the web server binds to.
    pub bind: String,
    /// Extensions served raw by the view route.
    pub image_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("DOCSIFT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}
