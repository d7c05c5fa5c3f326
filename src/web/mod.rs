//! Web front end: a search form, a results page and a document viewer.
//!
//! Every `/search` request loads and vectorizes the corpus from scratch on
//! the blocking pool, so handlers share nothing but the read-only
//! [`AppState`].

mod handlers;
pub mod render;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::search::SearchContext;

use self::render::Templates;

/// State cloned into every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub search: SearchContext,
    /// Extensions served as raw images by `/view`.
    pub image_extensions: Vec<String>,
    templates: Arc<Templates>,
}

impl AppState {
    /// Fails only if the built-in page templates do not register.
    pub fn new(search: SearchContext, image_extensions: Vec<String>) -> Result<Self> {
        Ok(Self {
            search,
            image_extensions,
            templates: Arc::new(Templates::new()?),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            SearchContext::from_config(&config.search),
            config.server.image_extensions.clone(),
        )
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/search",
            get(handlers::search_get).post(handlers::search_post),
        )
        .route("/view/{*file_path}", get(handlers::view))
        .with_state(state)
}

/// Bind `bind` and serve until Ctrl-C.
pub async fn run_server(state: AppState, bind: &str) -> Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address '{bind}'"))?;

    let corpus_root = state.search.corpus_root.clone();
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "docsift listening on http://{} (corpus: {})",
        listener.local_addr()?,
        corpus_root.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("docsift server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
