use std::path::{Component, Path as FsPath, PathBuf};

use axum::{
    Form,
    extract::{Path, Query, State, rejection::FormRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use log::{debug, error};
use serde::Deserialize;

use super::AppState;
use super::render;
use crate::corpus::has_extension;
use crate::error::DocsiftError;
use crate::search;

/// Returned for anything `/view` refuses to show.
const INVALID_FILE_PATH: &str = "Invalid file path";

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchParams {
    #[serde(default)]
    query: Option<String>,
}

pub(super) async fn index() -> Html<&'static str> {
    Html(render::INDEX_TEMPLATE)
}

pub(super) async fn search_get(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    run_search(state, params.query.unwrap_or_default()).await
}

/// A non-empty `query` in the query string wins over the form body. An
/// empty one falls through to the form.
pub(super) async fn search_post(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    form: Result<Form<SearchParams>, FormRejection>,
) -> Response {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .or_else(|| form.ok().and_then(|Form(f)| f.query))
        .unwrap_or_default();
    run_search(state, query).await
}

async fn run_search(state: AppState, query: String) -> Response {
    let ctx = state.search.clone();
    let q = query.clone();
    let outcome = tokio::task::spawn_blocking(move || search::search(&ctx, &q)).await;

    match outcome {
        Ok(Ok(results)) => {
            debug!("query {query:?} returned {} results", results.len());
            match state
                .templates
                .results_page(&query, &results, &state.search.corpus_root)
            {
                Ok(page) => Html(page).into_response(),
                Err(e) => render_failed(e),
            }
        }
        Ok(Err(e)) => {
            error!("Search for {query:?} failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Search failed: {e}")).into_response()
        }
        Err(e) => {
            error!("Search task for {query:?} panicked: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Search failed").into_response()
        }
    }
}

/// Serve a document or an image from under the corpus root.
pub(super) async fn view(
    State(state): State<AppState>,
    Path(file_path): Path<String>,
) -> Response {
    let relative = PathBuf::from(&file_path);
    if !is_plain_relative(&relative) {
        debug!("rejected view path {file_path:?}");
        return invalid_path();
    }
    let full = state.search.corpus_root.join(&relative);

    if has_extension(&full, &state.search.extensions) && is_file(&full).await {
        let bytes = match tokio::fs::read(&full).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Failed to read {}: {e}", full.display());
                return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response();
            }
        };
        let Ok(text) = String::from_utf8(bytes) else {
            error!("Failed to decode {} as UTF-8", full.display());
            return (StatusCode::INTERNAL_SERVER_ERROR, "File is not valid UTF-8").into_response();
        };

        let title = full
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.clone());
        return match state
            .templates
            .view_page(&title, &render::render_markdown(&text))
        {
            Ok(page) => Html(page).into_response(),
            Err(e) => render_failed(e),
        };
    }

    if has_extension(&full, &state.image_extensions) && is_file(&full).await {
        return match tokio::fs::read(&full).await {
            Ok(bytes) => {
                let mime = mime_guess::from_path(&full).first_or_octet_stream();
                ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response()
            }
            Err(e) => {
                error!("Failed to read {}: {e}", full.display());
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response()
            }
        };
    }

    invalid_path()
}

fn render_failed(e: DocsiftError) -> Response {
    error!("Failed to render page: {e}");
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
}

fn invalid_path() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        INVALID_FILE_PATH,
    )
        .into_response()
}

/// Non-empty, relative and free of `.`/`..`/root components.
fn is_plain_relative(path: &FsPath) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_)))
}

async fn is_file(path: &FsPath) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}
