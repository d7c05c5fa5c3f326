//! HTML rendering for the web pages.
//!
//! Page templates are compiled into the binary and registered with a
//! [`Handlebars`] registry once per server. Values are HTML-escaped by the
//! registry. The markdown body of the view page is the one value inserted
//! raw (`{{{content}}}`), since it is HTML already.

use std::path::{Component, Path};
use std::sync::LazyLock;

use handlebars::Handlebars;
use pulldown_cmark::{Options, Parser, html};
use serde::Serialize;
use url::Url;

use crate::error::Result;
use crate::ranker::ScoredDocument;

pub const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
const RESULTS_TEMPLATE: &str = include_str!("templates/results.html");
const VIEW_TEMPLATE: &str = include_str!("templates/view.html");

const RESULTS: &str = "results";
const VIEW: &str = "view";

static VIEW_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/view/").expect("view base URL must parse"));

/// Registered page templates.
#[derive(Debug)]
pub struct Templates {
    registry: Handlebars<'static>,
}

#[derive(Serialize)]
struct ResultsData<'a> {
    query: &'a str,
    results: Vec<ResultLink>,
}

#[derive(Serialize)]
struct ResultLink {
    href: String,
    path: String,
    score: String,
}

#[derive(Serialize)]
struct ViewData<'a> {
    title: &'a str,
    content: &'a str,
}

impl Templates {
    /// Register the results and view templates. Strict mode is on, so a
    /// template referring to a field the page data lacks fails to render.
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(RESULTS, RESULTS_TEMPLATE)?;
        registry.register_template_string(VIEW, VIEW_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Results page for `query`. `corpus_root` is stripped from result paths
    /// to build the `/view/` links.
    pub fn results_page(
        &self,
        query: &str,
        results: &[ScoredDocument],
        corpus_root: &Path,
    ) -> Result<String> {
        let data = ResultsData {
            query,
            results: results
                .iter()
                .map(|r| ResultLink {
                    href: view_href(&r.path, corpus_root),
                    path: r.path.display().to_string(),
                    score: format!("{:.4}", r.score),
                })
                .collect(),
        };
        Ok(self.registry.render(RESULTS, &data)?)
    }

    /// Document page wrapping already rendered HTML.
    pub fn view_page(&self, title: &str, content_html: &str) -> Result<String> {
        let data = ViewData {
            title,
            content: content_html,
        };
        Ok(self.registry.render(VIEW, &data)?)
    }
}

/// Render markdown to an HTML fragment.
///
/// Tables, footnotes, strikethrough, task lists and heading attributes are
/// enabled. Raw HTML in the source is passed through.
pub fn render_markdown(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let parser = Parser::new_ext(text, options);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// `/view/...` link for a document, relative to the corpus root. Each path
/// component becomes one percent-encoded URL path segment.
pub fn view_href(path: &Path, corpus_root: &Path) -> String {
    let relative = path.strip_prefix(corpus_root).unwrap_or(path);
    let mut url = VIEW_BASE.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(relative.components().filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        }));
    }
    url.path().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn hit(path: &str, score: f64) -> ScoredDocument {
        ScoredDocument {
            path: PathBuf::from(path),
            score,
        }
    }

    #[test]
    fn test_render_markdown() {
        let html = render_markdown("# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_view_href() {
        let root = Path::new("./docs");
        assert_eq!(
            view_href(Path::new("./docs/guides/intro notes.md"), root),
            "/view/guides/intro%20notes.md"
        );
        assert_eq!(view_href(Path::new("a.md"), root), "/view/a.md");
        assert_eq!(
            view_href(Path::new("docs/100%#1.md"), Path::new("docs")),
            "/view/100%25%231.md"
        );
    }

    #[test]
    fn test_results_page_escapes() {
        let templates = Templates::new().unwrap();
        let page = templates
            .results_page("<script>", &[hit("docs/<b>.md", 0.5)], Path::new("docs"))
            .unwrap();

        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("docs/&lt;b&gt;.md"));
        assert!(page.contains("0.5000"));
    }

    #[test]
    fn test_results_page_does_not_expand_query_placeholders() {
        let templates = Templates::new().unwrap();
        let page = templates
            .results_page("{{results}}", &[hit("docs/a.md", 0.5)], Path::new("docs"))
            .unwrap();

        assert!(page.contains("<title>{{results}} - docsift</title>"));
        assert!(page.contains("Results for &ldquo;{{results}}&rdquo;"));
        assert_eq!(page.matches("<ol>").count(), 1);
        assert_eq!(page.matches("href=\"/view/a.md\"").count(), 1);
    }

    #[test]
    fn test_empty_results_page() {
        let templates = Templates::new().unwrap();
        let page = templates
            .results_page("nothing", &[], Path::new("docs"))
            .unwrap();
        assert!(page.contains("No documents found."));
        assert!(!page.contains("<ol>"));
    }

    #[test]
    fn test_view_page_keeps_markdown_html() {
        let templates = Templates::new().unwrap();
        let page = templates
            .view_page("a & b", "<h1>Cats</h1>")
            .unwrap();

        assert!(page.contains("<title>a &amp; b - docsift</title>"));
        assert!(page.contains("<h1>Cats</h1>"));
    }
}
