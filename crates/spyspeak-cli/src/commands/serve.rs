//! Implementation of the `spyspeak serve` command.
//!
//! A small axum application exposing generation over HTTP. Every request
//! loads its own word material from disk, so there is no shared mutable
//! state and edits to the word files are picked up immediately.
//!
//! Routes:
//! - `GET /`              HTML page with a generated batch
//! - `GET /api/codenames` JSON batch, parameters via query string
//! - `GET /api/themes`    JSON list of available themes

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use spyspeak_adapters::{ThemeCatalog, ThreadRngSource};
use spyspeak_core::{
    application::GeneratorService,
    domain::{CaseStyle, GenerationConfig, Pattern, RenderFormat, render},
};

use crate::{
    cli::ServeArgs,
    commands::generate::Material,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

type AppState = Arc<AppConfig>;

/// Run the HTTP server until interrupted.
#[instrument(skip_all)]
pub fn execute(args: ServeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let app = Router::new()
        .route("/", get(index))
        .route("/api/codenames", get(api_codenames))
        .route("/api/themes", get(api_themes))
        .with_state(Arc::new(config));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(addr = %addr, "HTTP server started");
        output.success(&format!("Serving codenames on http://{addr}"))?;
        axum::serve(listener, app).await?;
        Ok::<(), CliError>(())
    })
}

// ── query parameters ──────────────────────────────────────────────────────────

/// Query parameters accepted by `/` and `/api/codenames`.
///
/// Selector values are parsed leniently: an unrecognized pattern, case, or
/// theme name of "default" falls back rather than erroring, mirroring the
/// lossy parsing the domain documents. Numeric values stay strings here and
/// are parsed in the handler, so a malformed number is reported through the
/// JSON error envelope instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
struct GenerateQuery {
    count: Option<String>,
    theme: Option<String>,
    pattern: Option<String>,
    case: Option<String>,
    separator: Option<String>,
    min_length: Option<String>,
    max_length: Option<String>,
}

/// Parse a numeric query value, naming the field in the error.
fn parse_number(field: &str, value: Option<&str>, default: usize) -> Result<usize, String> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("invalid value for {field}: '{raw}'")),
    }
}

/// Run one generation for a request. Returns the batch plus the effective
/// configuration for echoing back to the client.
fn generate_batch(
    config: &AppConfig,
    query: &GenerateQuery,
) -> Result<(Vec<String>, GenerationConfig), String> {
    let gen_config = GenerationConfig {
        pattern: query
            .pattern
            .as_deref()
            .map(Pattern::parse_lossy)
            .unwrap_or_else(|| Pattern::parse_lossy(&config.defaults.pattern)),
        case_style: query
            .case
            .as_deref()
            .map(CaseStyle::parse_lossy)
            .unwrap_or_else(|| CaseStyle::parse_lossy(&config.defaults.case)),
        separator: query
            .separator
            .clone()
            .unwrap_or_else(|| config.defaults.separator.clone()),
        min_length: parse_number(
            "min_length",
            query.min_length.as_deref(),
            config.defaults.min_length,
        )?,
        max_length: parse_number(
            "max_length",
            query.max_length.as_deref(),
            config.defaults.max_length,
        )?,
        count: parse_number("count", query.count.as_deref(), config.defaults.count)?,
    };

    let material = Material::resolve(config, query.theme.as_deref(), None, None, None, None)
        .map_err(|e| e.to_string())?;
    let (adjectives, nouns, exclusions) = material.load().map_err(|e| e.to_string())?;

    let mut service = GeneratorService::new(Box::new(ThreadRngSource::new()));
    let codenames = service
        .generate(&adjectives, &nouns, &exclusions, &gen_config)
        .map_err(|e| e.to_string())?;

    Ok((codenames, gen_config))
}

// ── handlers ──────────────────────────────────────────────────────────────────

async fn index(
    State(config): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> impl IntoResponse {
    match generate_batch(&config, &query) {
        Ok((codenames, _)) => (StatusCode::OK, Html(render(&codenames, RenderFormat::Html))),
        Err(error) => (
            StatusCode::BAD_REQUEST,
            Html(format!(
                "<html>\n<body>\n<h1>Error</h1>\n<p>{error}</p>\n</body>\n</html>"
            )),
        ),
    }
}

async fn api_codenames(
    State(config): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> impl IntoResponse {
    match generate_batch(&config, &query) {
        Ok((codenames, gen_config)) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "codenames": codenames,
                "count": gen_config.count,
                "theme": query.theme.as_deref().unwrap_or("default"),
                "pattern": gen_config.pattern.as_str(),
                "case": gen_config.case_style.as_str(),
                "separator": gen_config.separator,
                "min_length": gen_config.min_length,
                "max_length": gen_config.max_length,
            })),
        ),
        Err(error) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": error })),
        ),
    }
}

async fn api_themes(State(config): State<AppState>) -> impl IntoResponse {
    let themes = ThemeCatalog::new(&config.paths.themes_dir).themes();
    Json(json!({ "success": true, "themes": themes }))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_with_words(dir: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.paths.adjectives = dir.join("adjectives.txt");
        config.paths.nouns = dir.join("nouns.txt");
        config.paths.exclusions = dir.join("exclusions.txt");
        config.paths.themes_dir = dir.join("themes");
        fs::write(&config.paths.adjectives, "brave\n").unwrap();
        fs::write(&config.paths.nouns, "tiger\n").unwrap();
        config
    }

    #[test]
    fn batch_uses_config_defaults_when_query_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_words(tmp.path());

        let (codenames, gen_config) = generate_batch(&config, &GenerateQuery::default()).unwrap();
        assert_eq!(codenames, vec!["Brave Tiger".to_string()]);
        assert_eq!(gen_config.count, 1);
    }

    #[test]
    fn query_overrides_take_effect() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_words(tmp.path());

        let query = GenerateQuery {
            count: Some("3".into()),
            case: Some("upper".into()),
            ..Default::default()
        };
        let (codenames, _) = generate_batch(&config, &query).unwrap();
        assert_eq!(codenames, vec!["BRAVE TIGER".to_string(); 3]);
    }

    #[test]
    fn unknown_pattern_falls_back_instead_of_erroring() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_words(tmp.path());

        let query = GenerateQuery {
            pattern: Some("verb-noun".into()),
            ..Default::default()
        };
        let (codenames, gen_config) = generate_batch(&config, &query).unwrap();
        assert_eq!(gen_config.pattern, Pattern::AdjNoun);
        assert_eq!(codenames.len(), 1);
    }

    #[test]
    fn impossible_length_window_reports_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_words(tmp.path());

        let query = GenerateQuery {
            min_length: Some("50".into()),
            ..Default::default()
        };
        let error = generate_batch(&config, &query).unwrap_err();
        assert!(error.contains("length"));
    }

    #[test]
    fn malformed_count_is_reported_in_the_error_payload() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_words(tmp.path());

        let query = GenerateQuery {
            count: Some("abc".into()),
            ..Default::default()
        };
        let error = generate_batch(&config, &query).unwrap_err();
        assert!(error.contains("count"));
        assert!(error.contains("abc"));
    }

    #[test]
    fn missing_theme_reports_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_words(tmp.path());

        let query = GenerateQuery {
            theme: Some("ghost".into()),
            ..Default::default()
        };
        assert!(generate_batch(&config, &query).is_err());
    }
}
