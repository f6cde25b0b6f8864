//! Analysis HTTP API using axum.
//!
//! Mirrors the CLI pipeline behind a small JSON API with a cache-aside
//! in-memory cache: check the cache, compute on miss, write the result back
//! to the cache and to the analyses directory. Scenario recalculation never
//! needs this server (clients re-derive end-of-life locally from the
//! shipped result), but `/api/scenarios` publishes the authoritative
//! scenario constants so no client ever hand-duplicates them.

use anyhow::{Context, Result};
use axum::extract::{Path as AxumPath, Query, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use eco_core::{disposal, Catalog, FactorTable};
use eco_engine::{calculate, ModelParams, ScenarioSelector};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::cli::{GlobalArgs, ServeArgs};
use crate::commands::common::{
    analyses_dir, load_catalog, load_factors, load_project, model_params, write_json_results,
};

/// A cached response body with its insertion time.
struct CacheEntry {
    body: String,
    inserted_at: DateTime<Utc>,
}

/// Shared state for all handlers: reference data loaded once at startup,
/// plus the response cache.
struct AppState {
    factors: FactorTable,
    catalog: Catalog,
    params: ModelParams,
    analyses_dir: PathBuf,
    cache: RwLock<HashMap<String, CacheEntry>>,
    cache_enabled: bool,
    cache_ttl: Duration,
}

/// Query parameters for the analyze endpoint.
#[derive(Debug, Deserialize)]
struct AnalyzeQuery {
    /// Disposal scenario: baseline, best_case, worst_case
    eol_scenario: Option<String>,
}

/// Execute the serve command
pub(crate) async fn execute(args: &ServeArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let factors = load_factors(&project)?;
    let catalog = load_catalog(&project)?;

    println!("Loaded {} products from the catalog", catalog.len());

    let server = &project.config.server;
    let host = args.host.clone().unwrap_or_else(|| server.host.clone());
    let port = args.port.unwrap_or(server.port);

    let state = Arc::new(AppState {
        factors,
        catalog,
        params: model_params(&project.config),
        analyses_dir: analyses_dir(&project),
        cache: RwLock::new(HashMap::new()),
        cache_enabled: server.cache_enabled,
        cache_ttl: Duration::seconds(server.cache_ttl_secs as i64),
    });

    let app = Router::new()
        .route("/health", get(get_health))
        .route("/analyze/{id}", get(get_analyze))
        .route("/api/scenarios", get(get_scenarios))
        .layer(cors_layer(&server.cors_origins))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid host:port")?;

    println!("Serving analysis API at http://{}:{}", host, port);
    println!("Press Ctrl+C to stop.\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}:{}", host, port))?;
    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}

/// Build the CORS layer: the configured origins, or any origin when none
/// are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET]).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(parsed))
}

/// GET /health
async fn get_health() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        r#"{"status":"ok","service":"ecoflow-lca"}"#,
    )
}

/// GET /api/scenarios
///
/// The authoritative disposal scenario and method factor constants, so
/// clients performing local recalculation share them instead of
/// hand-duplicating values.
async fn get_scenarios(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut scenarios = serde_json::Map::new();
    for (name, mix) in disposal::predefined() {
        scenarios.insert(
            name.to_string(),
            serde_json::to_value(mix.fractions()).unwrap_or_default(),
        );
    }
    let body = serde_json::json!({
        "scenarios": scenarios,
        "disposal_factors": state.factors.disposal,
    });
    (
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
}

/// GET /analyze/{id}?eol_scenario=...
///
/// Cache-aside: check the in-memory cache, compute on miss, write back to
/// the cache and persist the result file. Persistence failures are logged
/// and do not fail the request.
async fn get_analyze(
    State(state): State<Arc<AppState>>,
    AxumPath(id): AxumPath<String>,
    Query(query): Query<AnalyzeQuery>,
) -> impl IntoResponse {
    let spec = match state.catalog.get(&id) {
        Some(spec) => spec,
        None => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("Product '{}' not found", id),
            )
        }
    };

    let scenario_name = query
        .eol_scenario
        .as_deref()
        .or(spec.eol_scenario.as_deref())
        .unwrap_or(disposal::BASELINE)
        .to_string();
    let cache_key = format!("lca:{}:{}", id, scenario_name);

    if state.cache_enabled {
        let cache = state.cache.read().await;
        if let Some(entry) = cache.get(&cache_key) {
            if Utc::now() - entry.inserted_at < state.cache_ttl {
                log::info!("cache hit for {}", cache_key);
                return json_response(StatusCode::OK, entry.body.clone());
            }
        }
    }

    let input = match spec.resolve(&state.factors) {
        Ok(input) => input,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    };

    let selector = ScenarioSelector::from_name(&scenario_name);
    let analysis = match calculate(&state.factors, &state.params, &input, &selector) {
        Ok(analysis) => analysis,
        Err(e) => {
            log::error!("analysis failed for {}: {}", id, e);
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
        }
    };
    for diagnostic in &analysis.diagnostics {
        log::warn!("{}: {} {}", id, diagnostic.code, diagnostic.message);
    }

    let body = match serde_json::to_string(&analysis.result) {
        Ok(body) => body,
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    // Write-back: cache first, then best-effort file persistence
    if state.cache_enabled {
        let mut cache = state.cache.write().await;
        cache.insert(
            cache_key,
            CacheEntry {
                body: body.clone(),
                inserted_at: Utc::now(),
            },
        );
    }

    let path = state.analyses_dir.join(format!("{}.json", id));
    if let Err(e) = write_json_results(&path, &analysis.result) {
        log::warn!("failed to persist analysis for {}: {:#}", id, e);
    }

    json_response(StatusCode::OK, body)
}

fn json_response(status: StatusCode, body: String) -> axum::response::Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    json_response(
        status,
        serde_json::json!({ "error": message }).to_string(),
    )
}
