//! HTTP invocation surface
//!
//! Exposes the crawl as a network-callable operation plus a liveness probe:
//!
//! - `GET /scrape?start_url=<url>` runs a full crawl followed by a
//!   reconciliation pass and returns a JSON completion message
//! - `GET /health` reports that the service is up
//!
//! The crawl operation is synchronous from the caller's perspective and
//! invocations are serialized: the shared processed store tolerates at most
//! one active traversal, so concurrent scrape requests queue on a mutex.

use crate::config::Config;
use crate::crawler::Coordinator;
use crate::reconcile::reconcile;
use crate::url::ListingPattern;
use crate::RelayError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use url::Url;

/// Shared state for the HTTP surface
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    crawl_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            crawl_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Builds the router with all routes and middleware
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/scrape", get(scrape))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves requests until the process exits
pub async fn run_server(config: Config) -> Result<(), RelayError> {
    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let state = AppState::new(config);
    let app = create_routes(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

#[derive(Debug, Deserialize)]
struct ScrapeParams {
    start_url: String,
}

async fn scrape(
    State(state): State<AppState>,
    Query(params): Query<ScrapeParams>,
) -> (StatusCode, Json<serde_json::Value>) {
    if !params.start_url.starts_with("http") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "detail": "start_url must begin with http:// or https://",
            })),
        );
    }

    let seed = match Url::parse(&params.start_url) {
        Ok(seed) => seed,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "detail": format!("Invalid start_url: {}", e),
                })),
            );
        }
    };

    // One traversal at a time against the shared store
    let _guard = state.crawl_lock.lock().await;

    let mut coordinator = match Coordinator::new(&state.config) {
        Ok(coordinator) => coordinator,
        Err(e) => {
            tracing::error!("Failed to initialize crawl: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "detail": format!("Failed to initialize crawl: {}", e),
                })),
            );
        }
    };

    match coordinator.run(&seed).await {
        Ok(_inventory) => {
            let pattern = ListingPattern::new(&seed);
            reconcile(
                Path::new(&state.config.storage.inventory_path),
                &pattern,
                coordinator.processed().links(),
                Path::new(&state.config.storage.missing_links_path),
            );

            (
                StatusCode::OK,
                Json(json!({
                    "message": format!("Crawl completed for {}", params.start_url),
                })),
            )
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "detail": format!("Crawl failed: {}", e),
                })),
            )
        }
    }
}
