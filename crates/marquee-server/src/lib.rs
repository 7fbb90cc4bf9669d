//! Marquee HTTP API
//!
//! Serves brand defaults, saves and loads preview snapshots, and accepts
//! image uploads for the landing page editor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    response::Json,
    routing::get,
};
use marquee_store::{BlobMediaStore, BlobStorage, MediaConfig, MediaStore, PreviewStore};
use serde_json::{Value, json};
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use config::ServerConfig;

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub previews: PreviewStore,
    pub media: Arc<dyn MediaStore>,
    /// Backing storage, read directly when serving media
    pub storage: Arc<dyn BlobStorage>,
    pub media_config: MediaConfig,
    pub config: ServerConfig,
}

impl AppState {
    /// Wire previews and media onto one storage backend
    pub fn new(storage: Arc<dyn BlobStorage>, config: ServerConfig) -> Self {
        let media_config = config.media_config();
        Self {
            previews: PreviewStore::new(storage.clone()),
            media: Arc::new(BlobMediaStore::new(storage.clone(), media_config.clone())),
            storage,
            media_config,
            config,
        }
    }
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    let cors = cors_layer(&state.config);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // API routes
        .nest("/api", api_routes())
        // Stored media
        .nest("/media", routes::media::public_router())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/brands", routes::brands::router())
        .nest("/previews", routes::previews::router())
        .nest("/media", routes::media::router())
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "marquee-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": time::OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default()
    }))
}
