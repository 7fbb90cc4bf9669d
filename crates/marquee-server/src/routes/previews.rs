//! Preview save and retrieval routes
//!
//! Every failure to resolve a preview, whether the identifier is malformed,
//! unknown, or saved under another brand, produces the same 404 body.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use marquee::{Brand, SiteConfig};
use marquee_store::StoreError;
use tracing::{debug, info};

use crate::{
    AppState,
    error::{ApiError, Result},
    models::{ApiResponse, CreateBrandPreviewRequest, CreatePreviewRequest, PreviewCreated},
    routes::brands::parse_brand,
};

/// Create preview routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_preview))
        .route("/{id}", get(get_preview))
}

/// Save a preview, brand taken from the body
async fn create_preview(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreatePreviewRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = payload?;
    let brand = match request.brand.as_deref() {
        Some(brand) => brand
            .parse::<Brand>()
            .map_err(|_| ApiError::bad_request(&format!("Unknown brand: {}", brand)))?,
        None => Brand::default(),
    };

    let id = state.previews.save(brand, &request.config).await?;
    info!("Created preview {} ({})", id, brand);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            PreviewCreated::unscoped(id, brand),
            "Preview created".to_string(),
        )),
    ))
}

/// Save a preview under the brand in the path
pub(crate) async fn create_brand_preview(
    State(state): State<AppState>,
    Path(brand): Path<String>,
    payload: std::result::Result<Json<CreateBrandPreviewRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let brand = parse_brand(&brand)?;
    let Json(request) = payload?;

    let id = state.previews.save(brand, &request.config).await?;
    info!("Created preview {} ({})", id, brand);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            PreviewCreated::scoped(id, brand),
            "Preview created".to_string(),
        )),
    ))
}

/// Load a preview regardless of brand
async fn get_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SiteConfig>>> {
    debug!("Loading preview {}", id);

    let config = state.previews.load(&id, None).await?;
    Ok(Json(ApiResponse::new(config)))
}

/// Load a preview only if it was saved under the brand in the path
pub(crate) async fn get_brand_preview(
    State(state): State<AppState>,
    Path((brand, id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<SiteConfig>>> {
    debug!("Loading preview {} for brand {}", id, brand);

    // Unknown brands look exactly like a missing preview
    if !Brand::is_valid(&brand) {
        return Err(StoreError::NotFound(id).into());
    }

    let config = state.previews.load(&id, Some(&brand)).await?;
    Ok(Json(ApiResponse::new(config)))
}
