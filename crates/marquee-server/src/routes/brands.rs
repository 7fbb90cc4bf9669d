//! Brand default routes

use axum::{
    Json, Router,
    extract::{Path, Query},
    routing::{get, post},
};
use marquee::{Brand, Show, SiteConfig, registry};
use tracing::debug;

use crate::{
    AppState,
    error::{ApiError, Result},
    models::{ApiResponse, ConfigQuery},
    routes::previews,
};

/// Resolve a brand path segment, unknown brands are not found
pub(crate) fn parse_brand(brand: &str) -> Result<Brand> {
    brand
        .parse()
        .map_err(|_| ApiError::not_found(&format!("Unknown brand: {}", brand)))
}

/// Create brand routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands))
        .route("/{brand}/config", get(get_default_config))
        .route("/{brand}/shows/{id}", get(get_show))
        .route("/{brand}/previews", post(previews::create_brand_preview))
        .route("/{brand}/previews/{id}", get(previews::get_brand_preview))
}

/// List known brand identifiers
async fn list_brands() -> Json<ApiResponse<&'static [Brand]>> {
    Json(ApiResponse::new(Brand::ALL))
}

/// Default document for a brand, image-free when `editing=true`
async fn get_default_config(
    Path(brand): Path<String>,
    Query(query): Query<ConfigQuery>,
) -> Result<Json<ApiResponse<SiteConfig>>> {
    let brand = parse_brand(&brand)?;
    debug!("Default config for {} (editing: {})", brand, query.editing);

    let config = if query.editing {
        registry::default_config_for_editing(brand)
    } else {
        registry::default_config(brand)
    };

    Ok(Json(ApiResponse::new(config)))
}

/// A show from the brand's baseline collection
async fn get_show(Path((brand, id)): Path<(String, u32)>) -> Result<Json<ApiResponse<Show>>> {
    let brand = parse_brand(&brand)?;

    registry::show_by_id(brand, id)
        .map(|show| Json(ApiResponse::new(show)))
        .ok_or_else(|| ApiError::not_found(&format!("Show {} in brand {}", id, brand)))
}
