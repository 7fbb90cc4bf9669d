//! Media upload, cleanup and serving routes

use axum::{
    Json, Router,
    body::Body,
    extract::{Multipart, Path, Query, State, multipart::MultipartError},
    http::{
        HeaderMap, StatusCode,
        header::{CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
    routing::{get, post},
};
use marquee_store::{MediaError, MediaFile, media::content_type_for};
use tracing::{debug, info};

use crate::{
    AppState,
    error::{ApiError, Result},
    models::{ApiResponse, DeleteMediaQuery, MediaUploaded},
};

/// Create media API routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload_media).delete(delete_media))
}

/// Public routes serving stored media
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{file_name}", get(get_media))
}

/// Bodies cut off by the request limit are reported like any oversized file
fn multipart_error(e: MultipartError, headers: &HeaderMap, body_limit: usize) -> ApiError {
    if e.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::BadRequest(e.body_text());
    }

    let size = headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(body_limit as u64 + 1);
    MediaError::FileTooLarge { size }.into()
}

/// Upload a single image from the multipart field `file`
async fn upload_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let body_limit = state.config.max_body_bytes;
    let mut upload: Option<MediaFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, &headers, body_limit))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, &headers, body_limit))?;

        upload = Some(MediaFile::new(file_name, content_type, data.to_vec()));
    }

    let file = upload.ok_or_else(|| ApiError::bad_request("Missing multipart field 'file'"))?;
    info!(
        "Uploading {} ({}, {} bytes)",
        file.file_name,
        file.content_type,
        file.size()
    );

    let url = state.media.upload(file).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(MediaUploaded { url })),
    ))
}

/// Best-effort removal, always succeeds
async fn delete_media(
    State(state): State<AppState>,
    Query(query): Query<DeleteMediaQuery>,
) -> StatusCode {
    state.media.delete(&query.url).await;
    StatusCode::NO_CONTENT
}

/// Serve a stored media file
async fn get_media(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response<Body>> {
    debug!("Serving media {}", file_name);

    let key = state.media_config.key_for(&file_name);
    let bytes = state.storage.get(&key).await?;

    Response::builder()
        .header(CONTENT_TYPE, content_type_for(&file_name))
        .header(CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
