//! Image upload handler.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart,
    },
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use tracing::info;
use utoipa::ToSchema;

use common::{AppError, AppResult, OptionExt};
use domain::ImageSummary;

use crate::state::AppState;

/// Multipart field carrying the file
const IMAGE_FIELD: &str = "image";

/// Content type reported when the part does not declare one
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Multipart upload body (documentation only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUpload {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

/// Create upload routes with a request body limit of `max_bytes`
pub fn upload_routes(max_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/post-image", post(post_image))
        .layer(DefaultBodyLimit::max(max_bytes))
}

/// Upload an image
///
/// Reports the file name, content type and size in kilobytes. Nothing is stored.
#[utoipa::path(
    post,
    path = "/post-image",
    tag = "Files",
    request_body(content = ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload summary", body = ImageSummary),
        (status = 413, description = "Upload too large"),
        (status = 422, description = "Missing image")
    )
)]
pub async fn post_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ImageSummary>> {
    let multipart = multipart.map_err(|e| AppError::validation("file", e.body_text()))?;
    let summary = read_image(multipart).await?.ok_or_missing(IMAGE_FIELD)?;

    info!(
        filename = %summary.filename,
        format = %summary.format,
        size_kb = summary.size_kb,
        "Image received"
    );
    Ok(Json(summary))
}

/// Summarize the first `image` part, skipping any other fields.
async fn read_image(mut multipart: Multipart) -> AppResult<Option<ImageSummary>> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let format = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;

        return Ok(Some(ImageSummary::new(filename, format, bytes.len())));
    }

    Ok(None)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::bad_request(err.body_text())
    }
}
