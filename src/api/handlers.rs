use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use crate::AppState;

use super::models::{AnalyzeResponse, ErrorResponse};

pub async fn health() -> &'static str {
    "Vision AI Server is Running!"
}

pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    // A POST that is not multipart at all carries no image either.
    let mut multipart = multipart.map_err(|_| no_image_uploaded())?;
    let image = read_image_field(&mut multipart).await?;

    info!(bytes = image.len(), "image received, analyzing");

    match state.ollama.read_display(&image).await {
        Ok(result) => {
            info!(%result, "inference result");
            Ok(Json(AnalyzeResponse::success(result)))
        }
        Err(err) => {
            error!(%err, "inference failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

/// Reads the `image` multipart field in full. An empty payload counts as
/// missing, there is nothing to analyze.
async fn read_image_field(
    multipart: &mut Multipart,
) -> Result<Vec<u8>, (StatusCode, Json<ErrorResponse>)> {
    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        if field.name() != Some("image") {
            continue;
        }
        let data = field.bytes().await.map_err(bad_request)?;
        if data.is_empty() {
            break;
        }
        return Ok(data.to_vec());
    }

    Err(no_image_uploaded())
}

fn no_image_uploaded() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "No image uploaded".to_string(),
        }),
    )
}

fn bad_request(err: MultipartError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
