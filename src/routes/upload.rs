// SPDX-License-Identifier: MIT

//! Image upload route.

use crate::error::{AppError, Result};
use crate::routes::ApiResponse;
use crate::AppState;
use axum::{extract::Multipart, extract::State, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/uploadimage", post(upload_image))
}

#[derive(Serialize)]
pub struct UploadedImage {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Accept a multipart form with a `myimage` file field, push it through the
/// media pipeline, and return the hosted URL.
async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadedImage>>> {
    let mut file: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("myimage") {
            let filename = field
                .file_name()
                .unwrap_or("upload.jpg")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read file: {}", e)))?;
            file = Some((bytes.to_vec(), filename));
        }
    }

    let (bytes, filename) =
        file.ok_or_else(|| AppError::Validation("Please provide an image file".to_string()))?;

    let url = state.media.upload_image(bytes, filename).await?;

    Ok(ApiResponse::with_data(
        "Image uploaded successfully",
        UploadedImage { image_url: url },
    ))
}
