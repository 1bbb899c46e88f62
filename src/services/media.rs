// SPDX-License-Identifier: MIT

//! Image pipeline client.
//!
//! Uploads an in-memory image buffer to a Cloudinary-style pipeline via an
//! unsigned upload preset and returns the resulting public URL. The preset
//! owns the incoming transformation (width capped at 800px), so no image
//! processing happens in this process.

use crate::error::AppError;
use serde::Deserialize;

/// Image pipeline client.
#[derive(Clone)]
pub struct MediaService {
    http: Option<reqwest::Client>,
    upload_url: String,
    upload_preset: String,
}

/// Subset of the upload response we care about.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl MediaService {
    /// Create a new media client for the given cloud and preset.
    pub fn new(cloud_name: &str, upload_preset: String) -> Self {
        Self {
            http: Some(reqwest::Client::new()),
            upload_url: format!(
                "https://api.cloudinary.com/v1_1/{}/image/upload",
                cloud_name
            ),
            upload_preset,
        }
    }

    /// Create a mock media client for testing (offline mode).
    ///
    /// Uploads will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            http: None,
            upload_url: String::new(),
            upload_preset: String::new(),
        }
    }

    /// Upload an image buffer and return its public URL.
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        filename: String,
    ) -> Result<String, AppError> {
        let http = self.http.as_ref().ok_or_else(|| {
            AppError::Storage("Media pipeline not configured (offline mode)".to_string())
        })?;

        let file_part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .part("file", file_part);

        let response = http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Storage(format!(
                "Upload API returned {}: {}",
                status, text
            )));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        tracing::info!(url = %uploaded.secure_url, "Image uploaded");
        Ok(uploaded.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_media_errors_offline() {
        let media = MediaService::new_mock();
        let err = media
            .upload_image(vec![0u8; 16], "test.jpg".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
