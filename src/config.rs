//! Application configuration loaded from environment variables.
//!
//! All secrets are read once at startup; nothing is re-read per request.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID for Firestore
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,

    // --- Secrets ---
    /// Signing key for user access tokens
    pub jwt_user_key: Vec<u8>,
    /// Signing key for user refresh tokens
    pub jwt_refresh_key: Vec<u8>,
    /// Signing key for admin tokens
    pub jwt_admin_key: Vec<u8>,

    // --- External collaborators ---
    /// HTTP mail API endpoint for OTP delivery
    pub mail_api_url: String,
    /// Mail API bearer key
    pub mail_api_key: String,
    /// Sender address for OTP mails
    pub mail_from: String,
    /// Cloudinary cloud name for image uploads
    pub cloudinary_cloud_name: String,
    /// Unsigned upload preset (applies the width-capped transcode)
    pub cloudinary_upload_preset: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            jwt_user_key: env::var("JWT_SECRET_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SECRET_KEY"))?
                .into_bytes(),
            jwt_refresh_key: env::var("JWT_REFRESH_SECRET_KEY")
                .map_err(|_| ConfigError::Missing("JWT_REFRESH_SECRET_KEY"))?
                .into_bytes(),
            jwt_admin_key: env::var("JWT_ADMIN_SECRET_KEY")
                .map_err(|_| ConfigError::Missing("JWT_ADMIN_SECRET_KEY"))?
                .into_bytes(),

            mail_api_url: env::var("MAIL_API_URL")
                .map_err(|_| ConfigError::Missing("MAIL_API_URL"))?,
            mail_api_key: env::var("MAIL_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("MAIL_API_KEY"))?,
            mail_from: env::var("MAIL_FROM").map_err(|_| ConfigError::Missing("MAIL_FROM"))?,
            cloudinary_cloud_name: env::var("CLOUDINARY_CLOUD_NAME")
                .map_err(|_| ConfigError::Missing("CLOUDINARY_CLOUD_NAME"))?,
            cloudinary_upload_preset: env::var("CLOUDINARY_UPLOAD_PRESET")
                .map_err(|_| ConfigError::Missing("CLOUDINARY_UPLOAD_PRESET"))?,
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8000,
            jwt_user_key: b"test_user_key_32_bytes_minimum!!".to_vec(),
            jwt_refresh_key: b"test_refresh_key_32_bytes_min!!!".to_vec(),
            jwt_admin_key: b"test_admin_key_32_bytes_minimum!".to_vec(),
            mail_api_url: "http://localhost:9999/send".to_string(),
            mail_api_key: "test_mail_key".to_string(),
            mail_from: "noreply@fittrack.test".to_string(),
            cloudinary_cloud_name: "test-cloud".to_string(),
            cloudinary_upload_preset: "test-preset".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
