// SPDX-License-Identifier: MIT

//! One-time-code delivery over an HTTP mail API.
//!
//! The code is generated here and handed to the mail collaborator; it is
//! never echoed back to the HTTP caller.

use crate::error::AppError;
use rand::Rng;

/// Mail API client for OTP delivery.
#[derive(Clone)]
pub struct MailerService {
    http: Option<reqwest::Client>,
    api_url: String,
    api_key: String,
    from: String,
}

impl MailerService {
    /// Create a new mailer pointed at the configured mail API.
    pub fn new(api_url: String, api_key: String, from: String) -> Self {
        Self {
            http: Some(reqwest::Client::new()),
            api_url,
            api_key,
            from,
        }
    }

    /// Create a mock mailer for testing (offline mode).
    ///
    /// Sending will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            http: None,
            api_url: String::new(),
            api_key: String::new(),
            from: String::new(),
        }
    }

    /// Generate a 6-digit one-time code.
    pub fn generate_otp() -> u32 {
        rand::thread_rng().gen_range(100_000..1_000_000)
    }

    /// Send a one-time code to `email`. The response is gated on delivery;
    /// no timeout or retry policy is applied.
    pub async fn send_otp(&self, email: &str, otp: u32) -> Result<(), AppError> {
        let http = self
            .http
            .as_ref()
            .ok_or_else(|| AppError::Mail("Mailer not configured (offline mode)".to_string()))?;

        let body = serde_json::json!({
            "from": self.from,
            "to": email,
            "subject": "OTP for verification",
            "text": format!("Your OTP is {}", otp),
        });

        let response = http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Mail(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Mail(format!(
                "Mail API returned {}: {}",
                status, text
            )));
        }

        tracing::info!(to = email, "OTP mail dispatched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_is_six_digits() {
        for _ in 0..100 {
            let otp = MailerService::generate_otp();
            assert!((100_000..1_000_000).contains(&otp));
        }
    }

    #[tokio::test]
    async fn test_mock_mailer_errors_offline() {
        let mailer = MailerService::new_mock();
        let err = mailer.send_otp("a@b.test", 123456).await.unwrap_err();
        assert!(matches!(err, AppError::Mail(_)));
    }
}
