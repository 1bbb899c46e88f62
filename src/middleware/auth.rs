// SPDX-License-Identifier: MIT

//! JWT authentication middleware.
//!
//! Users and admins carry independently-keyed tokens; a valid user token is
//! never accepted on an admin route or vice versa. Tokens are read from the
//! http-only cookie first, then from the `Authorization: Bearer` header.

use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// User access token validity (~50 minutes).
pub const USER_ACCESS_TTL_SECS: usize = 50 * 60;
/// User refresh token validity (~100 minutes).
pub const USER_REFRESH_TTL_SECS: usize = 100 * 60;
/// Admin token validity (~10 minutes).
pub const ADMIN_TTL_SECS: usize = 10 * 60;

/// Cookie carrying the user access token.
pub const AUTH_COOKIE: &str = "authToken";
/// Cookie carrying the user refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";
/// Cookie carrying the admin token.
pub const ADMIN_COOKIE: &str = "adminAuthToken";

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user or admin document id)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Authenticated user principal extracted from a verified token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// Authenticated admin principal extracted from a verified token.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub admin_id: String,
}

/// Pull a token from the named cookie, falling back to the bearer header.
fn extract_token(jar: &CookieJar, request: &Request, cookie_name: &str) -> Option<String> {
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())?;

    auth_header
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

/// Middleware that requires a valid user access token.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token =
        extract_token(&jar, &request, AUTH_COOKIE).ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = verify_token(&token, &state.config.jwt_user_key)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let auth_user = AuthUser {
        user_id: claims.sub,
    };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Middleware that requires a valid admin token.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token =
        extract_token(&jar, &request, ADMIN_COOKIE).ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = verify_token(&token, &state.config.jwt_admin_key)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let auth_admin = AuthAdmin {
        admin_id: claims.sub,
    };
    request.extensions_mut().insert(auth_admin);

    Ok(next.run(request).await)
}

/// Create a signed token for `subject` valid for `ttl_secs`.
pub fn create_token(subject: &str, signing_key: &[u8], ttl_secs: usize) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: subject.to_string(),
        iat: now,
        exp: now + ttl_secs,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Verify a token signature and expiry, returning the claims.
pub fn verify_token(token: &str, signing_key: &[u8]) -> anyhow::Result<Claims> {
    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(token, &key, &validation)?;
    Ok(data.claims)
}
