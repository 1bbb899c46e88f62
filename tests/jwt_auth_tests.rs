// SPDX-License-Identifier: MIT

//! JWT authentication tests.
//!
//! These tests verify that tokens created by the auth routes can be verified
//! by the middleware, and that the three signing keys stay independent.

use fittrack::middleware::auth::{
    create_token, verify_token, ADMIN_TTL_SECS, USER_ACCESS_TTL_SECS, USER_REFRESH_TTL_SECS,
};
use std::time::{SystemTime, UNIX_EPOCH};

fn now_secs() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

#[test]
fn test_jwt_roundtrip() {
    let signing_key = b"test_signing_key_32_bytes_long!!";

    let token = create_token("user-42", signing_key, USER_ACCESS_TTL_SECS).unwrap();
    let claims = verify_token(&token, signing_key).expect("Failed to verify freshly-minted token");

    assert_eq!(claims.sub, "user-42");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_jwt_rejected_with_wrong_key() {
    let user_key = b"test_signing_key_32_bytes_long!!";
    let admin_key = b"different_signing_key_32_bytes!!";

    let token = create_token("user-42", user_key, USER_ACCESS_TTL_SECS).unwrap();

    // A user token must never verify under the admin key
    assert!(verify_token(&token, admin_key).is_err());
}

#[test]
fn test_jwt_tampered_token_rejected() {
    let signing_key = b"test_signing_key_32_bytes_long!!";
    let token = create_token("user-42", signing_key, USER_ACCESS_TTL_SECS).unwrap();

    let mut tampered = token.clone();
    tampered.pop();
    tampered.push('x');

    assert!(verify_token(&tampered, signing_key).is_err());
}

#[test]
fn test_jwt_expired_token_rejected() {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    let signing_key = b"test_signing_key_32_bytes_long!!";
    let now = now_secs();

    // Expired well past the default validation leeway
    let claims = fittrack::middleware::auth::Claims {
        sub: "user-42".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )
    .unwrap();

    assert!(verify_token(&token, signing_key).is_err());
}

#[test]
fn test_token_ttls() {
    let signing_key = b"test_signing_key_32_bytes_long!!";
    let now = now_secs();

    let access = create_token("u", signing_key, USER_ACCESS_TTL_SECS).unwrap();
    let refresh = create_token("u", signing_key, USER_REFRESH_TTL_SECS).unwrap();
    let admin = create_token("a", signing_key, ADMIN_TTL_SECS).unwrap();

    let access_claims = verify_token(&access, signing_key).unwrap();
    let refresh_claims = verify_token(&refresh, signing_key).unwrap();
    let admin_claims = verify_token(&admin, signing_key).unwrap();

    // Allow a couple of seconds of slop between create and assert
    assert!(access_claims.exp >= now + USER_ACCESS_TTL_SECS);
    assert!(access_claims.exp <= now + USER_ACCESS_TTL_SECS + 5);
    assert!(refresh_claims.exp >= now + USER_REFRESH_TTL_SECS);
    assert!(admin_claims.exp >= now + ADMIN_TTL_SECS);
    assert!(admin_claims.exp < refresh_claims.exp);
}
