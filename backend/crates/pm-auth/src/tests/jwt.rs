use crate::{AuthError, Claims, JwtValidator, TokenIssuer};

use googletest::prelude::*;
use jsonwebtoken::Algorithm;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims() -> Claims {
    Claims {
        sub: Uuid::new_v4().to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}

#[test]
fn given_valid_token_when_validated_then_returns_claims() {
    let validator = JwtValidator::with_hs256(SECRET);
    let claims = valid_claims();
    let token = create_test_token(&claims, SECRET);

    let validated = validator.validate(&token).unwrap();

    assert_that!(validated.sub, eq(&claims.sub));
}

#[test]
fn given_expired_token_when_validated_then_returns_token_expired_error() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_returns_decode_error() {
    let validator = JwtValidator::with_hs256(b"wrong-secret-key-at-least-32-by");
    let token = create_test_token(&valid_claims(), SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_non_uuid_subject_when_validated_then_returns_invalid_claim() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.sub = "user-123".to_string();
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}

#[test]
fn given_issued_token_when_validated_then_subject_is_user_id() {
    let issuer = TokenIssuer::with_hs256(SECRET, 3600);
    let validator = JwtValidator::with_hs256(SECRET);
    let user_id = Uuid::new_v4();

    let issued = issuer.issue(user_id).unwrap();
    let claims = validator.validate(&issued.token).unwrap();

    assert_that!(claims.user_id().unwrap(), eq(user_id));
    assert_that!(claims.exp, eq(issued.expires_at.timestamp()));
}

#[test]
fn given_bearer_header_when_validated_then_returns_claims() {
    let issuer = TokenIssuer::with_hs256(SECRET, 60);
    let validator = JwtValidator::with_hs256(SECRET);
    let issued = issuer.issue(Uuid::new_v4()).unwrap();
    let header = format!("Bearer {}", issued.token);

    let result = validator.validate_header(Some(&header));

    assert_that!(result.is_ok(), eq(true));
}

#[test]
fn given_missing_or_basic_header_when_validated_then_rejected() {
    let validator = JwtValidator::with_hs256(SECRET);

    assert!(matches!(
        validator.validate_header(None),
        Err(AuthError::MissingHeader { .. })
    ));
    assert!(matches!(
        validator.validate_header(Some("Basic dXNlcjpwYXNz")),
        Err(AuthError::InvalidScheme { .. })
    ));
    assert!(matches!(
        validator.validate_header(Some("Bearer   ")),
        Err(AuthError::InvalidToken { .. })
    ));
}
