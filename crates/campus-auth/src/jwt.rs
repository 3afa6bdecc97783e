//! Signed token encoding and decoding.
//!
//! Tokens are compact JWTs signed with HS256 using a single process-wide
//! secret loaded from configuration. Decoding verifies the signature before
//! trusting any claim and checks expiry against the local clock.

use crate::claims::Claims;
use crate::error::AuthError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Clock skew tolerance for expiry validation, in seconds.
const LEEWAY_SECS: u64 = 60;

/// Encode claims into a signed token string.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if encoding fails.
pub fn encode_token(claims: &Claims, secret: &[u8]) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(secret);
    let header = Header::new(Algorithm::HS256);

    encode(&header, claims, &key)
        .map_err(|e| AuthError::InvalidToken(format!("Encoding failed: {e}")))
}

/// Decode and validate a signed token.
///
/// The signature is verified first; expiry is checked against the local
/// clock with a small leeway. The embedded claims are only returned once
/// both checks pass.
///
/// # Errors
///
/// - `AuthError::TokenExpired` - the token's expiry has passed
/// - `AuthError::InvalidSignature` - signature verification failed
/// - `AuthError::InvalidToken` - the token is malformed
pub fn decode_token(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(secret);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = LEEWAY_SECS;
    validation.algorithms = vec![Algorithm::HS256];

    let token_data = decode::<Claims>(token, &key, &validation).map_err(map_jwt_error)?;

    Ok(token_data.claims)
}

/// Map jsonwebtoken errors to `AuthError`.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidToken => AuthError::InvalidToken("Malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::InvalidToken("Invalid base64 encoding".to_string()),
        ErrorKind::Json(_) => AuthError::InvalidToken("Invalid JSON in claims".to_string()),
        _ => AuthError::InvalidToken(format!("Token validation failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::TokenKind;
    use chrono::Utc;

    const SECRET: &[u8] = b"test-secret-key-for-unit-tests-only";
    const OTHER_SECRET: &[u8] = b"a-completely-different-secret-key";

    #[test]
    fn encode_produces_three_part_token() {
        let claims = Claims::builder()
            .subject("user-123")
            .expires_in_secs(900)
            .build();

        let token = encode_token(&claims, SECRET).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn roundtrip_preserves_claims() {
        let claims = Claims::builder()
            .subject("user-123")
            .kind(TokenKind::Refresh)
            .expires_in_secs(3600)
            .build();

        let token = encode_token(&claims, SECRET).unwrap();
        let decoded = decode_token(&token, SECRET).unwrap();

        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.kind, TokenKind::Refresh);
        assert_eq!(decoded.exp, claims.exp);
        assert_eq!(decoded.jti, claims.jti);
    }

    #[test]
    fn expired_token_rejected() {
        let claims = Claims::builder()
            .subject("user-123")
            .expiration(Utc::now().timestamp() - 3600)
            .build();

        let token = encode_token(&claims, SECRET).unwrap();
        let result = decode_token(&token, SECRET);

        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn wrong_secret_rejected() {
        let claims = Claims::builder()
            .subject("user-123")
            .expires_in_secs(900)
            .build();

        let token = encode_token(&claims, SECRET).unwrap();
        let result = decode_token(&token, OTHER_SECRET);

        assert!(matches!(result.unwrap_err(), AuthError::InvalidSignature));
    }

    #[test]
    fn tampered_payload_rejected() {
        let claims = Claims::builder()
            .subject("user-123")
            .expires_in_secs(900)
            .build();

        let token = encode_token(&claims, SECRET).unwrap();
        // Flip a character inside the payload segment.
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let mut payload: Vec<char> = parts[1].chars().collect();
        payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
        parts[1] = payload.into_iter().collect();
        let tampered = parts.join(".");

        assert!(decode_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn malformed_token_rejected() {
        let result = decode_token("not.a.valid.token", SECRET);
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));

        let result = decode_token("", SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn leeway_tolerates_small_clock_skew() {
        // Expired 30s ago: still accepted under the 60s leeway.
        let claims = Claims::builder()
            .subject("user-123")
            .expiration(Utc::now().timestamp() - 30)
            .build();
        let token = encode_token(&claims, SECRET).unwrap();
        assert!(decode_token(&token, SECRET).is_ok());

        // Expired well past the leeway: rejected.
        let claims = Claims::builder()
            .subject("user-123")
            .expiration(Utc::now().timestamp() - 120)
            .build();
        let token = encode_token(&claims, SECRET).unwrap();
        assert!(matches!(
            decode_token(&token, SECRET).unwrap_err(),
            AuthError::TokenExpired
        ));
    }
}
