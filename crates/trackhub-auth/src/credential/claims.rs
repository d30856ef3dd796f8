//! Credential payload decoding.
//!
//! The credential is an opaque signed token issued by the remote service.
//! The client never verifies the signature — it only needs the identity
//! and role claims carried in the payload segment, and it trusts the
//! server to reject a forged token on the next request anyway.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use serde_json::Value;

use trackhub_core::AppError;
use trackhub_core::error::ErrorKind;

/// Fallback role assigned when the payload carries no role claim.
pub const DEFAULT_ROLE: &str = "USER";

/// Payload segments use the URL-safe alphabet; issuers differ on whether
/// they pad, so accept both.
const PAYLOAD_B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Identity and role claims extracted from a credential payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject identifier (`sub`, else `userId`, else empty).
    pub subject: String,
    /// Login name (`username`, else `sub`, else empty).
    pub username: String,
    /// Contact email (`email`, else empty).
    pub email: String,
    /// Raw role string (`role`, else first of `authorities`, else [`DEFAULT_ROLE`]).
    pub role: String,
    /// Expiry instant in Unix seconds, if the payload carries one.
    pub exp: Option<i64>,
}

impl Claims {
    /// Whether the credential is still valid at the given instant.
    ///
    /// The check is strict: `exp * 1000 > now_ms`. A payload without an
    /// `exp` claim is never considered unexpired.
    pub fn is_unexpired_at(&self, now_ms: i64) -> bool {
        match self.exp {
            Some(exp) => exp * 1000 > now_ms,
            None => false,
        }
    }
}

/// Decodes the payload segment of a bearer credential into [`Claims`].
///
/// The credential must have at least two dot-separated segments, the
/// second of which must be base64url-encoded UTF-8 JSON. Any structural
/// failure yields a `Decode` error; expiry is deliberately not checked
/// here — callers decide whether it matters (it does on startup, not on
/// a freshly issued token).
pub fn decode_credential(credential: &str) -> Result<Claims, AppError> {
    let mut segments = credential.split('.');
    let (Some(_header), Some(payload)) = (segments.next(), segments.next()) else {
        return Err(AppError::decode("Credential is not a segmented token"));
    };

    let bytes = PAYLOAD_B64.decode(payload).map_err(|e| {
        AppError::with_source(ErrorKind::Decode, "Credential payload is not valid base64", e)
    })?;

    let text = String::from_utf8(bytes).map_err(|e| {
        AppError::with_source(ErrorKind::Decode, "Credential payload is not valid UTF-8", e)
    })?;

    let claims: Value = serde_json::from_str(&text).map_err(|e| {
        AppError::with_source(ErrorKind::Decode, "Credential payload is not valid JSON", e)
    })?;

    let subject = string_claim(&claims, "sub")
        .or_else(|| string_claim(&claims, "userId"))
        .unwrap_or_default();

    let username = string_claim(&claims, "username").unwrap_or_else(|| subject.clone());

    let email = string_claim(&claims, "email").unwrap_or_default();

    let role = string_claim(&claims, "role")
        .or_else(|| first_authority(&claims))
        .unwrap_or_else(|| DEFAULT_ROLE.to_string());

    let exp = claims.get("exp").and_then(Value::as_i64);

    Ok(Claims {
        subject,
        username,
        email,
        role,
        exp,
    })
}

/// Reads a claim as a string, stringifying numeric identifiers.
fn string_claim(claims: &Value, key: &str) -> Option<String> {
    match claims.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First entry of an `authorities` list, tolerating string or object entries
/// of the `{"authority": "..."}` shape some issuers produce.
fn first_authority(claims: &Value) -> Option<String> {
    let first = claims.get("authorities")?.as_array()?.first()?;
    match first {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("authority")?.as_str().map(String::from),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(payload: &Value) -> String {
        let body = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("header.{body}.signature")
    }

    #[test]
    fn test_decode_full_payload() {
        let credential = encode(&serde_json::json!({
            "sub": "u1",
            "username": "alice",
            "email": "alice@lab.edu",
            "role": "ROLE_ADMIN",
            "exp": 4_000_000_000i64,
        }));
        let claims = decode_credential(&credential).unwrap();
        assert_eq!(claims.subject, "u1");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.email, "alice@lab.edu");
        assert_eq!(claims.role, "ROLE_ADMIN");
        assert_eq!(claims.exp, Some(4_000_000_000));
    }

    #[test]
    fn test_role_defaults_to_user() {
        let credential = encode(&serde_json::json!({ "sub": "u1", "exp": 1 }));
        let claims = decode_credential(&credential).unwrap();
        assert_eq!(claims.role, DEFAULT_ROLE);
    }

    #[test]
    fn test_role_falls_back_to_first_authority() {
        let credential = encode(&serde_json::json!({
            "sub": "u1",
            "authorities": ["ROLE_PI", "ROLE_USER"],
        }));
        let claims = decode_credential(&credential).unwrap();
        assert_eq!(claims.role, "ROLE_PI");
    }

    #[test]
    fn test_object_shaped_authorities() {
        let credential = encode(&serde_json::json!({
            "sub": "u1",
            "authorities": [{ "authority": "ROLE_MEMBER" }],
        }));
        let claims = decode_credential(&credential).unwrap();
        assert_eq!(claims.role, "ROLE_MEMBER");
    }

    #[test]
    fn test_username_falls_back_to_subject() {
        let credential = encode(&serde_json::json!({ "userId": 42 }));
        let claims = decode_credential(&credential).unwrap();
        assert_eq!(claims.subject, "42");
        assert_eq!(claims.username, "42");
        assert_eq!(claims.email, "");
    }

    #[test]
    fn test_rejects_single_segment() {
        let err = decode_credential("justonesegment").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_rejects_non_base64_payload() {
        let err = decode_credential("header.!!!not-base64!!!.sig").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_rejects_non_json_payload() {
        let body = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("not json");
        let err = decode_credential(&format!("header.{body}.sig")).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_expiry_boundary_is_strict() {
        let claims = Claims {
            subject: "u1".into(),
            username: "u1".into(),
            email: String::new(),
            role: DEFAULT_ROLE.into(),
            exp: Some(1_000),
        };
        // exp == floor(now / 1000) is already expired.
        assert!(!claims.is_unexpired_at(1_000_000));
        assert!(claims.is_unexpired_at(999_999));
    }

    #[test]
    fn test_missing_exp_is_expired() {
        let claims = Claims {
            subject: "u1".into(),
            username: "u1".into(),
            email: String::new(),
            role: DEFAULT_ROLE.into(),
            exp: None,
        };
        assert!(!claims.is_unexpired_at(0));
    }

    #[test]
    fn test_accepts_padded_base64() {
        let payload = serde_json::json!({ "sub": "u1" }).to_string();
        let body = base64::engine::general_purpose::URL_SAFE.encode(payload);
        let claims = decode_credential(&format!("h.{body}")).unwrap();
        assert_eq!(claims.subject, "u1");
    }
}
