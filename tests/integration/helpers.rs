//! Shared helpers for integration tests.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;

/// Builds a credential whose payload segment is the given claims object.
/// The header and signature segments are opaque filler; the client never
/// inspects them.
pub fn credential(payload: serde_json::Value) -> String {
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("eyJhbGciOiJIUzI1NiJ9.{body}.c2lnbmF0dXJl")
}

/// Current instant in milliseconds since the epoch.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// An `exp` claim value a comfortable hour in the future.
pub fn exp_in_an_hour() -> i64 {
    Utc::now().timestamp() + 3600
}
