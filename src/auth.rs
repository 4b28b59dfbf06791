//! Authentication and session management.
//!
//! Handles the owner's session with HMAC-signed cookies. Authentication is
//! optional: with no `NOTES_PASSWORD` configured the board is open and every
//! request may edit.

use crate::config::Config;
use axum_extra::extract::CookieJar;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Session cookie name
pub const SESSION_COOKIE: &str = "notes_board_session";

/// Session time-to-live in hours
pub const SESSION_TTL_HOURS: i64 = 24;

// ============================================================================
// Session Structure
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Session {
    created: i64,
    expires: i64,
    nonce: String,
}

// ============================================================================
// Authentication Functions
// ============================================================================

/// Create a new session token signed with `secret`.
pub fn create_session(secret: &[u8]) -> Option<String> {
    let now = Utc::now().timestamp();
    let nonce: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();

    sign_session(
        &Session {
            created: now,
            expires: now + (SESSION_TTL_HOURS * 3600),
            nonce,
        },
        secret,
    )
}

fn sign_session(session: &Session, secret: &[u8]) -> Option<String> {
    let session_json = serde_json::to_string(session).ok()?;

    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(session_json.as_bytes());
    let signature = hex_encode(mac.finalize().into_bytes().as_slice());

    Some(format!("{}.{}", base64_encode(&session_json), signature))
}

/// Verify a session token
pub fn verify_session(token: &str, secret: &[u8]) -> bool {
    let Some((payload, signature)) = token.split_once('.') else {
        return false;
    };

    let session_json = match base64_decode(payload) {
        Some(s) => s,
        None => return false,
    };

    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(session_json.as_bytes());
    let expected_sig = hex_encode(mac.finalize().into_bytes().as_slice());

    if !constant_time_eq(signature, &expected_sig) {
        return false;
    }

    let session: Session = match serde_json::from_str(&session_json) {
        Ok(s) => s,
        Err(_) => return false,
    };

    Utc::now().timestamp() < session.expires
}

/// Whether the request may change notes. Always true when auth is disabled.
pub fn can_edit(jar: &CookieJar, config: &Config) -> bool {
    let Some(secret) = config.secret() else {
        return true;
    };

    match jar.get(SESSION_COOKIE) {
        Some(cookie) => verify_session(cookie.value(), secret),
        None => false,
    }
}

/// Check a submitted password against the configured one.
pub fn password_matches(input: &str, config: &Config) -> bool {
    match config.password.as_deref() {
        Some(expected) => constant_time_eq(input, expected),
        None => false,
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    a.len() == b.len() && a.ct_eq(b).unwrap_u8() == 1
}

// ============================================================================
// Encoding Helpers
// ============================================================================

/// Encode a string as base64
pub fn base64_encode(s: &str) -> String {
    STANDARD.encode(s.as_bytes())
}

/// Decode a base64 string
pub fn base64_decode(s: &str) -> Option<String> {
    let bytes = STANDARD.decode(s).ok()?;
    String::from_utf8(bytes).ok()
}

/// Encode bytes as hexadecimal
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
