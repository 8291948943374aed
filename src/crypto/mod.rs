//! Request signing for the SlideShare API.
//!
//! Every call carries three extra parameters:
//! - `api_key`: the key issued to the application
//! - `ts`: the current Unix timestamp, in seconds
//! - `hash`: SHA-1 of the shared secret followed by `ts`, hex encoded

use sha1::{Digest, Sha1};
use tracing::debug;

/// Current Unix timestamp in seconds.
pub fn timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Compute SHA-1 of a string and return it as a lower-case hex string.
pub fn sha1_hex(data: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the request hash for a given shared secret and timestamp.
pub fn sign(shared_secret: &str, ts: i64) -> String {
    sha1_hex(&format!("{}{}", shared_secret, ts))
}

/// The authentication triple appended to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthParams {
    /// Application key.
    pub api_key: String,
    /// Unix timestamp the hash was computed for.
    pub ts: i64,
    /// Hex SHA-1 of `shared_secret + ts`.
    pub hash: String,
}

impl AuthParams {
    /// Sign a request made now.
    pub fn new(api_key: &str, shared_secret: &str) -> Self {
        Self::at(api_key, shared_secret, timestamp())
    }

    /// Sign a request for an explicit timestamp.
    pub fn at(api_key: &str, shared_secret: &str, ts: i64) -> Self {
        debug!("Signing request at ts={}", ts);
        Self {
            api_key: api_key.to_string(),
            ts,
            hash: sign(shared_secret, ts),
        }
    }

    /// Parameters in the shape they are sent on the wire.
    pub fn to_params(&self) -> [(&'static str, String); 3] {
        [
            ("api_key", self.api_key.clone()),
            ("ts", self.ts.to_string()),
            ("hash", self.hash.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_hex() {
        assert_eq!(sha1_hex(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_sign_concatenates_secret_and_timestamp() {
        assert_eq!(
            sign("bar", 1286447642),
            "03039bccd833e435274b70e9e7b0d9005cb2373f"
        );
    }

    #[test]
    fn test_auth_params() {
        let auth = AuthParams::at("foo", "bar", 1286447642);
        let params = auth.to_params();
        assert_eq!(params[0], ("api_key", "foo".to_string()));
        assert_eq!(params[1], ("ts", "1286447642".to_string()));
        assert_eq!(params[2].1.len(), 40);
    }

    #[test]
    fn test_timestamp_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(timestamp() > 1_577_836_800);
    }
}
