//! The OAuth token and its on-disk cache.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Seconds subtracted from `expires_in` so a token is renewed shortly
/// before the server would reject it.
pub const EXPIRY_SKEW_SECS: i64 = 10;

/// A token grant, as returned by the token endpoint and persisted to the
/// token cache.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Bearer token for API calls
    pub access_token: String,
    /// Token for the refresh grant
    pub refresh_token: String,
    /// Token type, normally `bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds at the time of the grant
    pub expires_in: i64,
    /// Unix time (seconds) after which the token is treated as expired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<f64>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl AuthToken {
    /// Returns `true` if the token is expired at `now`.
    ///
    /// A token expiring exactly at `now` is expired, as is a token with no
    /// recorded expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= unix_seconds(now),
            None => true,
        }
    }

    /// Record the expiry of a fresh grant received at `now`.
    pub fn stamp_expiry(&mut self, now: DateTime<Utc>) {
        self.expires_at = Some(unix_seconds(now) + (self.expires_in - EXPIRY_SKEW_SECS) as f64);
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

fn unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp() as f64 + f64::from(time.timestamp_subsec_micros()) / 1_000_000.0
}

/// JSON file holding the last token grant.
///
/// Writes are last-writer-wins; no locking is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    /// A cache at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The cache file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached token. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<AuthToken>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Write `token`, creating parent directories as needed.
    pub fn store(&self, token: &AuthToken) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(token)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn token() -> AuthToken {
        AuthToken {
            access_token: "access_token_value".to_string(),
            refresh_token: "refresh_token_value".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3599,
            expires_at: None,
        }
    }

    fn frozen() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, 7, 12, 0, 1).unwrap()
    }

    #[test]
    fn test_stamp_expiry() {
        let mut token = token();
        token.stamp_expiry(frozen());
        assert_eq!(token.expires_at, Some(1696683590.0));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let mut token = token();
        token.expires_at = Some(frozen().timestamp() as f64);
        assert!(token.is_expired_at(frozen()));
        token.expires_at = Some(frozen().timestamp() as f64 + 1.0);
        assert!(!token.is_expired_at(frozen()));
    }

    #[test]
    fn test_missing_expiry_is_expired() {
        assert!(token().is_expired_at(frozen()));
    }

    #[test]
    fn test_cache_round_trip_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("nested/dir/token-cache"));
        assert_eq!(cache.load().unwrap(), None);

        let mut token = token();
        token.stamp_expiry(frozen());
        cache.store(&token).unwrap();

        assert_eq!(cache.load().unwrap(), Some(token));
    }

    #[test]
    fn test_cache_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("token-cache"));
        let mut token = token();
        token.stamp_expiry(frozen());
        cache.store(&token).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(cache.path()).unwrap()).unwrap();
        assert_eq!(raw["access_token"], "access_token_value");
        assert_eq!(raw["expires_in"], 3599);
        assert_eq!(raw["expires_at"].as_f64(), Some(1696683590.0));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let debug = format!("{:?}", token());
        assert!(!debug.contains("access_token_value"));
        assert!(!debug.contains("refresh_token_value"));
    }
}
