//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Once};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prosper_rs::auth::{AuthTokenManager, NoSecretStore};
use prosper_rs::{ClientConfig, Config, ProsperClient, RateLimitConfig, RetryConfig};

pub const CLIENT_ID: &str = "0123456789abcdef0123456789abcdef";
pub const CLIENT_SECRET: &str = "fedcba9876543210fedcba9876543210";
pub const USERNAME: &str = "test@test.test";
pub const PASSWORD: &str = "hunter2";
pub const TOKEN_PATH: &str = "/v1/security/oauth/token";

/// 2023-10-07 12:00:01 UTC
pub const FROZEN_UNIX: f64 = 1696680001.0;

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 7, 12, 0, 1).unwrap()
}

/// A complete configuration with its token cache under `dir`.
pub fn config(dir: &Path) -> Config {
    Config::from_toml_str(&format!(
        r#"
        [credentials]
        client-id = "{CLIENT_ID}"
        client-secret = "{CLIENT_SECRET}"
        username = "{USERNAME}"
        password = "{PASSWORD}"

        [auth]
        token-cache = "{}"
        "#,
        dir.join("token-cache").display()
    ))
    .unwrap()
}

pub fn token_json(access_token: &str, refresh_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "refresh_token": refresh_token,
        "expires_in": 3599
    })
}

/// Write a token to the cache file under `dir`.
pub fn seed_cache(dir: &Path, access_token: &str, expires_at: f64) {
    let mut token = token_json(access_token, "cached_refresh_token");
    token["expires_at"] = json!(expires_at);
    std::fs::write(dir.join("token-cache"), token.to_string()).unwrap();
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

pub fn json_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

/// Answer password grants with `access_token`.
pub async fn mount_password_grant(server: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json(access_token, "refresh")))
        .mount(server)
        .await;
}

pub fn token_manager(server: &MockServer, dir: &Path) -> AuthTokenManager {
    AuthTokenManager::with_secret_store(&config(dir), Arc::new(NoSecretStore))
        .unwrap()
        .with_token_url(format!("{}{}", server.uri(), TOKEN_PATH))
        .with_clock(frozen_now)
}

pub fn client_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(server.uri())
        .with_token_url(format!("{}{}", server.uri(), TOKEN_PATH))
        .with_retry(RetryConfig::no_retry())
        .with_rate_limit(RateLimitConfig::unlimited())
        .with_timeout(Duration::from_secs(5))
}

/// A client against `server` that authenticates with `test_token`.
pub async fn client(server: &MockServer, dir: &Path) -> ProsperClient {
    init_logging();
    mount_password_grant(server, "test_token").await;
    ProsperClient::with_auth(config(dir), token_manager(server, dir), client_config(server)).unwrap()
}
