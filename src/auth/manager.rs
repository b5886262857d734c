//! OAuth2 password-grant token management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::secrets::{default_secret_store, SecretStore, SERVICE_NAME};
use super::token::{AuthToken, TokenCache};
use crate::config::{Config, CLIENT_SECRET, PASSWORD};
use crate::{Error, Result};

/// Default OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://api.prosper.com/v1/security/oauth/token";

/// Credentials for the password grant.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Build credentials directly.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Resolve credentials from configuration, falling back to `store` for
    /// the client secret and password.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if a secret is in neither
    /// place.
    pub fn resolve(config: &Config, store: &dyn SecretStore) -> Result<Self> {
        if config.client_secret().is_some() || config.password().is_some() {
            warn!(
                "Providing secrets via config files or the environment is not secure; \
                 prefer the platform credential store"
            );
        }

        let client_id = config.client_id().to_string();
        let username = config.username().to_string();
        let client_secret = secret(config.client_secret(), store, &client_id, CLIENT_SECRET)?;
        let password = secret(config.password(), store, &username, PASSWORD)?;

        Ok(Self {
            client_id,
            client_secret,
            username,
            password,
        })
    }

    /// The OAuth client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The account username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

fn secret(
    configured: Option<&str>,
    store: &dyn SecretStore,
    account: &str,
    field: &'static str,
) -> Result<SecretString> {
    if let Some(value) = configured {
        return Ok(SecretString::from(value.to_string()));
    }
    store
        .get(SERVICE_NAME, account)?
        .map(SecretString::from)
        .ok_or(Error::MissingCredentials { field })
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Obtains, caches and renews bearer tokens.
///
/// The last grant is persisted to the token cache so a new process can
/// reuse it. A cached token is adopted at construction without checking
/// its expiry; that happens lazily in [`get_token`](Self::get_token).
///
/// Token renewal is serialized internally, so a manager can be shared
/// between tasks.
///
/// # Example
///
/// ```no_run
/// use prosper_rs::{AuthTokenManager, Config};
///
/// # async fn example() -> prosper_rs::Result<()> {
/// let config = Config::load()?;
/// let auth = AuthTokenManager::new(&config)?;
/// if let Some(token) = auth.get_token().await {
///     println!("authenticated ({} chars)", token.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct AuthTokenManager {
    credentials: Credentials,
    cache: TokenCache,
    token_url: String,
    http: reqwest::Client,
    clock: fn() -> DateTime<Utc>,
    token: Mutex<Option<AuthToken>>,
}

impl AuthTokenManager {
    /// Create a manager using the platform credential store for secrets
    /// missing from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_secret_store(config, default_secret_store())
    }

    /// Create a manager resolving missing secrets from `store`.
    pub fn with_secret_store(config: &Config, store: Arc<dyn SecretStore>) -> Result<Self> {
        let credentials = Credentials::resolve(config, store.as_ref())?;
        Ok(Self::from_credentials(credentials, TokenCache::new(config.token_cache_path())))
    }

    /// Create a manager from explicit credentials and cache.
    pub fn from_credentials(credentials: Credentials, cache: TokenCache) -> Self {
        let token = match cache.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(path = %cache.path().display(), error = %e, "Ignoring unreadable token cache");
                None
            }
        };

        Self {
            credentials,
            cache,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            http: reqwest::Client::new(),
            clock: Utc::now,
            token: Mutex::new(token),
        }
    }

    /// Use a different token endpoint.
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Use a preconfigured HTTP client for token requests.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Use a different time source for expiry checks.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// The token endpoint in use.
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// The credentials in use.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get a valid access token, authenticating or refreshing as needed.
    ///
    /// An expired token is refreshed; if the refresh fails, full
    /// authentication is performed. Returns `None` if no token could be
    /// obtained. The failure is logged, and callers should stop making
    /// authenticated calls.
    pub async fn get_token(&self) -> Option<String> {
        let mut slot = self.token.lock().await;

        let outcome = match slot.as_ref() {
            None => {
                info!("No cached auth token found; performing initial authentication");
                self.initial_grant(&mut slot).await
            }
            Some(token) if token.is_expired_at((self.clock)()) => {
                info!("Cached auth token is expired; attempting to refresh it");
                match self.refresh_grant(&mut slot).await {
                    Ok(()) => Ok(()),
                    Err(e) => {
                        info!("Failed to refresh auth token; performing full authentication");
                        debug!(error = %e, "Refresh auth token failure");
                        self.initial_grant(&mut slot).await
                    }
                }
            }
            Some(_) => Ok(()),
        };

        match outcome {
            Ok(()) => slot.as_ref().map(|token| token.access_token.clone()),
            Err(e) => {
                error!(error = %e, "Failed to authenticate");
                None
            }
        }
    }

    /// Perform the password grant unconditionally.
    pub async fn initial_auth(&self) -> Result<()> {
        let mut slot = self.token.lock().await;
        self.initial_grant(&mut slot).await
    }

    /// Perform the refresh grant with the current token.
    pub async fn refresh_auth(&self) -> Result<()> {
        let mut slot = self.token.lock().await;
        self.refresh_grant(&mut slot).await
    }

    /// The token currently held, if any.
    pub async fn current_token(&self) -> Option<AuthToken> {
        self.token.lock().await.clone()
    }

    /// Drop the in-memory token so the next call authenticates again.
    ///
    /// The token cache file is left untouched.
    pub async fn invalidate(&self) {
        *self.token.lock().await = None;
    }

    async fn initial_grant(&self, slot: &mut Option<AuthToken>) -> Result<()> {
        let form = [
            ("grant_type", "password"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.expose_secret()),
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.expose_secret()),
        ];
        let token = self.request_token(&form).await?;
        self.adopt(slot, token);
        Ok(())
    }

    async fn refresh_grant(&self, slot: &mut Option<AuthToken>) -> Result<()> {
        let refresh_token = slot
            .as_ref()
            .map(|token| token.refresh_token.clone())
            .ok_or_else(|| Error::Authentication("No token to refresh".to_string()))?;
        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.expose_secret()),
            ("refresh_token", refresh_token.as_str()),
        ];
        let token = self.request_token(&form).await?;
        self.adopt(slot, token);
        Ok(())
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<AuthToken> {
        let response = self
            .http
            .post(&self.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "Token request failed ({}): {}",
                status.as_u16(),
                body
            )));
        }

        let mut token: AuthToken = response.json().await?;
        token.stamp_expiry((self.clock)());
        debug!(expires_at = ?token.expires_at, "Set token expiry");
        Ok(token)
    }

    fn adopt(&self, slot: &mut Option<AuthToken>, token: AuthToken) {
        if let Err(e) = self.cache.store(&token) {
            warn!(path = %self.cache.path().display(), error = %e, "Failed to write token cache");
        }
        *slot = Some(token);
    }
}

impl std::fmt::Debug for AuthTokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokenManager")
            .field("credentials", &self.credentials)
            .field("cache", &self.cache)
            .field("token_url", &self.token_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
