//! HTTP client implementation for the Prosper API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{
    AccountsService, ListingsService, LoansService, NotesService, OrdersService, PaymentsService,
};
use crate::auth::AuthTokenManager;
use crate::config::Config;
use crate::decode::ModelDeserializer;
use crate::schema::Record;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::rate_limit::RateLimiter;

/// The main client for interacting with the Prosper API.
///
/// This client provides access to all API services through method calls
/// that return service structs. Every call is rate limited, authenticated
/// with a bearer token from the [`AuthTokenManager`], retried on transient
/// failures, and decoded into typed records by the client's
/// [`ModelDeserializer`].
///
/// The client is cheap to clone; clones share the token manager, rate
/// limiter and deserializer.
///
/// # Example
///
/// ```no_run
/// use prosper_rs::{Config, ProsperClient};
///
/// # async fn example() -> prosper_rs::Result<()> {
/// let client = ProsperClient::new(Config::load()?)?;
///
/// let account = client.accounts().get().await?;
/// println!("cash: {:?}", account.available_cash_balance);
/// # Ok(())
/// # }
/// ```
pub struct ProsperClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) auth: Arc<AuthTokenManager>,
    pub(crate) deserializer: ModelDeserializer,
    pub(crate) limiter: RateLimiter,
    pub(crate) config: ClientConfig,
}

impl ProsperClient {
    /// Create a client from file configuration with default transport
    /// settings.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_config(config, ClientConfig::default())
    }

    /// Create a client from file configuration and transport settings.
    pub fn with_config(config: Config, client_config: ClientConfig) -> Result<Self> {
        let auth = AuthTokenManager::new(&config)?.with_token_url(client_config.token_url.clone());
        Self::with_auth(config, auth, client_config)
    }

    /// Create a client with a preconfigured token manager.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UrlParse`] if the base URL or the token manager's
    /// token URL is malformed.
    pub fn with_auth(
        config: Config,
        auth: AuthTokenManager,
        client_config: ClientConfig,
    ) -> Result<Self> {
        url::Url::parse(&client_config.base_url)?;
        url::Url::parse(auth.token_url())?;

        let http = reqwest::Client::builder()
            .timeout(client_config.timeout)
            .user_agent(&client_config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                auth: Arc::new(auth),
                deserializer: ModelDeserializer::new(config.decode_config()),
                limiter: RateLimiter::new(client_config.rate_limit),
                config: client_config,
            }),
        })
    }

    /// Create a client from the default config file, with
    /// `PROSPER_API_*` environment overrides applied.
    pub fn from_default_config() -> Result<Self> {
        Self::new(Config::load()?.with_env_overrides()?)
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the listings search service.
    pub fn listings(&self) -> ListingsService {
        ListingsService::new(self.inner.clone())
    }

    /// Get the notes service.
    pub fn notes(&self) -> NotesService {
        NotesService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the loans service.
    pub fn loans(&self) -> LoansService {
        LoansService::new(self.inner.clone())
    }

    /// Get the loan payments service.
    pub fn payments(&self) -> PaymentsService {
        PaymentsService::new(self.inner.clone())
    }

    /// The deserializer responses are decoded with.
    pub fn deserializer(&self) -> &ModelDeserializer {
        &self.inner.deserializer
    }

    /// The token manager requests are authenticated with.
    pub fn auth(&self) -> &AuthTokenManager {
        &self.inner.auth
    }

    /// The transport settings in use.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: Record>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, |http, url| http.get(url)).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: Record, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.send(Method::GET, path, |http, url| http.get(url).query(query))
            .await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: Record, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send(Method::POST, path, |http, url| http.post(url).json(body))
            .await
    }

    async fn send<T, F>(&self, method: Method, path: &str, build: F) -> Result<T>
    where
        T: Record,
        F: Fn(&reqwest::Client, &str) -> RequestBuilder,
    {
        let url = self.url(path);
        let retry = &self.config.retry;
        let mut attempt = 0;

        loop {
            self.limiter.acquire().await;
            let token = self.auth.get_token().await.ok_or_else(|| {
                Error::Authentication("No auth token available".to_string())
            })?;

            debug!(%method, %url, attempt, "Sending request");
            let result = build(&self.http, &url)
                .header(AUTHORIZATION, format!("bearer {}", token))
                .header(ACCEPT, "application/json")
                .send()
                .await;

            let response = match result {
                Ok(response) => response,
                Err(e) if attempt < retry.max_retries => {
                    let delay = retry.backoff_for_attempt(attempt);
                    warn!(%method, %url, attempt, delay_ms = delay.as_millis() as u64, error = %e, "Transport error; retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let status = response.status();
            if status.is_success() {
                let body = response.text().await?;
                return self.deserializer.deserialize_as(&body);
            }

            if attempt < retry.max_retries && retry.should_retry_status(status.as_u16()) {
                let mut delay = retry.backoff_for_attempt(attempt);
                if let Some(secs) = retry_after_secs(&response) {
                    delay = delay.max(Duration::from_secs(secs));
                }
                warn!(%method, %url, status = status.as_u16(), attempt, delay_ms = delay.as_millis() as u64, "Request failed; retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            return Err(self.error_for(response).await);
        }
    }

    async fn error_for(&self, response: Response) -> Error {
        let status = response.status().as_u16();
        let retry_after = retry_after_secs(&response);
        let text = response.text().await.unwrap_or_default();

        if status == 429 {
            return Error::RateLimited {
                retry_after_secs: retry_after.unwrap_or(1),
            };
        }
        if status == 401 {
            self.auth.invalidate().await;
        }

        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Error::from_api_response(status, body)
    }
}

fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

impl Clone for ProsperClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for ProsperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProsperClient")
            .field("config", &self.inner.config)
            .field("auth", &self.inner.auth)
            .finish()
    }
}
