//! Authentication for the Prosper API.
//!
//! Prosper uses the OAuth2 password grant. [`AuthTokenManager`] performs
//! the grant with the configured client id and username, persists the
//! resulting token to a [`TokenCache`], and renews it with the refresh
//! grant once expired.
//!
//! The client secret and password may come from the config file, or be
//! resolved from a [`SecretStore`] (the platform credential store when the
//! `keyring` feature is enabled):
//!
//! ```no_run
//! use std::sync::Arc;
//! use prosper_rs::auth::{AuthTokenManager, MemorySecretStore, SERVICE_NAME};
//! use prosper_rs::Config;
//!
//! # fn example() -> prosper_rs::Result<()> {
//! let config = Config::load()?;
//! let store = MemorySecretStore::new()
//!     .with(SERVICE_NAME, config.client_id(), "client-secret")
//!     .with(SERVICE_NAME, config.username(), "password");
//! let auth = AuthTokenManager::with_secret_store(&config, Arc::new(store))?;
//! # Ok(())
//! # }
//! ```

mod manager;
mod secrets;
mod token;

pub use manager::{AuthTokenManager, Credentials, DEFAULT_TOKEN_URL};
#[cfg(feature = "keyring")]
pub use secrets::KeyringSecretStore;
pub use secrets::{default_secret_store, MemorySecretStore, NoSecretStore, SecretStore, SERVICE_NAME};
pub use token::{AuthToken, TokenCache, EXPIRY_SKEW_SECS};
