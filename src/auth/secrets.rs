//! Credential stores for secrets left out of the config file.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::Result;

/// Service name secrets are stored under.
pub const SERVICE_NAME: &str = "prosper-api";

/// Read access to a credential store.
///
/// Secrets are looked up by service and account. The client secret is
/// stored with the client id as its account, the password with the
/// username.
pub trait SecretStore: Send + Sync {
    /// Look up a secret. A missing entry is `Ok(None)`.
    fn get(&self, service: &str, account: &str) -> Result<Option<String>>;
}

/// A store that holds nothing.
///
/// Used when no platform credential store is available; every secret must
/// then come from configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSecretStore;

impl SecretStore for NoSecretStore {
    fn get(&self, _service: &str, _account: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// An in-process store.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    entries: RwLock<HashMap<(String, String), String>>,
}

impl MemorySecretStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a secret.
    pub fn insert(&self, service: impl Into<String>, account: impl Into<String>, secret: impl Into<String>) {
        self.entries
            .write()
            .insert((service.into(), account.into()), secret.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(self, service: impl Into<String>, account: impl Into<String>, secret: impl Into<String>) -> Self {
        self.insert(service, account, secret);
        self
    }
}

impl SecretStore for MemorySecretStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .read()
            .get(&(service.to_string(), account.to_string()))
            .cloned())
    }
}

/// The platform credential store (macOS Keychain, Windows Credential
/// Manager, Secret Service).
#[cfg(feature = "keyring")]
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringSecretStore;

#[cfg(feature = "keyring")]
impl SecretStore for KeyringSecretStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>> {
        tracing::debug!(service, account, "Retrieving secret from credential store");

        let entry = keyring::Entry::new(service, account)
            .map_err(|e| crate::Error::SecretStore(format!("Failed to open entry for {}: {}", account, e)))?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(crate::Error::SecretStore(format!(
                "Failed to retrieve secret for {}: {}",
                account, e
            ))),
        }
    }
}

/// The store used when none is given explicitly.
pub fn default_secret_store() -> std::sync::Arc<dyn SecretStore> {
    #[cfg(feature = "keyring")]
    {
        std::sync::Arc::new(KeyringSecretStore)
    }
    #[cfg(not(feature = "keyring"))]
    {
        std::sync::Arc::new(NoSecretStore)
    }
}
