//! Accounts service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::Account;
use crate::Result;

/// Service for the account summary.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: prosper_rs::ProsperClient) -> prosper_rs::Result<()> {
/// let account = client.accounts().get().await?;
/// println!("Total value: {:?}", account.total_account_value);
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get cash balances and investment totals for the account.
    pub async fn get(&self) -> Result<Account> {
        self.inner.get("/v1/accounts/prosper/").await
    }
}
