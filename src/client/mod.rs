//! HTTP client and service layer for the Prosper API.
//!
//! This module provides the main entry point [`ProsperClient`] for
//! interacting with the Prosper API.
//!
//! # Example
//!
//! ```no_run
//! use prosper_rs::{ClientConfig, Config, ProsperClient, RetryConfig};
//!
//! # async fn example() -> prosper_rs::Result<()> {
//! let client = ProsperClient::with_config(
//!     Config::load()?,
//!     ClientConfig::default().with_retry(RetryConfig::default().with_max_retries(3)),
//! )?;
//!
//! let account = client.accounts().get().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
mod rate_limit;

pub use config::{ClientConfig, RateLimitConfig, RetryConfig, DEFAULT_BASE_URL};
pub use http::ProsperClient;
pub use paginated::{Page, PaginatedStream, DEFAULT_PAGE_SIZE};
pub use rate_limit::RateLimiter;
pub(crate) use http::ClientInner;
