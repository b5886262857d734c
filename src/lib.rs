//! # prosper-rs
//!
//! An async Rust client for the Prosper peer-to-peer lending API.
//!
//! The crate covers the investor API: the account summary, listing
//! search, notes, orders, loans and loan payments. Its core is a
//! type-introspecting deserializer that materializes untyped JSON into
//! typed records, and an OAuth2 token manager that persists and renews
//! its tokens.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 password grant with refresh, a persistent
//!   token cache, and secrets from the platform credential store
//! - **Typed responses**: every JSON object is matched against the record
//!   types reachable from the response type, with exact decimals, parsed
//!   dates and resolved enums
//! - **Listing search**: the full set of search filters, sorting and paging
//! - **Pagination**: lazy `Stream`s over every list endpoint
//! - **Resilience**: rate limiting and exponential-backoff retries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prosper_rs::{Config, ProsperClient};
//! use prosper_rs::models::{ProsperRating, SearchListingsRequest};
//!
//! #[tokio::main]
//! async fn main() -> prosper_rs::Result<()> {
//!     // Reads ~/.config/prosper-api/config.toml
//!     let client = ProsperClient::new(Config::load()?)?;
//!
//!     let account = client.accounts().get().await?;
//!     println!("Available cash: {:?}", account.available_cash_balance);
//!
//!     let request = SearchListingsRequest {
//!         prosper_rating: vec![ProsperRating::AA, ProsperRating::A],
//!         limit: Some(10),
//!         ..Default::default()
//!     };
//!     for listing in client.listings().search(&request).await?.result {
//!         println!("{}: {:?}", listing.listing_number, listing.lender_yield);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Deserializing Without the Client
//!
//! ```rust
//! use prosper_rs::decode::{DecodeConfig, ModelDeserializer};
//! use prosper_rs::models::{ListNotesResponse, ListEnvelope};
//!
//! let serde = ModelDeserializer::new(DecodeConfig::default());
//! let page: ListNotesResponse = serde.deserialize_as(r#"{
//!     "result": [{"loan_note_id": "35659-26", "prosper_rating": "N/A"}],
//!     "result_count": 1,
//!     "total_count": 1
//! }"#).unwrap();
//! assert_eq!(page.total_count(), 1);
//! ```
//!
//! ## Streaming Every Page
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use prosper_rs::ProsperClient;
//! use prosper_rs::models::ListLoansRequest;
//!
//! # async fn example(client: ProsperClient) -> prosper_rs::Result<()> {
//! let mut loans = client.loans().list_stream(ListLoansRequest::default(), 25);
//! while let Some(loan) = loans.next().await {
//!     let loan = loan?;
//!     println!("{} {:?}", loan.loan_number, loan.principal_balance);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod models;
pub mod schema;

// Re-export primary types at crate root for convenience
pub use auth::AuthTokenManager;
pub use client::{ClientConfig, RateLimitConfig, RetryConfig, ProsperClient};
pub use config::Config;
pub use decode::{DecodeConfig, ModelDeserializer};
pub use error::{Error, Result};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

/// Prelude module for convenient imports.
///
/// ```rust
/// use prosper_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{AuthTokenManager, SecretStore};
    pub use crate::client::{ClientConfig, PaginatedStream, ProsperClient};
    pub use crate::config::Config;
    pub use crate::decode::{Amount, DateValue, DecodeConfig, EnumValue, ModelDeserializer, Timestamp};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Enums
        BidResult, BidStatus, EmploymentStatus, FicoScore, IncomeRange, ListingCategory,
        ListingStatus, Occupation, OrderStatus, ProsperRating, SortDirection,
        // Records
        Account, AmountsByRating, BidRequest, Listing, Loan, Note, Order, Payment,
        // Envelopes
        ListEnvelope, ListLoansResponse, ListNotesResponse, ListOrdersResponse,
        ListPaymentsResponse, SearchListingsResponse,
        // Requests
        Bounds, ListLoansRequest, ListNotesRequest, ListOrdersRequest, ListPaymentsRequest,
        NewOrder, SearchListingsRequest,
    };
    pub use crate::schema::{Record, WireEnum};
}
