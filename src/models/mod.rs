//! Data models for the Prosper API.
//!
//! Response records are declared with [`define_record!`](crate::define_record)
//! so the deserializer can match incoming JSON objects against their
//! declared fields. Models are organized by domain:
//!
//! - [`enums`] - Wire enumerations (ratings, income ranges, statuses)
//! - [`account`] - Account summary
//! - [`listing`] - Listings returned by search
//! - [`note`] - Owned notes
//! - [`order`] - Orders and bids
//! - [`loan`] - Whole loans
//! - [`payment`] - Loan payment transactions
//! - [`envelope`] - Paged list responses
//! - [`requests`] - Query parameters for list and search endpoints

pub mod enums;
pub mod account;
pub mod listing;
pub mod note;
pub mod order;
pub mod loan;
pub mod payment;
pub mod envelope;
pub mod requests;

pub use enums::*;
pub use account::*;
pub use listing::*;
pub use note::*;
pub use order::*;
pub use loan::*;
pub use payment::*;
pub use envelope::*;
pub use requests::*;
