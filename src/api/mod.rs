//! API service modules for Prosper endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the Prosper API.

mod accounts;
mod listings;
mod loans;
mod notes;
mod orders;
mod payments;

pub use accounts::AccountsService;
pub use listings::ListingsService;
pub use loans::LoansService;
pub use notes::NotesService;
pub use orders::OrdersService;
pub use payments::PaymentsService;
