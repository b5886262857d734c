//! List response envelopes.
//!
//! Every list endpoint wraps its results as
//! `{"result": [...], "result_count": N, "total_count": N}`. The envelopes
//! are records like any other, so a list response materializes directly
//! into its typed envelope.

use crate::define_record;
use crate::models::{Listing, Loan, Note, Order, Payment, LISTING, LOAN, NOTE, ORDER, PAYMENT};
use crate::schema::Record;

/// A page of results from a list endpoint.
pub trait ListEnvelope: Record + Send + 'static {
    /// The listed record type.
    type Item: Send + Unpin + 'static;

    /// Number of results on this page.
    fn result_count(&self) -> i64;

    /// Number of results across all pages.
    fn total_count(&self) -> i64;

    /// Consume the page, returning its results.
    fn into_items(self) -> Vec<Self::Item>;
}

macro_rules! list_envelope {
    ($(#[$meta:meta])* $name:ident as $schema:ident, $item:ty, $item_schema:ident) => {
        define_record! {
            $(#[$meta])*
            pub struct $name as $schema {
                /// Results on this page
                result: Vec<$item> => [Record($item_schema)],
                /// Number of results on this page
                result_count: i64 => Integer,
                /// Number of results across all pages
                total_count: i64 => Integer,
            }
        }

        impl ListEnvelope for $name {
            type Item = $item;

            fn result_count(&self) -> i64 {
                self.result_count
            }

            fn total_count(&self) -> i64 {
                self.total_count
            }

            fn into_items(self) -> Vec<$item> {
                self.result
            }
        }
    };
}

list_envelope!(
    /// A page of listing search results.
    SearchListingsResponse as SEARCH_LISTINGS_RESPONSE, Listing, LISTING
);
list_envelope!(
    /// A page of notes.
    ListNotesResponse as LIST_NOTES_RESPONSE, Note, NOTE
);
list_envelope!(
    /// A page of orders.
    ListOrdersResponse as LIST_ORDERS_RESPONSE, Order, ORDER
);
list_envelope!(
    /// A page of loans.
    ListLoansResponse as LIST_LOANS_RESPONSE, Loan, LOAN
);
list_envelope!(
    /// A page of loan payments.
    ListPaymentsResponse as LIST_PAYMENTS_RESPONSE, Payment, PAYMENT
);
