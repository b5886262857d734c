//! Loans service.

use std::sync::Arc;

use crate::client::paginated::paginate;
use crate::client::{ClientInner, PaginatedStream};
use crate::models::{ListLoansRequest, ListLoansResponse, Loan, PagedRequest};
use crate::Result;

const LOANS_PATH: &str = "/v1/loans/";

/// Service for whole loans the account has invested in.
pub struct LoansService {
    inner: Arc<ClientInner>,
}

impl LoansService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List one page of loans.
    pub async fn list(&self, request: &ListLoansRequest) -> Result<ListLoansResponse> {
        self.inner.get_with_query(LOANS_PATH, &request.to_query()).await
    }

    /// Stream every loan, `page_size` at a time.
    pub fn list_stream(&self, request: ListLoansRequest, page_size: u32) -> PaginatedStream<Loan> {
        paginate::<ListLoansResponse, _>(self.inner.clone(), LOANS_PATH, request, page_size)
    }
}
