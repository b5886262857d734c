//! Loan payments service.

use std::sync::Arc;

use crate::client::paginated::paginate;
use crate::client::{ClientInner, PaginatedStream};
use crate::models::{ListPaymentsRequest, ListPaymentsResponse, PagedRequest, Payment};
use crate::Result;

const PAYMENTS_PATH: &str = "/loans/payments";

/// Service for payment transactions on loans.
///
/// # Example
///
/// ```no_run
/// use prosper_rs::models::ListPaymentsRequest;
///
/// # async fn example(client: prosper_rs::ProsperClient) -> prosper_rs::Result<()> {
/// let request = ListPaymentsRequest {
///     loan_number: vec![2300367],
///     ..Default::default()
/// };
/// let page = client.payments().list(&request).await?;
/// println!("{} payments", page.total_count);
/// # Ok(())
/// # }
/// ```
pub struct PaymentsService {
    inner: Arc<ClientInner>,
}

impl PaymentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List one page of payments for the requested loans.
    pub async fn list(&self, request: &ListPaymentsRequest) -> Result<ListPaymentsResponse> {
        self.inner
            .get_with_query(PAYMENTS_PATH, &request.to_query())
            .await
    }

    /// Stream every payment for the requested loans, `page_size` at a time.
    pub fn list_stream(
        &self,
        request: ListPaymentsRequest,
        page_size: u32,
    ) -> PaginatedStream<Payment> {
        paginate::<ListPaymentsResponse, _>(self.inner.clone(), PAYMENTS_PATH, request, page_size)
    }
}
