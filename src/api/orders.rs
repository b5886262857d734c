//! Orders service for placing bids and listing orders.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::client::paginated::paginate;
use crate::client::{ClientInner, PaginatedStream};
use crate::models::{ListOrdersRequest, ListOrdersResponse, NewOrder, Order, PagedRequest};
use crate::Result;

const ORDERS_PATH: &str = "/v1/orders/";

/// Service for order operations.
///
/// # Example
///
/// ```no_run
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: prosper_rs::ProsperClient) -> prosper_rs::Result<()> {
/// let order = client.orders().place(11111111, dec!(25)).await?;
/// println!("Order {} is {:?}", order.order_id, order.order_status);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Bid `bid_amount` on a single listing.
    pub async fn place(&self, listing_id: i64, bid_amount: Decimal) -> Result<Order> {
        self.submit(&NewOrder::single(listing_id, bid_amount)).await
    }

    /// Submit an order of one or more bids.
    pub async fn submit(&self, order: &NewOrder) -> Result<Order> {
        self.inner.post(ORDERS_PATH, order).await
    }

    /// List one page of orders.
    pub async fn list(&self, request: &ListOrdersRequest) -> Result<ListOrdersResponse> {
        self.inner.get_with_query(ORDERS_PATH, &request.to_query()).await
    }

    /// Stream every order, `page_size` at a time.
    pub fn list_stream(&self, request: ListOrdersRequest, page_size: u32) -> PaginatedStream<Order> {
        paginate::<ListOrdersResponse, _>(self.inner.clone(), ORDERS_PATH, request, page_size)
    }
}
