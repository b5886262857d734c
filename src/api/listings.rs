//! Listings search service.

use std::sync::Arc;

use crate::client::paginated::paginate;
use crate::client::{ClientInner, PaginatedStream};
use crate::models::{Listing, SearchListingsRequest, SearchListingsResponse};
use crate::Result;

const LISTINGS_PATH: &str = "/listingsvc/v2/listings/";

/// Service for searching loan listings.
///
/// # Example
///
/// ```no_run
/// use prosper_rs::models::{ProsperRating, SearchListingsRequest};
///
/// # async fn example(client: prosper_rs::ProsperClient) -> prosper_rs::Result<()> {
/// let request = SearchListingsRequest {
///     prosper_rating: vec![ProsperRating::A, ProsperRating::B],
///     limit: Some(10),
///     ..Default::default()
/// };
/// let page = client.listings().search(&request).await?;
/// for listing in &page.result {
///     println!("{} {:?}", listing.listing_number, listing.lender_yield);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ListingsService {
    inner: Arc<ClientInner>,
}

impl ListingsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Search listings. Only biddable listings are returned unless
    /// `biddable` is set to `false`.
    pub async fn search(&self, request: &SearchListingsRequest) -> Result<SearchListingsResponse> {
        self.inner
            .get_with_query(LISTINGS_PATH, &request.to_query())
            .await
    }

    /// Stream every matching listing, `page_size` at a time.
    pub fn search_stream(
        &self,
        request: SearchListingsRequest,
        page_size: u32,
    ) -> PaginatedStream<Listing> {
        paginate::<SearchListingsResponse, _>(self.inner.clone(), LISTINGS_PATH, request, page_size)
    }
}
