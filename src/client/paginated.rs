//! Paginated stream for lazy iteration over API results.
//!
//! List endpoints page by `offset` and `limit` and report the total
//! number of results. [`PaginatedStream`] fetches one page at a time and
//! yields its items individually.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;

use super::ClientInner;
use crate::models::{ListEnvelope, PagedRequest};
use crate::Result;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// One fetched page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total_count: i64,
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// A stream that lazily fetches pages from a paginated API endpoint.
///
/// This stream yields individual items from each page, fetching the next
/// page when the current one is exhausted. The next page starts where the
/// last one ended, so a server that caps `limit` below the requested page
/// size is still read to the end. The stream ends once `total_count` items
/// have been fetched or a page comes back empty. An error ends the stream
/// after being yielded.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use prosper_rs::models::ListNotesRequest;
///
/// # async fn example(client: prosper_rs::ProsperClient) -> prosper_rs::Result<()> {
/// let mut notes = client.notes().list_stream(ListNotesRequest::default(), 25);
///
/// while let Some(note) = notes.next().await {
///     println!("{}", note?.loan_note_id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by offset.
    fetch_page: Box<dyn Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>,
    /// Requested items per page.
    page_size: u32,
    /// Current page of items being yielded.
    current_items: VecDeque<T>,
    /// Offset of the in-flight or next fetch, None if exhausted.
    next_offset: Option<u32>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<Page<T>>>>,
}

impl<T: Send + 'static> PaginatedStream<T> {
    /// Create a new paginated stream.
    pub fn new<F>(page_size: u32, fetch_page: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            page_size: page_size.max(1),
            current_items: VecDeque::new(),
            next_offset: Some(0),
            pending_fetch: None,
        }
    }

    /// Requested items per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn advance(&self, offset: u32, page: &Page<T>) -> Option<u32> {
        let fetched = page.items.len() as u32;
        let next = offset.saturating_add(fetched);
        if fetched == 0 || i64::from(next) >= page.total_count {
            None
        } else {
            Some(next)
        }
    }
}

impl<T> Stream for PaginatedStream<T>
where
    T: Send + Unpin + 'static,
{
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        let offset = this.next_offset.unwrap_or_default();
                        this.next_offset = this.advance(offset, &page);
                        this.current_items = page.items.into();

                        if !this.current_items.is_empty() {
                            continue;
                        }
                        return Poll::Ready(None);
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_offset = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        return Poll::Pending;
                    }
                }
            }

            if let Some(offset) = this.next_offset {
                this.pending_fetch = Some((this.fetch_page)(offset));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Stream every item of a list endpoint, `page_size` at a time.
pub(crate) fn paginate<E, R>(
    inner: Arc<ClientInner>,
    path: &'static str,
    request: R,
    page_size: u32,
) -> PaginatedStream<E::Item>
where
    E: ListEnvelope,
    R: PagedRequest,
{
    let page_size = page_size.max(1);

    PaginatedStream::new(page_size, move |offset: u32| {
        let inner = inner.clone();
        let query = request.page(offset, page_size).to_query();

        Box::pin(async move {
            let envelope: E = inner.get_with_query(path, &query).await?;
            Ok(Page {
                total_count: envelope.total_count(),
                items: envelope.into_items(),
            })
        })
    })
}
