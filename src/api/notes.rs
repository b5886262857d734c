//! Notes service.

use std::sync::Arc;

use crate::client::paginated::paginate;
use crate::client::{ClientInner, PaginatedStream};
use crate::models::{ListNotesRequest, ListNotesResponse, Note, PagedRequest};
use crate::Result;

const NOTES_PATH: &str = "/v1/notes/";

/// Service for the notes owned by the account.
pub struct NotesService {
    inner: Arc<ClientInner>,
}

impl NotesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List one page of notes.
    pub async fn list(&self, request: &ListNotesRequest) -> Result<ListNotesResponse> {
        self.inner.get_with_query(NOTES_PATH, &request.to_query()).await
    }

    /// Stream every note, `page_size` at a time.
    pub fn list_stream(&self, request: ListNotesRequest, page_size: u32) -> PaginatedStream<Note> {
        paginate::<ListNotesResponse, _>(self.inner.clone(), NOTES_PATH, request, page_size)
    }
}
