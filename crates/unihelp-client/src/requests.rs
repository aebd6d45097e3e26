//! Request Directory service: CRUD over `/api/post`
//!
//! Pagination is server-driven; callers re-sort whatever page they are given
//! (see `unihelp-geo`) but never invent pages. After any mutating action the
//! affected record must be refetched rather than patched locally.

use unihelp_core::models::{CreateRequest, Page, RequestId, RequestRecord};

use crate::client::{ApiEnvelope, UniHelpClient};
use crate::error::Result;

impl UniHelpClient {
    /// Fetch one page of the request directory
    pub async fn list_requests(&self, page: u32, size: u32) -> Result<Page<RequestRecord>> {
        self.get_json(&format!("/api/post?page={}&size={}", page, size))
            .await
    }

    /// Fetch a single request by id
    ///
    /// This is the refetch half of the mutate-then-refetch contract: callers
    /// re-request the record here after any successful mutating action.
    pub async fn get_request(&self, id: RequestId) -> Result<RequestRecord> {
        self.get_json(&format!("/api/post/{}", id)).await
    }

    /// Create a new request, returning the server's view of it
    pub async fn create_request(&self, data: &CreateRequest) -> Result<RequestRecord> {
        let envelope: ApiEnvelope<RequestRecord> = self.post_json("/api/post", data).await?;
        Ok(envelope.data)
    }

    /// Delete a request the viewer owns
    pub async fn delete_request(&self, id: RequestId) -> Result<()> {
        self.delete(&format!("/api/post/{}", id)).await
    }

    /// Fetch one page of the viewer's own requests
    pub async fn my_requests(&self, page: u32, size: u32) -> Result<Page<RequestRecord>> {
        self.get_json(&format!("/api/post/my?page={}&size={}", page, size))
            .await
    }
}
