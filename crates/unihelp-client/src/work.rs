//! Work Assignment service: accepting, completing, and rating work
//!
//! Validation-level preconditions are enforced here before any request is
//! sent, so an empty report or out-of-range rating never costs a round-trip.

use serde::Serialize;
use unihelp_core::lifecycle::validate_rating;
use unihelp_core::models::{Page, RequestId, RequestRecord};
use unihelp_core::UnihelpError;

use crate::client::UniHelpClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteWorkBody<'a> {
    finish_content: &'a str,
}

#[derive(Debug, Serialize)]
struct RateWorkBody {
    rate: u8,
}

impl UniHelpClient {
    /// Accept a request, becoming its worker (`NOT_STARTED` → `IN_PROGRESS`)
    pub async fn accept_work(&self, id: RequestId) -> Result<()> {
        self.post_empty(&format!("/api/work/{}", id)).await
    }

    /// Submit the worker's completion report
    ///
    /// Rejects empty or whitespace-only reports locally.
    pub async fn complete_work(&self, id: RequestId, finish_content: &str) -> Result<()> {
        let trimmed = finish_content.trim();
        if trimmed.is_empty() {
            return Err(UnihelpError::EmptyCompletionReport.into());
        }
        self.post_json_empty(
            &format!("/api/work/{}/done", id),
            &CompleteWorkBody {
                finish_content: trimmed,
            },
        )
        .await
    }

    /// Rate the worker's completion report, 0 to 5 inclusive
    ///
    /// Rejects out-of-range values locally.
    pub async fn rate_work(&self, id: RequestId, rate: i64) -> Result<()> {
        let rate = validate_rating(rate)?;
        self.post_json_empty(&format!("/api/work/{}/rate", id), &RateWorkBody { rate })
            .await
    }

    /// Fetch one page of the requests the viewer is working on
    pub async fn my_works(&self, page: u32, size: u32) -> Result<Page<RequestRecord>> {
        self.get_json(&format!("/api/post/my/work?page={}&size={}", page, size))
            .await
    }
}
