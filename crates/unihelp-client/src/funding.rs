//! Funding service: joining and leaving a request's reward pool
//!
//! The participant count is server-authoritative. Joining or withdrawing
//! changes it server-side only; callers refetch the record to observe the
//! new count instead of incrementing locally.

use unihelp_core::lifecycle::can_join_funding;
use unihelp_core::models::{Page, RequestId, RequestRecord};
use unihelp_core::UnihelpError;

use crate::client::UniHelpClient;
use crate::error::Result;

impl UniHelpClient {
    /// Join the funding pool of a group-fundable request
    ///
    /// Requires the fetched record so the group-funding precondition can be
    /// checked before the call.
    pub async fn participate_in_funding(&self, record: &RequestRecord) -> Result<()> {
        if !record.allow_group_funding {
            return Err(UnihelpError::GroupFundingNotAllowed { id: record.id.0 }.into());
        }
        if !can_join_funding(record) {
            return Err(UnihelpError::ActionNotAllowed {
                id: record.id.0,
                action: "join-funding",
            }
            .into());
        }
        self.post_empty(&format!("/api/funding/post/{}/participate", record.id))
            .await
    }

    /// Withdraw the viewer's participation from a funding pool
    pub async fn withdraw_funding(&self, id: RequestId) -> Result<()> {
        self.delete(&format!("/api/funding/post/{}", id)).await
    }

    /// Fetch one page of the requests the viewer is funding
    pub async fn my_fundings(&self, page: u32, size: u32) -> Result<Page<RequestRecord>> {
        self.get_json(&format!("/api/post/my/fund?page={}&size={}", page, size))
            .await
    }
}
