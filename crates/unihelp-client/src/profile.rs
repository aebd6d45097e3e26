//! Member service: point balance and withdrawal

use serde::{Deserialize, Serialize};

use crate::client::UniHelpClient;
use crate::error::Result;

/// Point balance as reported by the backend
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PointBalance {
    pub point: u64,
}

#[derive(Debug, Serialize)]
struct WithdrawPointBody {
    point: u64,
}

impl UniHelpClient {
    /// Fetch the viewer's current point balance
    pub async fn point_balance(&self) -> Result<PointBalance> {
        self.get_json("/api/member/point").await
    }

    /// Withdraw points from the viewer's balance
    pub async fn withdraw_point(&self, point: u64) -> Result<()> {
        self.post_json_empty("/api/member/point/withdraw", &WithdrawPointBody { point })
            .await
    }
}
