use serde::Serialize;
use unihelp_core::models::{Coordinate, RequestRecord};

use crate::distance::distance_meters;

/// A request record paired with its computed distance from the viewer
///
/// Derived, never persisted; recomputed from scratch on every ranking call so
/// repeated renders with the same inputs stay deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRequest {
    #[serde(flatten)]
    pub record: RequestRecord,
    /// Absent when ranking ran without a location fix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
}

/// Order records by ascending distance from the viewer
///
/// Without an origin the server order is preserved untouched; ranking only
/// applies once a location fix is available. The sort is stable, so records
/// at equal distances keep their server-relative order and re-invoking with
/// identical inputs yields an identical ordering.
pub fn rank_by_distance(
    origin: Option<&Coordinate>,
    records: Vec<RequestRecord>,
) -> Vec<RankedRequest> {
    let origin = match origin {
        Some(origin) => origin,
        None => {
            return records
                .into_iter()
                .map(|record| RankedRequest {
                    record,
                    distance_meters: None,
                })
                .collect();
        }
    };

    let mut ranked: Vec<RankedRequest> = records
        .into_iter()
        .map(|record| {
            let d = distance_meters(Some(origin), Some(&record.coordinate));
            RankedRequest {
                record,
                distance_meters: Some(d),
            }
        })
        .collect();

    // Distances are finite by construction, so total_cmp never reorders NaN
    ranked.sort_by(|a, b| {
        a.distance_meters
            .unwrap_or(0.0)
            .total_cmp(&b.distance_meters.unwrap_or(0.0))
    });

    ranked
}
