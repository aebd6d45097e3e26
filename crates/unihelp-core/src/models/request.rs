use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a request, assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// WGS-84 position in degrees
///
/// Immutable value type. No bounds validation is performed here; out-of-range
/// values propagate into the distance computation as garbage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Kind of help a request is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestCategory {
    Info,
    Help,
}

/// Processing state of a request
///
/// Strictly forward-only: `NotStarted` → `InProgress` → `Completed`. The
/// backend is the system of record; the client never advances this locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// A request record as returned by the Request Directory service
///
/// Role flags (`removable`, `is_worker`, `is_funder`) arrive pre-computed per
/// viewer from the backend. `current_participants` and `processing_status`
/// are server-authoritative; after any mutating action the caller refetches
/// rather than patching a record in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    pub id: RequestId,

    /// College the author belongs to
    pub college: String,

    /// Display name of the author
    pub writer: String,

    pub title: String,

    pub content: String,

    pub category: RequestCategory,

    /// Whether multiple funders may pool the reward. Set at creation,
    /// immutable afterward.
    pub allow_group_funding: bool,

    pub processing_status: ProcessingStatus,

    #[serde(flatten)]
    pub coordinate: Coordinate,

    /// Total pooled reward in currency units, not a per-person amount
    pub reward: u64,

    pub created_at: DateTime<Utc>,

    /// True iff the viewer is the owner of this request
    pub removable: bool,

    /// Number of funders currently in the pool, at least 1
    pub current_participants: u32,

    /// True iff the viewer is the assigned worker
    #[serde(default)]
    pub is_worker: bool,

    /// True iff the viewer has joined the funding pool
    #[serde(default)]
    pub is_funder: bool,

    /// Completion report, present once the worker has submitted one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_content: Option<String>,
}

impl RequestRecord {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// Payload for creating a new request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub title: String,
    pub content: String,
    pub category: RequestCategory,
    pub allow_group_funding: bool,
    pub latitude: f64,
    pub longitude: f64,
    /// Minutes until the request expires (wire name kept from the backend)
    #[serde(rename = "ramaningTime")]
    pub remaining_time: u32,
    pub reward: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 17,
            "college": "Engineering",
            "writer": "minji",
            "title": "Need a printer",
            "content": "Anyone near the library with a working printer?",
            "category": "HELP",
            "allowGroupFunding": true,
            "processingStatus": "NOT_STARTED",
            "latitude": 37.5665,
            "longitude": 126.978,
            "reward": 3000,
            "createdAt": "2025-03-14T09:30:00Z",
            "removable": false,
            "currentParticipants": 2
        }"#
    }

    #[test]
    fn test_deserialize_record_from_backend_json() {
        let record: RequestRecord = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(record.id, RequestId(17));
        assert_eq!(record.category, RequestCategory::Help);
        assert_eq!(record.processing_status, ProcessingStatus::NotStarted);
        assert_eq!(record.coordinate.latitude, 37.5665);
        assert_eq!(record.coordinate.longitude, 126.978);
        assert_eq!(record.current_participants, 2);
        // Role flags the backend omits default to false
        assert!(!record.is_worker);
        assert!(!record.is_funder);
        assert!(record.finish_content.is_none());
    }

    #[test]
    fn test_serialize_create_request_uses_backend_field_names() {
        let payload = CreateRequest {
            title: "Lost card".to_string(),
            content: "Student card lost near the cafeteria".to_string(),
            category: RequestCategory::Info,
            allow_group_funding: false,
            latitude: 37.55,
            longitude: 126.97,
            remaining_time: 120,
            reward: 1000,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "INFO");
        assert_eq!(json["allowGroupFunding"], false);
        // The backend's misspelled field name is part of the wire contract
        assert_eq!(json["ramaningTime"], 120);
    }
}
