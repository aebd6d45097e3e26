//! Request lifecycle decision functions
//!
//! Pure predicates over already-fetched records: they decide whether an
//! action may be *offered*, never whether it will succeed server-side. The
//! actual transitions are effected by the Work/Funding API collaborators;
//! nothing here performs I/O or mutates a record.

use crate::error::{Result, UnihelpError};
use crate::models::request::{ProcessingStatus, RequestRecord};

/// Viewer's relationship to a record, resolved once from the backend flags
///
/// The backend does not guarantee the flags are mutually exclusive, so
/// resolution applies a fixed precedence: owner, then worker, then funder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerRole {
    Owner,
    Worker,
    Funder,
    Other,
}

impl ViewerRole {
    pub fn resolve(record: &RequestRecord) -> Self {
        if record.removable {
            ViewerRole::Owner
        } else if record.is_worker {
            ViewerRole::Worker
        } else if record.is_funder {
            ViewerRole::Funder
        } else {
            ViewerRole::Other
        }
    }
}

/// Which action a viewer is attempting in order to start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartIntent {
    /// Become the worker for the request
    AcceptWork,
    /// Join the group-funding pool
    JoinFunding,
}

/// Action the presentation layer may offer for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
    AcceptWork,
    JoinFunding,
    WithdrawFunding,
    SubmitCompletion,
    Rate,
}

/// The owner may edit only while the request has not been picked up
pub fn can_edit(record: &RequestRecord) -> bool {
    ViewerRole::resolve(record) == ViewerRole::Owner
        && record.processing_status == ProcessingStatus::NotStarted
}

/// The owner may delete only while the request has not been picked up
pub fn can_delete(record: &RequestRecord) -> bool {
    can_edit(record)
}

/// Any non-owner, non-involved viewer may accept an untouched request
pub fn can_accept(record: &RequestRecord) -> bool {
    ViewerRole::resolve(record) == ViewerRole::Other
        && record.processing_status == ProcessingStatus::NotStarted
}

/// Joining the pool additionally requires the request to be group-fundable
pub fn can_join_funding(record: &RequestRecord) -> bool {
    can_accept(record) && record.allow_group_funding
}

/// A funder may leave the pool only while the request has not started
///
/// Withdrawal is external to the record's own state machine: it decrements
/// participation server-side without changing `processing_status`.
pub fn can_withdraw_funding(record: &RequestRecord) -> bool {
    ViewerRole::resolve(record) == ViewerRole::Funder
        && record.processing_status == ProcessingStatus::NotStarted
}

/// Whether the given start action would move the record into `InProgress`
pub fn can_transition_to_in_progress(record: &RequestRecord, intent: StartIntent) -> bool {
    match intent {
        StartIntent::AcceptWork => can_accept(record),
        StartIntent::JoinFunding => can_join_funding(record),
    }
}

/// Whether the viewer may submit a completion report with the given text
///
/// Empty or whitespace-only reports are rejected here, before any network
/// call is attempted.
pub fn can_complete(record: &RequestRecord, viewer_is_worker: bool, report: &str) -> bool {
    record.processing_status == ProcessingStatus::InProgress
        && viewer_is_worker
        && !report.trim().is_empty()
}

/// Whether the owner may rate the worker's completion report
///
/// The status stays `InProgress` until the owner's own close-out action, so
/// rating gates on `InProgress` plus a present, non-empty report.
pub fn can_rate(record: &RequestRecord) -> bool {
    ViewerRole::resolve(record) == ViewerRole::Owner
        && record.processing_status == ProcessingStatus::InProgress
        && record
            .finish_content
            .as_deref()
            .is_some_and(|content| !content.trim().is_empty())
}

/// Validate a rating value before it goes anywhere near the backend
pub fn validate_rating(rate: i64) -> Result<u8> {
    if (0..=5).contains(&rate) {
        Ok(rate as u8)
    } else {
        Err(UnihelpError::RatingOutOfRange { rate })
    }
}

/// Each funder's share of the pooled reward
///
/// `current_participants` is at least 1 by invariant, but a misbehaving
/// server response is clamped rather than dividing by zero.
pub fn per_participant_share(record: &RequestRecord) -> f64 {
    if record.allow_group_funding {
        record.reward as f64 / record.current_participants.max(1) as f64
    } else {
        record.reward as f64
    }
}

/// Full action set the presentation layer may offer for a record
///
/// This is the role-gated action table in one place, so per-view checks
/// cannot drift out of sync with each other.
pub fn allowed_actions(record: &RequestRecord) -> Vec<Action> {
    let mut actions = Vec::new();
    match ViewerRole::resolve(record) {
        ViewerRole::Owner => {
            if can_edit(record) {
                actions.push(Action::Edit);
                actions.push(Action::Delete);
            }
            if can_rate(record) {
                actions.push(Action::Rate);
            }
        }
        ViewerRole::Worker => {
            if record.processing_status == ProcessingStatus::InProgress {
                actions.push(Action::SubmitCompletion);
            }
        }
        ViewerRole::Funder => {
            if can_withdraw_funding(record) {
                actions.push(Action::WithdrawFunding);
            }
        }
        ViewerRole::Other => {
            if can_accept(record) {
                actions.push(Action::AcceptWork);
            }
            if can_join_funding(record) {
                actions.push(Action::JoinFunding);
            }
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::{Coordinate, RequestCategory, RequestId};
    use chrono::Utc;

    fn record(status: ProcessingStatus) -> RequestRecord {
        RequestRecord {
            id: RequestId(1),
            college: "Engineering".to_string(),
            writer: "minji".to_string(),
            title: "Need notes".to_string(),
            content: "Looking for last week's lecture notes".to_string(),
            category: RequestCategory::Info,
            allow_group_funding: false,
            processing_status: status,
            coordinate: Coordinate::new(37.5665, 126.978),
            reward: 1000,
            created_at: Utc::now(),
            removable: false,
            current_participants: 1,
            is_worker: false,
            is_funder: false,
            finish_content: None,
        }
    }

    fn owned(status: ProcessingStatus) -> RequestRecord {
        RequestRecord {
            removable: true,
            ..record(status)
        }
    }

    #[test]
    fn test_role_resolution_precedence() {
        let mut r = record(ProcessingStatus::NotStarted);
        assert_eq!(ViewerRole::resolve(&r), ViewerRole::Other);

        r.is_funder = true;
        assert_eq!(ViewerRole::resolve(&r), ViewerRole::Funder);

        r.is_worker = true;
        assert_eq!(ViewerRole::resolve(&r), ViewerRole::Worker);

        r.removable = true;
        assert_eq!(ViewerRole::resolve(&r), ViewerRole::Owner);
    }

    #[test]
    fn test_owner_may_edit_and_delete_only_before_start() {
        let open = owned(ProcessingStatus::NotStarted);
        assert!(can_edit(&open));
        assert!(can_delete(&open));

        let started = owned(ProcessingStatus::InProgress);
        assert!(!can_edit(&started));
        assert!(!can_delete(&started));

        let done = owned(ProcessingStatus::Completed);
        assert!(!can_edit(&done));
        assert!(!can_delete(&done));
    }

    #[test]
    fn test_owner_cannot_accept_own_request() {
        let open = owned(ProcessingStatus::NotStarted);
        assert!(!can_accept(&open));
        assert!(!can_transition_to_in_progress(&open, StartIntent::AcceptWork));
    }

    #[test]
    fn test_accept_requires_not_started() {
        assert!(can_accept(&record(ProcessingStatus::NotStarted)));
        assert!(!can_accept(&record(ProcessingStatus::InProgress)));
        assert!(!can_accept(&record(ProcessingStatus::Completed)));
    }

    #[test]
    fn test_join_funding_requires_group_funding_flag() {
        let solo = record(ProcessingStatus::NotStarted);
        assert!(!can_join_funding(&solo));
        assert!(!can_transition_to_in_progress(&solo, StartIntent::JoinFunding));

        let pooled = RequestRecord {
            allow_group_funding: true,
            ..record(ProcessingStatus::NotStarted)
        };
        assert!(can_join_funding(&pooled));
        assert!(can_transition_to_in_progress(&pooled, StartIntent::JoinFunding));
    }

    #[test]
    fn test_funder_may_withdraw_only_before_start() {
        let funder_open = RequestRecord {
            is_funder: true,
            allow_group_funding: true,
            ..record(ProcessingStatus::NotStarted)
        };
        assert!(can_withdraw_funding(&funder_open));
        // A funder is no longer a plain viewer and may not also accept
        assert!(!can_accept(&funder_open));

        let funder_started = RequestRecord {
            is_funder: true,
            allow_group_funding: true,
            ..record(ProcessingStatus::InProgress)
        };
        assert!(!can_withdraw_funding(&funder_started));
    }

    #[test]
    fn test_complete_requires_worker_in_progress_and_text() {
        let r = record(ProcessingStatus::InProgress);
        assert!(can_complete(&r, true, "done"));
        assert!(!can_complete(&r, true, ""));
        assert!(!can_complete(&r, true, "   "));
        assert!(!can_complete(&r, false, "done"));
        assert!(!can_complete(&record(ProcessingStatus::NotStarted), true, "done"));
        assert!(!can_complete(&record(ProcessingStatus::Completed), true, "done"));
    }

    #[test]
    fn test_rate_gates_on_in_progress_report() {
        let mut r = owned(ProcessingStatus::InProgress);
        assert!(!can_rate(&r));

        r.finish_content = Some("Delivered the notes".to_string());
        assert!(can_rate(&r));

        r.finish_content = Some("   ".to_string());
        assert!(!can_rate(&r));

        let non_owner = RequestRecord {
            removable: false,
            finish_content: Some("Delivered".to_string()),
            ..record(ProcessingStatus::InProgress)
        };
        assert!(!can_rate(&non_owner));
    }

    #[test]
    fn test_rating_range() {
        assert!(validate_rating(-1).is_err());
        assert!(validate_rating(6).is_err());
        assert_eq!(validate_rating(0).unwrap(), 0);
        assert_eq!(validate_rating(5).unwrap(), 5);
    }

    #[test]
    fn test_per_participant_share() {
        let pooled = RequestRecord {
            allow_group_funding: true,
            reward: 10000,
            current_participants: 4,
            ..record(ProcessingStatus::NotStarted)
        };
        assert_eq!(per_participant_share(&pooled), 2500.0);

        let solo = RequestRecord {
            allow_group_funding: false,
            reward: 10000,
            current_participants: 4,
            ..record(ProcessingStatus::NotStarted)
        };
        assert_eq!(per_participant_share(&solo), 10000.0);
    }

    #[test]
    fn test_per_participant_share_guards_zero_participants() {
        let broken = RequestRecord {
            allow_group_funding: true,
            reward: 10000,
            current_participants: 0,
            ..record(ProcessingStatus::NotStarted)
        };
        assert_eq!(per_participant_share(&broken), 10000.0);
    }

    #[test]
    fn test_allowed_actions_owner_table() {
        let open = owned(ProcessingStatus::NotStarted);
        assert_eq!(allowed_actions(&open), vec![Action::Edit, Action::Delete]);

        let started = owned(ProcessingStatus::InProgress);
        assert!(allowed_actions(&started).is_empty());

        let reported = RequestRecord {
            finish_content: Some("Delivered".to_string()),
            ..owned(ProcessingStatus::InProgress)
        };
        assert_eq!(allowed_actions(&reported), vec![Action::Rate]);
    }

    #[test]
    fn test_allowed_actions_other_viewer() {
        let pooled = RequestRecord {
            allow_group_funding: true,
            ..record(ProcessingStatus::NotStarted)
        };
        assert_eq!(
            allowed_actions(&pooled),
            vec![Action::AcceptWork, Action::JoinFunding]
        );

        assert!(allowed_actions(&record(ProcessingStatus::InProgress)).is_empty());
    }

    #[test]
    fn test_allowed_actions_worker() {
        let working = RequestRecord {
            is_worker: true,
            ..record(ProcessingStatus::InProgress)
        };
        assert_eq!(allowed_actions(&working), vec![Action::SubmitCompletion]);

        let finished = RequestRecord {
            is_worker: true,
            ..record(ProcessingStatus::Completed)
        };
        assert!(allowed_actions(&finished).is_empty());
    }
}
