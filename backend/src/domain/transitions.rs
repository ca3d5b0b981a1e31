// Complaint status transition table.
//
// Every write to a complaint's status goes through `next_status`; the match
// below is the whole state machine.

use crate::domain::value_objects::ComplaintStatus;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A lifecycle operation that may move a complaint's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifecycleOperation {
    /// Admin attaches (or re-attaches) a staff member.
    Assign,
    /// Assigned staff requests a new status.
    StaffUpdate(ComplaintStatus),
}

impl fmt::Display for LifecycleOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleOperation::Assign => write!(f, "assign"),
            LifecycleOperation::StaffUpdate(target) => write!(f, "move to {}", target),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {operation} a complaint that is {from}")]
pub struct TransitionRejected {
    pub from: ComplaintStatus,
    pub operation: LifecycleOperation,
}

/// current status × operation → next status | reject
pub fn next_status(
    current: ComplaintStatus,
    operation: LifecycleOperation,
) -> Result<ComplaintStatus, TransitionRejected> {
    use ComplaintStatus::*;
    use LifecycleOperation::*;

    let reject = || TransitionRejected { from: current, operation };

    match (current, operation) {
        // Terminal
        (Resolved, _) => Err(reject()),

        // Assignment only advances a fresh complaint
        (Pending, Assign) => Ok(InProgress),
        (InProgress, Assign) => Ok(InProgress),
        (Overdue, Assign) => Ok(Overdue),

        // Staff may work or close from any open state, including Pending and Overdue
        (Pending | InProgress | Overdue, StaffUpdate(InProgress)) => Ok(InProgress),
        (Pending | InProgress | Overdue, StaffUpdate(Resolved)) => Ok(Resolved),

        // Pending and Overdue are never staff-settable
        (Pending | InProgress | Overdue, StaffUpdate(Pending | Overdue)) => Err(reject()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ComplaintStatus::*;
    use LifecycleOperation::*;

    #[test]
    fn assign_advances_only_pending() {
        assert_eq!(next_status(Pending, Assign), Ok(InProgress));
        assert_eq!(next_status(InProgress, Assign), Ok(InProgress));
        assert_eq!(next_status(Overdue, Assign), Ok(Overdue));
    }

    #[test]
    fn resolved_rejects_every_operation() {
        assert!(next_status(Resolved, Assign).is_err());
        for target in ComplaintStatus::ALL {
            let err = next_status(Resolved, StaffUpdate(target)).unwrap_err();
            assert_eq!(err.from, Resolved);
        }
    }

    #[test]
    fn staff_may_skip_in_progress_and_act_on_overdue() {
        assert_eq!(next_status(Pending, StaffUpdate(Resolved)), Ok(Resolved));
        assert_eq!(next_status(Overdue, StaffUpdate(Resolved)), Ok(Resolved));
        assert_eq!(next_status(Overdue, StaffUpdate(InProgress)), Ok(InProgress));
    }

    #[test]
    fn staff_cannot_set_pending_or_overdue() {
        for from in [Pending, InProgress, Overdue] {
            assert!(next_status(from, StaffUpdate(Pending)).is_err());
            assert!(next_status(from, StaffUpdate(Overdue)).is_err());
        }
    }

    #[test]
    fn rejection_message_names_operation_and_state() {
        let err = next_status(Resolved, StaffUpdate(InProgress)).unwrap_err();
        assert_eq!(err.to_string(), "cannot move to In-Progress a complaint that is Resolved");
    }
}
