// Aggregates shown on the dashboards: KPI tiles, badge count, staff workload.

use crate::domain::entities::Complaint;
use crate::domain::value_objects::{ComplaintStatus, IdentityId};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplaintCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub overdue: usize,
}

impl ComplaintCounts {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ComplaintStatus>,
    {
        statuses.into_iter().fold(Self::default(), |mut counts, status| {
            counts.total += 1;
            match status {
                ComplaintStatus::Pending => counts.pending += 1,
                ComplaintStatus::InProgress => counts.in_progress += 1,
                ComplaintStatus::Resolved => counts.resolved += 1,
                ComplaintStatus::Overdue => counts.overdue += 1,
            }
            counts
        })
    }

    /// Items still needing someone's attention.
    pub fn badge(&self) -> usize {
        self.pending + self.overdue
    }
}

pub fn derive_counts(complaints: &[Complaint]) -> ComplaintCounts {
    ComplaintCounts::from_statuses(complaints.iter().map(Complaint::status))
}

/// Open (non-resolved) complaints per assigned staff member.
pub fn staff_workload(complaints: &[Complaint]) -> BTreeMap<IdentityId, usize> {
    let mut workload = BTreeMap::new();
    for complaint in complaints.iter().filter(|c| !c.status().is_terminal()) {
        if let Some(staff) = complaint.assigned_staff_id() {
            *workload.entry(*staff).or_insert(0) += 1;
        }
    }
    workload
}
