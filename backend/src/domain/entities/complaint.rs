use crate::domain::entities::Identity;
use crate::domain::error::ValidationErrors;
use crate::domain::transitions::{next_status, LifecycleOperation, TransitionRejected};
use crate::domain::value_objects::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CATEGORY: &str = "Other";

/// Details the student types into the complaint form about themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterDetails {
    pub registration_number: String,
    pub full_name: String,
    pub course: String,
    pub gender: Option<String>,
    pub year: Option<String>,
}

/// Raw complaint form as submitted by a student.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintSubmission {
    pub registration_number: String,
    pub full_name: String,
    pub course: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub urgency: Urgency,
}

/// Why the domain refused a lifecycle write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleRejection {
    #[error(transparent)]
    Transition(#[from] TransitionRejected),

    #[error("identity {identity} is {role}, only staff can be assigned")]
    NotStaff { identity: IdentityId, role: UserRole },

    #[error("identity {actor} is not the staff assigned to this complaint")]
    NotAssignee { actor: IdentityId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Complaint {
    id: ComplaintId,
    reporter_id: IdentityId,
    submitter: SubmitterDetails,
    title: String,
    category: String,
    description: String,
    urgency: Urgency,
    status: ComplaintStatus,
    assigned_staff_id: Option<IdentityId>,
    created_at: DateTime<Utc>,
}

impl Complaint {
    /// Validates the form and opens a new complaint as `Pending`, unassigned.
    pub fn submit(
        reporter_id: IdentityId,
        submission: ComplaintSubmission,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let required = [
            ("registration_number", &submission.registration_number, "Registration Number is required"),
            ("full_name", &submission.full_name, "Full Name is required"),
            ("course", &submission.course, "Course is required"),
            ("title", &submission.title, "Complaint Title is required"),
            ("description", &submission.description, "Description is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.add(field, message);
            }
        }
        errors.into_result()?;

        let category = match submission.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            other => other.to_string(),
        };

        Ok(Self {
            id: ComplaintId::new(),
            reporter_id,
            submitter: SubmitterDetails {
                registration_number: submission.registration_number.trim().to_string(),
                full_name: submission.full_name.trim().to_string(),
                course: submission.course.trim().to_string(),
                gender: non_blank(submission.gender),
                year: non_blank(submission.year),
            },
            title: submission.title.trim().to_string(),
            category,
            description: submission.description.trim().to_string(),
            urgency: submission.urgency,
            status: ComplaintStatus::Pending,
            assigned_staff_id: None,
            created_at: Utc::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: ComplaintId,
        reporter_id: IdentityId,
        submitter: SubmitterDetails,
        title: String,
        category: String,
        description: String,
        urgency: Urgency,
        status: ComplaintStatus,
        assigned_staff_id: Option<IdentityId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            reporter_id,
            submitter,
            title,
            category,
            description,
            urgency,
            status,
            assigned_staff_id,
            created_at,
        }
    }

    /// Returns the complaint as it would look after assigning `staff`.
    /// `self` is never modified.
    pub fn assigned_to(&self, staff: &Identity) -> Result<Self, LifecycleRejection> {
        let status = next_status(self.status, LifecycleOperation::Assign)?;
        if !staff.has_role(UserRole::Staff) {
            return Err(LifecycleRejection::NotStaff {
                identity: *staff.id(),
                role: staff.role(),
            });
        }
        Ok(Self {
            status,
            assigned_staff_id: Some(*staff.id()),
            ..self.clone()
        })
    }

    /// Returns the complaint as it would look after `actor` moves it to `target`.
    ///
    /// A resolved complaint rejects every actor; otherwise only the assigned
    /// staff member may act.
    pub fn with_status_from(
        &self,
        actor: &IdentityId,
        target: ComplaintStatus,
    ) -> Result<Self, LifecycleRejection> {
        let operation = LifecycleOperation::StaffUpdate(target);
        if self.status.is_terminal() {
            return Err(TransitionRejected { from: self.status, operation }.into());
        }
        if self.assigned_staff_id.as_ref() != Some(actor) {
            return Err(LifecycleRejection::NotAssignee { actor: *actor });
        }
        let status = next_status(self.status, operation)?;
        Ok(Self { status, ..self.clone() })
    }

    pub fn id(&self) -> &ComplaintId {
        &self.id
    }

    pub fn reporter_id(&self) -> &IdentityId {
        &self.reporter_id
    }

    pub fn submitter(&self) -> &SubmitterDetails {
        &self.submitter
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn status(&self) -> ComplaintStatus {
        self.status
    }

    pub fn assigned_staff_id(&self) -> Option<&IdentityId> {
        self.assigned_staff_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn submit_opens_pending_and_unassigned() {
        let reporter = IdentityId::new();
        let complaint = Complaint::submit(reporter, submission("Hostel Water Issue")).unwrap();
        assert_eq!(complaint.status(), ComplaintStatus::Pending);
        assert!(complaint.assigned_staff_id().is_none());
        assert_eq!(complaint.reporter_id(), &reporter);
        assert_eq!(complaint.urgency(), Urgency::High);
    }

    #[test]
    fn submit_reports_every_blank_required_field() {
        let form = ComplaintSubmission {
            title: "  ".into(),
            ..ComplaintSubmission::default()
        };
        let errors = Complaint::submit(IdentityId::new(), form).unwrap_err();
        for field in ["registration_number", "full_name", "course", "title", "description"] {
            assert!(errors.contains(field), "missing error for {field}");
        }
        assert_eq!(errors.get("title"), Some("Complaint Title is required"));
    }

    #[test]
    fn blank_category_defaults_to_other() {
        let form = ComplaintSubmission {
            category: " ".into(),
            ..submission("Mess food")
        };
        let complaint = Complaint::submit(IdentityId::new(), form).unwrap();
        assert_eq!(complaint.category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn form_payload_defaults_urgency_and_category() {
        let form: ComplaintSubmission = serde_json::from_str(
            r#"{
                "registration_number": "2023001",
                "full_name": "Rajesh Singh",
                "course": "B.Tech CSE",
                "title": "Wi-Fi down",
                "description": "No signal in block C"
            }"#,
        )
        .unwrap();
        let complaint = Complaint::submit(IdentityId::new(), form).unwrap();
        assert_eq!(complaint.urgency(), Urgency::Normal);
        assert_eq!(complaint.category(), DEFAULT_CATEGORY);
        assert_eq!(complaint.submitter().gender, None);
    }

    #[test]
    fn assignment_rejects_non_staff_targets() {
        let complaint = complaint_with_status(ComplaintStatus::Pending, None);
        for role in [UserRole::Student, UserRole::Admin] {
            let err = complaint.assigned_to(&identity(role)).unwrap_err();
            assert!(matches!(err, LifecycleRejection::NotStaff { .. }));
        }
    }

    #[test]
    fn assignment_keeps_original_untouched() {
        let complaint = complaint_with_status(ComplaintStatus::Pending, None);
        let staff = identity(UserRole::Staff);
        let assigned = complaint.assigned_to(&staff).unwrap();
        assert_eq!(assigned.status(), ComplaintStatus::InProgress);
        assert_eq!(assigned.assigned_staff_id(), Some(staff.id()));
        assert_eq!(complaint.status(), ComplaintStatus::Pending);
        assert!(complaint.assigned_staff_id().is_none());
    }

    #[test]
    fn resolved_wins_over_wrong_actor() {
        let staff = IdentityId::new();
        let complaint = complaint_with_status(ComplaintStatus::Resolved, Some(staff));
        let err = complaint
            .with_status_from(&IdentityId::new(), ComplaintStatus::InProgress)
            .unwrap_err();
        assert!(matches!(err, LifecycleRejection::Transition(_)));
    }

    #[test]
    fn wrong_actor_wins_over_bad_target() {
        let complaint = complaint_with_status(ComplaintStatus::InProgress, Some(IdentityId::new()));
        let err = complaint
            .with_status_from(&IdentityId::new(), ComplaintStatus::Overdue)
            .unwrap_err();
        assert!(matches!(err, LifecycleRejection::NotAssignee { .. }));
    }

    #[test]
    fn unassigned_complaint_has_no_assignee() {
        let complaint = complaint_with_status(ComplaintStatus::Pending, None);
        let err = complaint
            .with_status_from(&IdentityId::new(), ComplaintStatus::Resolved)
            .unwrap_err();
        assert!(matches!(err, LifecycleRejection::NotAssignee { .. }));
    }

    proptest! {
        #[test]
        fn resolved_refuses_every_actor_and_target(
            target in prop::sample::select(ComplaintStatus::ALL.to_vec()),
            actor_is_assignee in any::<bool>(),
        ) {
            let staff = IdentityId::new();
            let complaint = complaint_with_status(ComplaintStatus::Resolved, Some(staff));
            let actor = if actor_is_assignee { staff } else { IdentityId::new() };

            let err = complaint.with_status_from(&actor, target).unwrap_err();
            prop_assert!(
                matches!(err, LifecycleRejection::Transition(ref t) if t.from == ComplaintStatus::Resolved),
                "got {:?}", err
            );
        }
    }
}
