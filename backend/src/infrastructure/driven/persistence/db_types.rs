use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::application::ports::StoreError;
use crate::domain::{
    AccountStatus, Complaint, ComplaintId, ComplaintStatus, DisplayName, Email, Identity,
    IdentityId, SubmitterDetails, Urgency, UserRole,
};

#[derive(Debug, FromRow)]
pub struct DbProfile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub status: String,
}

#[derive(Debug, FromRow)]
pub struct DbComplaint {
    pub id: Uuid,
    pub user_id: Uuid,
    pub registration_number: String,
    pub full_name: String,
    pub course: String,
    pub gender: Option<String>,
    pub year: Option<String>,
    pub title: String,
    pub category: String,
    pub description: String,
    pub urgency: String,
    pub status: String,
    pub assigned_staff_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

fn corrupt(table: &str, id: &Uuid, detail: impl std::fmt::Display) -> StoreError {
    tracing::error!(table, %id, %detail, "row does not decode");
    StoreError::Corrupt(format!("{} row {}: {}", table, id, detail))
}

impl TryFrom<DbProfile> for Identity {
    type Error = StoreError;

    fn try_from(row: DbProfile) -> Result<Self, Self::Error> {
        let email =
            Email::from_persistence(row.email).map_err(|e| corrupt("profiles", &row.id, e))?;
        let display_name = DisplayName::from_persistence(row.full_name)
            .map_err(|e| corrupt("profiles", &row.id, e))?;
        let role: UserRole = row.role.parse().map_err(|e| corrupt("profiles", &row.id, e))?;
        let status: AccountStatus = row.status.parse().map_err(|e| corrupt("profiles", &row.id, e))?;
        Ok(Identity::from_persistence(
            IdentityId::from_uuid(row.id),
            email,
            display_name,
            role,
            status,
        ))
    }
}

impl TryFrom<DbComplaint> for Complaint {
    type Error = StoreError;

    fn try_from(row: DbComplaint) -> Result<Self, Self::Error> {
        let urgency: Urgency = row.urgency.parse().map_err(|e| corrupt("complaints", &row.id, e))?;
        let status: ComplaintStatus = row.status.parse().map_err(|e| corrupt("complaints", &row.id, e))?;
        Ok(Complaint::from_persistence(
            ComplaintId::from_uuid(row.id),
            IdentityId::from_uuid(row.user_id),
            SubmitterDetails {
                registration_number: row.registration_number,
                full_name: row.full_name,
                course: row.course,
                gender: row.gender,
                year: row.year,
            },
            row.title,
            row.category,
            row.description,
            urgency,
            status,
            row.assigned_staff_id.map(IdentityId::from_uuid),
            row.created_at,
        ))
    }
}
