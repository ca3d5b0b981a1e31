use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::db_error;
use super::db_types::DbComplaint;
use crate::application::ports::{ComplaintFilter, ComplaintRepository, StoreError};
use crate::domain::{Complaint, ComplaintId};

const COMPLAINT_COLUMNS: &str = "id, user_id, registration_number, full_name, course, gender, year, \
     title, category, description, urgency, status, assigned_staff_id, created_at";

pub struct PostgresComplaintRepository {
    pool: PgPool,
}

impl PostgresComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplaintRepository for PostgresComplaintRepository {
    async fn find_by_id(&self, id: &ComplaintId) -> Result<Option<Complaint>, StoreError> {
        let row: Option<DbComplaint> =
            sqlx::query_as(&format!("SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;
        row.map(Complaint::try_from).transpose()
    }

    async fn insert(&self, complaint: &Complaint) -> Result<(), StoreError> {
        let submitter = complaint.submitter();
        sqlx::query(
            "INSERT INTO complaints (id, user_id, registration_number, full_name, course, gender, year,
                                     title, category, description, urgency, status, assigned_staff_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(complaint.id().as_uuid())
        .bind(complaint.reporter_id().as_uuid())
        .bind(&submitter.registration_number)
        .bind(&submitter.full_name)
        .bind(&submitter.course)
        .bind(&submitter.gender)
        .bind(&submitter.year)
        .bind(complaint.title())
        .bind(complaint.category())
        .bind(complaint.description())
        .bind(complaint.urgency().as_str())
        .bind(complaint.status().as_str())
        .bind(complaint.assigned_staff_id().map(|id| *id.as_uuid()))
        .bind(complaint.created_at())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn update(&self, complaint: &Complaint) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE complaints
             SET status = $1, assigned_staff_id = $2, updated_at = NOW()
             WHERE id = $3",
        )
        .bind(complaint.status().as_str())
        .bind(complaint.assigned_staff_id().map(|id| *id.as_uuid()))
        .bind(complaint.id().as_uuid())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, StoreError> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE TRUE"));
        if let Some(status) = filter.status {
            query.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(staff_id) = filter.assigned_staff_id {
            query
                .push(" AND assigned_staff_id = ")
                .push_bind(*staff_id.as_uuid());
        }
        if let Some(reporter_id) = filter.reporter_id {
            query.push(" AND user_id = ").push_bind(*reporter_id.as_uuid());
        }
        query.push(" ORDER BY created_at DESC");

        let rows: Vec<DbComplaint> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;
        rows.into_iter().map(Complaint::try_from).collect()
    }
}
