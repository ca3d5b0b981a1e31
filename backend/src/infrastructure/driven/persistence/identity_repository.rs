use async_trait::async_trait;
use sqlx::PgPool;

use super::db_error;
use super::db_types::DbProfile;
use crate::application::ports::{IdentityRepository, StoreError};
use crate::domain::{AccountStatus, DisplayName, Email, Identity, IdentityId, UserRole};

const PROFILE_COLUMNS: &str = "id, email, full_name, role, status";

pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, StoreError> {
        let row: Option<DbProfile> =
            sqlx::query_as(&format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;
        row.map(Identity::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Identity>, StoreError> {
        let row: Option<DbProfile> =
            sqlx::query_as(&format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE email = $1"))
                .bind(email.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;
        row.map(Identity::try_from).transpose()
    }

    async fn list_by_role(&self, role: UserRole) -> Result<Vec<Identity>, StoreError> {
        let rows: Vec<DbProfile> = sqlx::query_as(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE role = $1 ORDER BY LOWER(full_name) ASC"
        ))
        .bind(role.as_db_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;
        rows.into_iter().map(Identity::try_from).collect()
    }

    async fn save(&self, identity: &Identity) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO profiles (id, email, full_name, role, status)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE
             SET email = EXCLUDED.email, full_name = EXCLUDED.full_name, status = EXCLUDED.status",
        )
        .bind(identity.id().as_uuid())
        .bind(identity.email().as_str())
        .bind(identity.display_name().as_str())
        .bind(identity.role().as_db_str())
        .bind(identity.status().as_db_str())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn update_display_name(&self, id: &IdentityId, name: &DisplayName) -> Result<(), StoreError> {
        sqlx::query("UPDATE profiles SET full_name = $1 WHERE id = $2")
            .bind(name.as_str())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn update_status(&self, id: &IdentityId, status: AccountStatus) -> Result<(), StoreError> {
        sqlx::query("UPDATE profiles SET status = $1 WHERE id = $2")
            .bind(status.as_db_str())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }
}
