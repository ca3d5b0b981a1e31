// Driven port - Identity (profile) store

use async_trait::async_trait;
use crate::application::ports::StoreError;
use crate::domain::{AccountStatus, DisplayName, Email, Identity, IdentityId, UserRole};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, StoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<Identity>, StoreError>;
    /// Sorted by display name, case-insensitive.
    async fn list_by_role(&self, role: UserRole) -> Result<Vec<Identity>, StoreError>;
    async fn save(&self, identity: &Identity) -> Result<(), StoreError>;
    async fn update_display_name(&self, id: &IdentityId, name: &DisplayName) -> Result<(), StoreError>;
    async fn update_status(&self, id: &IdentityId, status: AccountStatus) -> Result<(), StoreError>;
}
