use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::application::ports::{IdentityRepository, StoreError};
use crate::domain::{AccountStatus, DisplayName, Email, Identity, IdentityId, UserRole};

#[derive(Default)]
pub struct InMemoryIdentityRepository {
    identities: RwLock<HashMap<IdentityId, Identity>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, StoreError> {
        Ok(self.identities.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Identity>, StoreError> {
        Ok(self
            .identities
            .read()
            .await
            .values()
            .find(|i| i.email() == email)
            .cloned())
    }

    async fn list_by_role(&self, role: UserRole) -> Result<Vec<Identity>, StoreError> {
        let mut listed: Vec<Identity> = self
            .identities
            .read()
            .await
            .values()
            .filter(|i| i.has_role(role))
            .cloned()
            .collect();
        listed.sort_by_key(|i| i.display_name().as_str().to_lowercase());
        Ok(listed)
    }

    async fn save(&self, identity: &Identity) -> Result<(), StoreError> {
        self.identities
            .write()
            .await
            .insert(*identity.id(), identity.clone());
        Ok(())
    }

    async fn update_display_name(&self, id: &IdentityId, name: &DisplayName) -> Result<(), StoreError> {
        if let Some(identity) = self.identities.write().await.get_mut(id) {
            identity.rename(name.clone());
        }
        Ok(())
    }

    async fn update_status(&self, id: &IdentityId, status: AccountStatus) -> Result<(), StoreError> {
        if let Some(identity) = self.identities.write().await.get_mut(id) {
            match status {
                AccountStatus::Active => identity.activate(),
                AccountStatus::Suspended => identity.suspend(),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, role: UserRole) -> Identity {
        let id = IdentityId::new();
        Identity::new(
            id,
            Email::new(format!("{}@campus.edu", id.as_uuid().simple())).unwrap(),
            DisplayName::new(name).unwrap(),
            role,
        )
    }

    #[tokio::test]
    async fn lists_by_role_sorted_by_name() {
        let repo = InMemoryIdentityRepository::new();
        for (name, role) in [
            ("mary jane", UserRole::Staff),
            ("Alex Kim", UserRole::Staff),
            ("Joy Phillis", UserRole::Student),
        ] {
            repo.save(&person(name, role)).await.unwrap();
        }
        let staff = repo.list_by_role(UserRole::Staff).await.unwrap();
        let names: Vec<_> = staff.iter().map(|i| i.display_name().as_str()).collect();
        assert_eq!(names, ["Alex Kim", "mary jane"]);
    }

    #[tokio::test]
    async fn status_update_is_visible_on_next_read() {
        let repo = InMemoryIdentityRepository::new();
        let student = person("Joy Phillis", UserRole::Student);
        repo.save(&student).await.unwrap();
        repo.update_status(student.id(), AccountStatus::Suspended)
            .await
            .unwrap();
        let reread = repo.find_by_id(student.id()).await.unwrap().unwrap();
        assert_eq!(reread.status(), AccountStatus::Suspended);
        assert_eq!(
            repo.find_by_email(student.email()).await.unwrap().map(|i| *i.id()),
            Some(*student.id())
        );
    }
}
