use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::application::ports::{ComplaintFilter, ComplaintRepository, StoreError};
use crate::domain::{Complaint, ComplaintId};

#[derive(Default)]
pub struct InMemoryComplaintRepository {
    complaints: RwLock<HashMap<ComplaintId, Complaint>>,
}

impl InMemoryComplaintRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn find_by_id(&self, id: &ComplaintId) -> Result<Option<Complaint>, StoreError> {
        Ok(self.complaints.read().await.get(id).cloned())
    }

    async fn insert(&self, complaint: &Complaint) -> Result<(), StoreError> {
        let mut complaints = self.complaints.write().await;
        if complaints.contains_key(complaint.id()) {
            return Err(StoreError::Unavailable(format!(
                "duplicate complaint id {}",
                complaint.id()
            )));
        }
        complaints.insert(*complaint.id(), complaint.clone());
        Ok(())
    }

    async fn update(&self, complaint: &Complaint) -> Result<(), StoreError> {
        if let Some(stored) = self.complaints.write().await.get_mut(complaint.id()) {
            *stored = complaint.clone();
        }
        Ok(())
    }

    async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, StoreError> {
        let mut listed: Vec<Complaint> = self
            .complaints
            .read()
            .await
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::complaint::fixtures::complaint_with_status;
    use crate::domain::{ComplaintStatus, IdentityId};

    #[tokio::test]
    async fn filters_by_assignee_and_status() {
        let repo = InMemoryComplaintRepository::new();
        let staff = IdentityId::new();
        let mine = complaint_with_status(ComplaintStatus::InProgress, Some(staff));
        repo.insert(&mine).await.unwrap();
        repo.insert(&complaint_with_status(ComplaintStatus::Resolved, Some(staff)))
            .await
            .unwrap();
        repo.insert(&complaint_with_status(ComplaintStatus::Pending, None))
            .await
            .unwrap();

        let open = repo
            .list(&ComplaintFilter::assigned_to(staff).with_status(ComplaintStatus::InProgress))
            .await
            .unwrap();
        assert_eq!(open, vec![mine]);
        assert_eq!(repo.list(&ComplaintFilter::all()).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn duplicate_insert_is_refused() {
        let repo = InMemoryComplaintRepository::new();
        let complaint = complaint_with_status(ComplaintStatus::Pending, None);
        repo.insert(&complaint).await.unwrap();
        assert!(repo.insert(&complaint).await.is_err());
    }
}
