use crate::application::error::{AppError, AppResult};
use crate::application::ports::IdentityRepository;
use crate::domain::{AccountStatus, Identity, IdentityId};

/// Suspends or re-activates an account. Admins cannot change their own.
pub async fn execute<I: IdentityRepository + ?Sized>(
    identities: &I,
    acting_admin_id: &IdentityId,
    target_id: &IdentityId,
    status: AccountStatus,
) -> AppResult<Identity> {
    super::require_admin(identities, acting_admin_id).await?;
    if acting_admin_id == target_id {
        return Err(AppError::RoleViolation(
            "admins cannot change their own account status".to_string(),
        ));
    }

    let mut target = identities
        .find_by_id(target_id)
        .await?
        .ok_or_else(|| AppError::not_found("identity", target_id))?;
    if target.status() == status {
        return Ok(target);
    }

    identities.update_status(target_id, status).await?;
    match status {
        AccountStatus::Active => target.activate(),
        AccountStatus::Suspended => target.suspend(),
    }

    tracing::info!(
        identity_id = %target_id,
        admin_id = %acting_admin_id,
        status = status.as_db_str(),
        "account status changed"
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockIdentityRepository;
    use crate::domain::entities::complaint::fixtures::identity;
    use crate::domain::UserRole;
    use std::collections::HashMap;

    fn directory(people: &[&Identity]) -> MockIdentityRepository {
        let by_id: HashMap<IdentityId, Identity> =
            people.iter().map(|p| (*p.id(), (*p).clone())).collect();
        let mut repo = MockIdentityRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(by_id.get(id).cloned()));
        repo
    }

    #[tokio::test]
    async fn admin_suspends_a_student() {
        let admin = identity(UserRole::Admin);
        let student = identity(UserRole::Student);
        let mut repo = directory(&[&admin, &student]);
        repo.expect_update_status()
            .withf(|_, status| *status == AccountStatus::Suspended)
            .times(1)
            .returning(|_, _| Ok(()));

        let updated = execute(&repo, admin.id(), student.id(), AccountStatus::Suspended)
            .await
            .unwrap();
        assert!(!updated.is_active());
    }

    #[tokio::test]
    async fn unchanged_status_skips_the_write() {
        let admin = identity(UserRole::Admin);
        let staff = identity(UserRole::Staff);
        let mut repo = directory(&[&admin, &staff]);
        repo.expect_update_status().never();

        let updated = execute(&repo, admin.id(), staff.id(), AccountStatus::Active)
            .await
            .unwrap();
        assert!(updated.is_active());
    }

    #[tokio::test]
    async fn admin_cannot_suspend_themselves() {
        let admin = identity(UserRole::Admin);
        let repo = directory(&[&admin]);
        let err = execute(&repo, admin.id(), admin.id(), AccountStatus::Suspended)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RoleViolation(_)));
    }

    #[tokio::test]
    async fn staff_cannot_suspend_anyone() {
        let staff = identity(UserRole::Staff);
        let student = identity(UserRole::Student);
        let repo = directory(&[&staff, &student]);
        let err = execute(&repo, staff.id(), student.id(), AccountStatus::Suspended)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RoleViolation(_)));
    }
}
