// Admin commands

pub mod assign_complaint;
pub mod list_identities;
pub mod set_account_status;

use crate::application::error::{AppError, AppResult};
use crate::application::ports::IdentityRepository;
use crate::domain::{Identity, IdentityId, UserRole};

/// Loads the acting identity and checks it is an admin.
pub(crate) async fn require_admin<I: IdentityRepository + ?Sized>(
    identities: &I,
    actor_id: &IdentityId,
) -> AppResult<Identity> {
    let actor = identities
        .find_by_id(actor_id)
        .await?
        .ok_or_else(|| AppError::not_found("identity", actor_id))?;
    if !actor.has_role(UserRole::Admin) {
        return Err(AppError::RoleViolation(format!(
            "{} is {}, this action needs admin",
            actor_id,
            actor.role()
        )));
    }
    Ok(actor)
}
