use crate::application::error::AppResult;
use crate::application::ports::IdentityRepository;
use crate::domain::{Identity, IdentityId, UserRole};

/// Directory listing for the manage-students and manage-staff screens.
/// `search` narrows by a case-insensitive substring of the display name.
pub async fn execute<I: IdentityRepository + ?Sized>(
    identities: &I,
    acting_admin_id: &IdentityId,
    role: UserRole,
    search: Option<&str>,
) -> AppResult<Vec<Identity>> {
    super::require_admin(identities, acting_admin_id).await?;

    let mut listed = identities.list_by_role(role).await?;
    if let Some(needle) = search.map(str::trim).filter(|s| !s.is_empty()) {
        let needle = needle.to_lowercase();
        listed.retain(|i| i.display_name().as_str().to_lowercase().contains(&needle));
    }
    Ok(listed)
}
