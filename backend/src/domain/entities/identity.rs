use crate::domain::value_objects::*;
use serde::Serialize;

/// A profile record. Role is fixed at construction; there is no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    id: IdentityId,
    email: Email,
    display_name: DisplayName,
    role: UserRole,
    status: AccountStatus,
}

impl Identity {
    /// New profile for an auth user that just signed up. Starts `Active`.
    pub fn new(id: IdentityId, email: Email, display_name: DisplayName, role: UserRole) -> Self {
        Self {
            id,
            email,
            display_name,
            role,
            status: AccountStatus::Active,
        }
    }

    pub fn from_persistence(
        id: IdentityId,
        email: Email,
        display_name: DisplayName,
        role: UserRole,
        status: AccountStatus,
    ) -> Self {
        Self {
            id,
            email,
            display_name,
            role,
            status,
        }
    }

    pub fn id(&self) -> &IdentityId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn suspend(&mut self) {
        self.status = AccountStatus::Suspended;
    }

    pub fn activate(&mut self) {
        self.status = AccountStatus::Active;
    }

    pub fn rename(&mut self, display_name: DisplayName) {
        self.display_name = display_name;
    }
}
