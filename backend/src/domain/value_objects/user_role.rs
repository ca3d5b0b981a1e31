use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of roles. Assigned at registration, never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Staff,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Student, UserRole::Staff, UserRole::Admin];

    pub fn as_db_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Staff => "staff",
            UserRole::Admin => "admin",
        }
    }

    /// Roles a visitor may pick on the sign-up form.
    pub fn is_self_registrable(&self) -> bool {
        matches!(self, UserRole::Student | UserRole::Staff)
    }
}

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "staff" => Ok(UserRole::Staff),
            "admin" => Ok(UserRole::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_db_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_the_closed_set() {
        for role in UserRole::ALL {
            assert_eq!(role.as_db_str().parse::<UserRole>(), Ok(role));
        }
        assert!("Admin".parse::<UserRole>().is_err());
        assert!("super_admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn admins_cannot_self_register() {
        assert!(UserRole::Student.is_self_registrable());
        assert!(UserRole::Staff.is_self_registrable());
        assert!(!UserRole::Admin.is_self_registrable());
    }
}
