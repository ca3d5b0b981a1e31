use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Admin-controlled account flag. Nothing in the core is gated on it; it is
/// carried so that richer authorization checks can read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown account status: {0:?}")]
pub struct UnknownAccountStatus(pub String);

impl AccountStatus {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Suspended => "Suspended",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AccountStatus::Active => AccountStatus::Suspended,
            AccountStatus::Suspended => AccountStatus::Active,
        }
    }
}

impl FromStr for AccountStatus {
    type Err = UnknownAccountStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(AccountStatus::Active),
            "Suspended" => Ok(AccountStatus::Suspended),
            other => Err(UnknownAccountStatus(other.to_string())),
        }
    }
}
