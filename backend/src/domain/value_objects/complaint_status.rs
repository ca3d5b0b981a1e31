use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four lifecycle states a complaint can be in. No other value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Pending,
    #[serde(rename = "In-Progress")]
    InProgress,
    Resolved,
    /// Set by an external process; never derived here.
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown complaint status: {0:?}")]
pub struct UnknownComplaintStatus(pub String);

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 4] = [
        ComplaintStatus::Pending,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In-Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Overdue => "Overdue",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ComplaintStatus::Resolved)
    }
}

impl FromStr for ComplaintStatus {
    type Err = UnknownComplaintStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ComplaintStatus::Pending),
            "In-Progress" => Ok(ComplaintStatus::InProgress),
            "Resolved" => Ok(ComplaintStatus::Resolved),
            "Overdue" => Ok(ComplaintStatus::Overdue),
            other => Err(UnknownComplaintStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_form_is_exact() {
        for status in ComplaintStatus::ALL {
            assert_eq!(status.as_str().parse::<ComplaintStatus>(), Ok(status));
        }
        assert!("in-progress".parse::<ComplaintStatus>().is_err());
        assert!("InProgress".parse::<ComplaintStatus>().is_err());
        assert!("Closed".parse::<ComplaintStatus>().is_err());
    }

    #[test]
    fn serde_uses_the_hyphenated_form() {
        let json = serde_json::to_string(&ComplaintStatus::InProgress).unwrap();
        assert_eq!(json, "\"In-Progress\"");
        assert!(serde_json::from_str::<ComplaintStatus>("\"Escalated\"").is_err());
    }
}
