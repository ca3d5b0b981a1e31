use crate::domain::error::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    const FIELD: &'static str = "full_name";

    /// At least three visible characters and not purely numeric.
    pub fn new(name: impl Into<String>) -> Result<Self, ValueError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValueError::Empty { field: Self::FIELD });
        }
        if name.chars().count() < 3 {
            return Err(ValueError::Invalid {
                field: Self::FIELD,
                reason: "must be at least 3 characters".to_string(),
            });
        }
        if name.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValueError::Invalid {
                field: Self::FIELD,
                reason: "cannot be only digits".to_string(),
            });
        }
        if name.len() > 255 {
            return Err(ValueError::TooLong { field: Self::FIELD, max: 255 });
        }
        Ok(Self(name))
    }

    /// Stored names predate the sign-up rules, so only emptiness is refused.
    pub fn from_persistence(name: impl Into<String>) -> Result<Self, ValueError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValueError::Empty { field: Self::FIELD });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DisplayName::new(value)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_regular_names() {
        assert_eq!(DisplayName::new("  Mary Jane ").unwrap().as_str(), "Mary Jane");
    }

    #[test]
    fn rejects_short_or_numeric_names() {
        assert!(DisplayName::new("Al").is_err());
        assert!(DisplayName::new("2023001").is_err());
        assert!(DisplayName::new("   ").is_err());
    }

    #[test]
    fn stored_names_skip_form_rules() {
        assert_eq!(DisplayName::from_persistence("Li").unwrap().as_str(), "Li");
        assert_eq!(DisplayName::from_persistence("2023001").unwrap().as_str(), "2023001");
        assert!(DisplayName::from_persistence("  ").is_err());
    }
}
