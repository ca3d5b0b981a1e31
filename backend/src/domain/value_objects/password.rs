use crate::domain::error::ValueError;
use std::fmt;

const SPECIALS: &str = "@$!%*?&#^()_-+=";

/// A password that passed the strength rule. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPassword(String);

impl NewPassword {
    /// At least 8 characters drawn from letters, digits and `@$!%*?&#^()_-+=`,
    /// with at least one lowercase, one uppercase, one digit and one special.
    pub fn new(password: impl Into<String>) -> Result<Self, ValueError> {
        let password = password.into();
        let weak = |reason: &str| ValueError::Invalid {
            field: "password",
            reason: reason.to_string(),
        };

        if password.is_empty() {
            return Err(ValueError::Empty { field: "password" });
        }
        if password.chars().count() < 8 {
            return Err(weak("must be at least 8 characters"));
        }
        if !password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c))
        {
            return Err(weak("contains an unsupported character"));
        }
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| SPECIALS.contains(c));
        if !(has_lower && has_upper && has_digit && has_special) {
            return Err(weak("needs an uppercase letter, a lowercase letter, a number and a special character"));
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NewPassword(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strong_passwords() {
        assert!(NewPassword::new("Campus#2025").is_ok());
    }

    #[test]
    fn rejects_each_missing_class() {
        for weak in ["campus#2025", "CAMPUS#2025", "Campus#abcd", "Campus2025", "Ca#1", "Campus 2025#"] {
            assert!(NewPassword::new(weak).is_err(), "{weak} should be rejected");
        }
    }

    #[test]
    fn debug_never_leaks() {
        let password = NewPassword::new("Campus#2025").unwrap();
        assert!(!format!("{:?}", password).contains("Campus"));
    }
}
