use crate::domain::error::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    const FIELD: &'static str = "email";

    /// Accepts `local@domain.tld`: local part of `[A-Za-z0-9._%+-]`, domain of
    /// `[A-Za-z0-9.-]` ending in an alphabetic label of at least two letters.
    pub fn new(email: impl Into<String>) -> Result<Self, ValueError> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(ValueError::Empty { field: Self::FIELD });
        }
        if email.len() > 255 {
            return Err(ValueError::TooLong { field: Self::FIELD, max: 255 });
        }

        let (local, domain) = email.split_once('@').ok_or_else(|| invalid("missing '@'"))?;
        let local_ok = !local.is_empty()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
        if !local_ok {
            return Err(invalid("bad local part"));
        }

        let (host, tld) = domain.rsplit_once('.').ok_or_else(|| invalid("missing domain suffix"))?;
        let host_ok = !host.is_empty()
            && host
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
        let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
        if !host_ok || !tld_ok {
            return Err(invalid("bad domain"));
        }

        Ok(Self(email.to_lowercase()))
    }

    /// Lenient form for addresses already held by the store.
    pub fn from_persistence(email: impl Into<String>) -> Result<Self, ValueError> {
        let email = email.into().trim().to_lowercase();
        if email.is_empty() {
            return Err(ValueError::Empty { field: Self::FIELD });
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(reason: &str) -> ValueError {
    ValueError::Invalid {
        field: Email::FIELD,
        reason: reason.to_string(),
    }
}

impl TryFrom<String> for Email {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_case_and_whitespace() {
        let email = Email::new("  Rajesh.Singh@Student.EDU ").unwrap();
        assert_eq!(email.as_str(), "rajesh.singh@student.edu");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "plainaddress", "@no-local.com", "a@b", "a@b.c", "a b@c.com", "a@b.c0m"] {
            assert!(Email::new(bad).is_err(), "{bad} should be rejected");
        }
    }
}
