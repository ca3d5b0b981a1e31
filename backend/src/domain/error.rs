use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Rejection raised by a value object constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("{field} is required")]
    Empty { field: &'static str },

    #[error("{field} is too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ValueError {
    pub fn field(&self) -> &'static str {
        match self {
            ValueError::Empty { field }
            | ValueError::TooLong { field, .. }
            | ValueError::Invalid { field, .. } => field,
        }
    }
}

/// Field-level messages collected while validating a form.
///
/// Every failing field is reported at once so the caller can show all inline
/// errors in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records a message for `field`; the first message per field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn push(&mut self, error: ValueError) {
        self.add(error.field(), error.to_string());
    }

    /// Unwraps a constructor result, stashing its error and yielding `None`.
    pub fn collect<T>(&mut self, result: Result<T, ValueError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for message in self.fields.values() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", message)?;
            first = false;
        }
        Ok(())
    }
}

impl From<ValueError> for ValidationErrors {
    fn from(error: ValueError) -> Self {
        let mut errors = Self::new();
        errors.push(error);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "Complaint Title is required");
        errors.add("title", "something else");
        assert_eq!(errors.get("title"), Some("Complaint Title is required"));
    }

    #[test]
    fn collect_keeps_ok_values_and_records_errors() {
        let mut errors = ValidationErrors::new();
        let ok: Option<u8> = errors.collect(Ok(7));
        let bad: Option<u8> = errors.collect(Err(ValueError::Empty { field: "course" }));
        assert_eq!(ok, Some(7));
        assert_eq!(bad, None);
        assert!(errors.contains("course"));
        assert!(errors.into_result().is_err());
    }
}
