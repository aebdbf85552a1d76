//! Client-side validation rules for the entity forms

use std::collections::BTreeMap;

/// Validation errors keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Validate a required string field
pub fn require(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) -> bool {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", label));
        false
    } else {
        true
    }
}

/// Loose e-mail check equivalent to `\S+@\S+\.\S+`
pub fn is_valid_email(value: &str) -> bool {
    // Any non-whitespace run containing '@' followed later by '.' with
    // at least one character on each side qualifies.
    value.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("mati@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("  lucas@mail.example.org "));
        assert!(!is_valid_email("mati@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("mati.example.com"));
        assert!(!is_valid_email("mati@.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Invalid email");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_require() {
        let mut errors = FieldErrors::new();
        assert!(!require(&mut errors, "name", "   ", "Name"));
        assert!(require(&mut errors, "other", "x", "Other"));
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("other"), None);
    }
}
