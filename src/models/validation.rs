//! Validation errors shared by all models

use std::fmt;

use super::money::Money;

/// Longest name accepted for any record
pub const MAX_NAME_LEN: usize = 100;

/// Validation errors for models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName(&'static str),
    NameTooLong { entity: &'static str, len: usize },
    Negative(&'static str),
    NotPositive(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName(entity) => write!(f, "{} name cannot be empty", entity),
            Self::NameTooLong { entity, len } => write!(
                f,
                "{} name too long ({} chars, max {})",
                entity, len, MAX_NAME_LEN
            ),
            Self::Negative(field) => write!(f, "{} cannot be negative", field),
            Self::NotPositive(field) => write!(f, "{} must be greater than zero", field),
        }
    }
}

impl std::error::Error for ValidationError {}

pub(crate) fn check_name(entity: &'static str, name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName(entity));
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong { entity, len });
    }
    Ok(())
}

pub(crate) fn check_non_negative(field: &'static str, amount: Money) -> Result<(), ValidationError> {
    if amount.is_negative() {
        return Err(ValidationError::Negative(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_name() {
        assert!(check_name("Bill", "Rent").is_ok());
        assert_eq!(check_name("Bill", "   "), Err(ValidationError::EmptyName("Bill")));
        assert!(matches!(
            check_name("Bill", &"x".repeat(101)),
            Err(ValidationError::NameTooLong { len: 101, .. })
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Negative("Monthly limit").to_string(),
            "Monthly limit cannot be negative"
        );
        assert_eq!(
            ValidationError::NotPositive("Contribution").to_string(),
            "Contribution must be greater than zero"
        );
    }
}
