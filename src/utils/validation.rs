use crate::utils::error::{PartyError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PartyError::InvalidRosterValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Suite ids are lookup keys, so they are limited to `[A-Za-z0-9_]`.
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(PartyError::InvalidRosterValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unexpected character '{}' in identifier", bad),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("birthday_kids.name", "Timmy").is_ok());
        assert!(validate_non_empty_string("birthday_kids.name", "").is_err());
        assert!(validate_non_empty_string("birthday_kids.name", "   ").is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("passengers.suite", "suite_a").is_ok());
        assert!(validate_identifier("passengers.suite", "Suite9").is_ok());
        assert!(validate_identifier("passengers.suite", "").is_err());
        assert!(validate_identifier("passengers.suite", "suite a").is_err());
        assert!(validate_identifier("passengers.suite", "suite-a").is_err());
    }
}
