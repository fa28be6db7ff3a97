use crate::domain::error::DomainError;

/// Centralized name validation.
///
/// Duck and action names end up as JavaScript identifiers and as a file
/// name under `modules/`, so both are held to the same rules.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_duck_name(name: &str) -> Result<(), DomainError> {
        validate_name("duck", name)
    }

    pub fn validate_action_name(name: &str) -> Result<(), DomainError> {
        validate_name("action", name)
    }
}

fn validate_name(kind: &'static str, name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        kind,
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let Some(first) = name.chars().next() else {
        return Err(invalid("name cannot be empty"));
    };

    if name.contains(['/', '\\']) || name.contains("..") {
        return Err(invalid("name cannot contain path separators"));
    }

    if !first.is_ascii_alphabetic() {
        return Err(invalid("name must start with a letter"));
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(&format!("character '{bad}' is not allowed")));
    }

    Ok(())
}
