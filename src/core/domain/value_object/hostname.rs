use crate::core::domain::error::ValidationError;

const MAX_HOSTNAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// Validates a hostname according to RFC 1123.
///
/// Each dot-separated label must be 1 to 63 characters long, contain only
/// ASCII alphanumerics and hyphens, and must not start or end with a hyphen.
/// A single trailing dot (fully qualified form) is accepted.
pub(crate) fn validate_hostname(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Field {
            field: "hostname".to_string(),
            message: "Hostname cannot be empty".to_string(),
        });
    }

    let value = value.strip_suffix('.').unwrap_or(value);
    if value.len() > MAX_HOSTNAME_LENGTH {
        return Err(ValidationError::ConstraintViolation(format!(
            "Hostname length exceeds maximum of {} characters",
            MAX_HOSTNAME_LENGTH
        )));
    }

    value.split('.').try_for_each(validate_label)
}

fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return Err(ValidationError::Format(format!(
            "Label must be between 1 and {} characters",
            MAX_LABEL_LENGTH
        )));
    }

    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ValidationError::Format(
            "Label can only contain alphanumeric characters and hyphens".to_string(),
        ));
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::Format(
            "Label cannot start or end with hyphen".to_string(),
        ));
    }

    Ok(())
}

/// Returns true if `value` is a syntactically valid hostname.
pub fn is_valid_hostname(value: &str) -> bool {
    validate_hostname(value).is_ok()
}
