use crate::core::domain::error::ValidationError;
use std::net::Ipv4Addr;

/// Validates dotted-quad IPv4 syntax (four decimal octets, no leading zeros).
pub(crate) fn validate_ipv4(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Field {
            field: "ipv4".to_string(),
            message: "IPv4 address cannot be empty".to_string(),
        });
    }

    value
        .parse::<Ipv4Addr>()
        .map(|_| ())
        .map_err(|e| ValidationError::Format(format!("Invalid IPv4 address '{}': {}", value, e)))
}

/// Returns true if `value` parses as an IPv4 address.
pub fn is_valid_ipv4(value: &str) -> bool {
    validate_ipv4(value).is_ok()
}
