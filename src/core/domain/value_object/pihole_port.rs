use crate::core::domain::error::{PiholeResult, ValidationError};

/// A validated Pi-hole web server port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiholePort(u16);

impl PiholePort {
    /// Port used by the lighttpd instance bundled with Pi-hole.
    pub const DEFAULT: u16 = 80;

    /// Creates a new port, rejecting zero.
    pub fn new(port: u16) -> PiholeResult<Self> {
        validate_port(port)?;
        Ok(Self(port))
    }

    /// Returns the port number.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl Default for PiholePort {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Validates a port number.
pub(crate) fn validate_port(port: u16) -> Result<(), ValidationError> {
    if port == 0 {
        return Err(ValidationError::Field {
            field: "port".to_string(),
            message: "Port cannot be 0".to_string(),
        });
    }
    Ok(())
}
