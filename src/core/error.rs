//! Error types for the particle network.
//!
//! Only construction, configuration and seeding can fail; every per-frame
//! operation is total.

use std::fmt;

/// Errors surfaced while building or reconfiguring a [`Simulator`](super::Simulator).
#[derive(Debug)]
pub enum SimError {
    /// Surface dimensions were negative, zero (at construction) or not finite.
    InvalidDimensions { width: f32, height: f32 },
    /// A configuration value is out of range.
    InvalidConfig(String),
    /// Configuration JSON could not be parsed.
    ConfigParse(serde_json::Error),
    /// Configuration file could not be read.
    ConfigRead(std::io::Error),
    /// The platform refused to hand out random bytes for seeding.
    Entropy(getrandom::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidDimensions { width, height } => {
                write!(f, "Invalid surface dimensions {}x{}", width, height)
            }
            SimError::InvalidConfig(msg) => write!(f, "Invalid network config: {}", msg),
            SimError::ConfigParse(e) => write!(f, "Failed to parse network config: {}", e),
            SimError::ConfigRead(e) => write!(f, "Failed to read network config: {}", e),
            SimError::Entropy(e) => write!(f, "Failed to obtain a random seed: {}", e),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::ConfigParse(e) => Some(e),
            SimError::ConfigRead(e) => Some(e),
            SimError::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::ConfigParse(e)
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::ConfigRead(e)
    }
}

impl From<getrandom::Error> for SimError {
    fn from(e: getrandom::Error) -> Self {
        SimError::Entropy(e)
    }
}

/// Reject dimensions a drawing surface can never have.
///
/// `allow_empty` permits zero-sized surfaces (a minimised window on resize).
pub(crate) fn check_dimensions(width: f32, height: f32, allow_empty: bool) -> Result<(), SimError> {
    let valid = |v: f32| v.is_finite() && if allow_empty { v >= 0.0 } else { v > 0.0 };
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(SimError::InvalidDimensions { width, height })
    }
}
