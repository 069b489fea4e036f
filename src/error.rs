//! Error types for RamEeprom
//!
//! Byte and block accessors follow the fail-soft contract of real EEPROM
//! drivers and never return these. They are used by the operations that
//! decode or encode structured data.

use thiserror::Error;

/// Result type alias using EepromError
pub type Result<T> = std::result::Result<T, EepromError>;

/// Unified error type for RamEeprom operations
#[derive(Debug, Error)]
pub enum EepromError {
    // -------------------------------------------------------------------------
    // Addressing Errors
    // -------------------------------------------------------------------------
    #[error("Range out of bounds: address {address}, length {len}, store size {size}")]
    OutOfRange {
        address: i64,
        len: usize,
        size: usize,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Image Errors
    // -------------------------------------------------------------------------
    #[error("Invalid store image: {0}")]
    Image(String),

    #[error("Image checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for EepromError {
    fn from(err: bincode::Error) -> Self {
        EepromError::Serialization(err.to_string())
    }
}
