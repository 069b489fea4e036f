//! # RamEeprom
//!
//! A bounds-checked emulation of a byte-addressable EEPROM backed by RAM:
//! - Fixed-size store erased to `0xFF` on construction
//! - Fail-soft byte access (out-of-range reads yield `0`, writes are dropped)
//! - All-or-nothing block access reporting success as `bool`
//! - Typed get/put for plain-old-data and serde values
//! - Checksummed images for explicit duplication
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │          get / put              get_object / put_object     │
//! │        (bytemuck Pod)              (serde + bincode)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │              read_into / write_from (byte ranges)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ read/write  │          │   blocks    │
//!   │  (bytes)    │          │ read/write/ │
//!   └──────┬──────┘          │ copy/erase  │
//!          │                 └──────┬──────┘
//!          └────────────┬───────────┘
//!                       ▼
//!               ┌───────────────┐        ┌─────────────┐
//!               │  Box<[u8]>    │◄──────►│    Image    │
//!               │ (0xFF erased) │        │ (CRC32)     │
//!               └───────────────┘        └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod eeprom;
pub mod image;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EepromError, Result};
pub use config::{Device, EepromConfig};
pub use eeprom::{Eeprom, ERASED_BYTE};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RamEeprom
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
