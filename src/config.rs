//! Configuration for RamEeprom
//!
//! Describes the emulated device: how it is attached, how many bytes it
//! holds and how those bytes group into blocks.

use crate::error::{EepromError, Result};

/// Default store size in bytes
pub const DEFAULT_SIZE: usize = 512;

/// Configuration for an emulated EEPROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EepromConfig {
    /// How the device is attached. Informational only: every variant is
    /// backed by a private RAM buffer.
    pub device: Device,

    /// Total addressable bytes
    pub size: usize,

    /// Block granularity in bytes (0 disables block operations)
    pub block_size: usize,
}

/// How the emulated device would be reached on real hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    /// A buffer owned by the store itself
    #[default]
    Buffer,

    /// An external device handle (bus address, chip select, ...)
    Address(u32),
}

impl Default for EepromConfig {
    fn default() -> Self {
        Self {
            device: Device::Buffer,
            size: DEFAULT_SIZE,
            block_size: 0,
        }
    }
}

impl EepromConfig {
    /// Create a new config builder
    pub fn builder() -> EepromConfigBuilder {
        EepromConfigBuilder::default()
    }

    /// Strict check for callers that would rather reject an oversized block
    /// than have it clamped at construction.
    pub fn validate(&self) -> Result<()> {
        if self.block_size > self.size {
            return Err(EepromError::Config(format!(
                "block size {} exceeds store size {}",
                self.block_size, self.size
            )));
        }
        Ok(())
    }
}

/// Builder for EepromConfig
#[derive(Default)]
pub struct EepromConfigBuilder {
    config: EepromConfig,
}

impl EepromConfigBuilder {
    /// Set the device discriminator
    pub fn device(mut self, device: Device) -> Self {
        self.config.device = device;
        self
    }

    /// Set the store size (in bytes)
    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    /// Set the block size (in bytes, 0 disables blocks)
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.config.block_size = block_size;
        self
    }

    pub fn build(self) -> EepromConfig {
        self.config
    }
}
