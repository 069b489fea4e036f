//! Eeprom Module
//!
//! The emulated byte store.
//!
//! ## Responsibilities
//! - Own a fixed-size buffer, erased to `0xFF` on construction
//! - Bounds-check every byte, block and range access
//! - Group bytes into blocks of `block_size` for block operations
//! - Provide no-op lifecycle hooks (`begin`, `end`, `commit`, `flush`)
//!
//! ## Error Policy
//! Byte accessors degrade silently: out-of-range reads yield `0` and
//! out-of-range writes are dropped. Block accessors report `false` and leave
//! both sides untouched. Nothing in this module panics on caller input.

mod marshal;

use std::fmt;
use std::ops::Range;

use crate::config::{Device, EepromConfig};

/// Value of an erased EEPROM cell
pub const ERASED_BYTE: u8 = 0xFF;

/// RAM-backed emulation of a byte-addressable EEPROM
///
/// ## Ownership
/// The buffer is allocated once in the constructor and released on drop.
/// The type is not `Copy`; `clone()` deep-copies the buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Eeprom {
    /// How the device was attached (informational)
    device: Device,

    /// Backing storage, length fixed at construction
    data: Box<[u8]>,

    /// Block granularity, always `<= data.len()`
    block_size: usize,
}

impl Eeprom {
    /// Create a store of `size` bytes with an optional block size (0 = none)
    pub fn new(size: usize, block_size: usize) -> Self {
        Self::with_device(Device::Buffer, size, block_size)
    }

    /// Create a store for the given device
    ///
    /// Every device kind gets a private RAM buffer. A block size larger than
    /// the store is clamped to the store size.
    pub fn with_device(device: Device, size: usize, block_size: usize) -> Self {
        let clamped = block_size.min(size);
        if clamped != block_size {
            tracing::warn!(
                "Block size {} exceeds store size {}, clamping to {}",
                block_size,
                size,
                clamped
            );
        }

        tracing::debug!(
            "Created EEPROM store: device={:?}, size={}, block_size={}",
            device,
            size,
            clamped
        );

        Self {
            device,
            data: vec![ERASED_BYTE; size].into_boxed_slice(),
            block_size: clamped,
        }
    }

    /// Create a store from a config
    pub fn open(config: &EepromConfig) -> Self {
        Self::with_device(config.device, config.size, config.block_size)
    }

    /// Adopt an existing buffer as a plain store. `block_size` must already
    /// be `<= data.len()`.
    pub(crate) fn from_parts(data: Box<[u8]>, block_size: usize) -> Self {
        debug_assert!(block_size <= data.len());
        Self {
            device: Device::Buffer,
            data,
            block_size,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Device start hook. No effect on a RAM store.
    pub fn begin(&mut self) {
        tracing::trace!("begin: {:?}", self.device);
    }

    /// Device stop hook. No effect on a RAM store.
    pub fn end(&mut self) {
        tracing::trace!("end: {:?}", self.device);
    }

    /// Write back pending changes. Always succeeds: there is nothing to write back to.
    pub fn commit(&self) -> bool {
        true
    }

    /// Same as [`Eeprom::commit`].
    pub fn flush(&self) -> bool {
        true
    }

    // =========================================================================
    // Byte Access
    // =========================================================================

    /// Read one byte. Out-of-range addresses read as `0`.
    pub fn read(&self, address: i32) -> u8 {
        match self.checked_range(address.into(), 1) {
            Some(range) => self.data[range.start],
            None => {
                tracing::trace!("read out of range: address={}, size={}", address, self.size());
                0
            }
        }
    }

    /// Write one byte. Out-of-range writes are ignored.
    pub fn write(&mut self, address: i32, value: u8) {
        match self.checked_range(address.into(), 1) {
            Some(range) => self.data[range.start] = value,
            None => {
                tracing::trace!("write out of range: address={}, size={}", address, self.size());
            }
        }
    }

    /// Reset every byte to the erased value
    pub fn erase(&mut self) {
        self.data.fill(ERASED_BYTE);
    }

    // =========================================================================
    // Block Access
    // =========================================================================

    /// Copy block `block` into `dest[..block_size]`
    ///
    /// Returns `false` (and leaves `dest` untouched) if blocks are disabled,
    /// `dest` is shorter than one block, or the block lies outside the store.
    pub fn read_block(&self, block: i32, dest: &mut [u8]) -> bool {
        let Some(range) = self.block_range(block) else {
            return false;
        };
        if dest.len() < self.block_size {
            tracing::trace!(
                "read_block: buffer of {} bytes too short for block size {}",
                dest.len(),
                self.block_size
            );
            return false;
        }

        dest[..self.block_size].copy_from_slice(&self.data[range]);
        true
    }

    /// Copy `src[..block_size]` into block `block`
    ///
    /// Same failure conditions as [`Eeprom::read_block`]; the store is
    /// untouched on failure.
    pub fn write_block(&mut self, block: i32, src: &[u8]) -> bool {
        let Some(range) = self.block_range(block) else {
            return false;
        };
        if src.len() < self.block_size {
            tracing::trace!(
                "write_block: buffer of {} bytes too short for block size {}",
                src.len(),
                self.block_size
            );
            return false;
        }

        self.data[range].copy_from_slice(&src[..self.block_size]);
        true
    }

    /// Copy block `src` over block `dest`
    ///
    /// Both blocks must lie inside the store. Overlapping ranges are handled
    /// like `memmove`.
    pub fn copy_block(&mut self, dest: i32, src: i32) -> bool {
        let Some(src_range) = self.block_range(src) else {
            return false;
        };
        let Some(dest_range) = self.block_range(dest) else {
            return false;
        };

        self.data.copy_within(src_range, dest_range.start);
        true
    }

    /// Reset one block to the erased value
    pub fn erase_block(&mut self, block: i32) -> bool {
        match self.block_range(block) {
            Some(range) => {
                self.data[range].fill(ERASED_BYTE);
                true
            }
            None => false,
        }
    }

    /// Start address of `block`, if the whole block lies inside the store
    pub fn block_address(&self, block: i32) -> Option<usize> {
        self.block_range(block).map(|range| range.start)
    }

    /// Number of whole blocks in the store (0 when blocks are disabled)
    pub fn block_count(&self) -> usize {
        if self.block_size == 0 {
            return 0;
        }
        self.data.len() / self.block_size
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Total addressable bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Block granularity in bytes (0 = blocks disabled)
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Legacy alias of [`Eeprom::size`]; this is not a page count.
    pub fn pages(&self) -> usize {
        self.size()
    }

    /// Device discriminator the store was created with
    pub fn device(&self) -> Device {
        self.device
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Byte range `[address, address + len)` if it lies inside the store
    pub(crate) fn checked_range(&self, address: i64, len: usize) -> Option<Range<usize>> {
        let start = usize::try_from(address).ok()?;
        let end = start.checked_add(len)?;
        (end <= self.data.len()).then_some(start..end)
    }

    /// Byte range of `block`, or `None` when blocks are disabled or the
    /// block does not fit
    fn block_range(&self, block: i32) -> Option<Range<usize>> {
        if self.block_size == 0 {
            tracing::trace!("block access with block size 0");
            return None;
        }

        let range = usize::try_from(block)
            .ok()
            .and_then(|block| block.checked_mul(self.block_size))
            .and_then(|address| i64::try_from(address).ok())
            .and_then(|address| self.checked_range(address, self.block_size));

        if range.is_none() {
            tracing::trace!(
                "block {} out of range: block_size={}, size={}",
                block,
                self.block_size,
                self.size()
            );
        }
        range
    }

    /// Raw contents, for the image encoder
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Eeprom {
    fn default() -> Self {
        Self::open(&EepromConfig::default())
    }
}

impl fmt::Debug for Eeprom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Eeprom")
            .field("device", &self.device)
            .field("size", &self.data.len())
            .field("block_size", &self.block_size)
            .finish()
    }
}
