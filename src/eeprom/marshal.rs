//! Typed access
//!
//! Layers typed values on top of two all-or-nothing byte-range primitives:
//! - [`Eeprom::get`] / [`Eeprom::put`] copy the in-memory layout of a
//!   [`Pod`] value, like `memcpy` on the device
//! - [`Eeprom::get_object`] / [`Eeprom::put_object`] store serde types in
//!   bincode's fixed-int little-endian encoding

use std::mem::size_of;

use bytemuck::Pod;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{EepromError, Result};

use super::Eeprom;

impl Eeprom {
    // =========================================================================
    // Byte Ranges
    // =========================================================================

    /// Fill `dest` from `[address, address + dest.len())`
    ///
    /// Returns `false` and leaves `dest` untouched if any part of the range
    /// lies outside the store.
    pub fn read_into(&self, address: i32, dest: &mut [u8]) -> bool {
        match self.checked_range(address.into(), dest.len()) {
            Some(range) => {
                dest.copy_from_slice(&self.data[range]);
                true
            }
            None => {
                tracing::trace!(
                    "read_into out of range: address={}, len={}, size={}",
                    address,
                    dest.len(),
                    self.size()
                );
                false
            }
        }
    }

    /// Copy `src` to `[address, address + src.len())`
    ///
    /// Nothing is written unless the whole range lies inside the store.
    pub fn write_from(&mut self, address: i32, src: &[u8]) -> bool {
        match self.checked_range(address.into(), src.len()) {
            Some(range) => {
                self.data[range].copy_from_slice(src);
                true
            }
            None => {
                tracing::trace!(
                    "write_from out of range: address={}, len={}, size={}",
                    address,
                    src.len(),
                    self.size()
                );
                false
            }
        }
    }

    // =========================================================================
    // Plain Values
    // =========================================================================

    /// Read a `T` stored at `address`
    ///
    /// Returns `value` unchanged if `size_of::<T>()` bytes starting at
    /// `address` do not fit in the store.
    pub fn get<T: Pod>(&self, address: i32, value: T) -> T {
        let mut out = value;
        self.read_into(address, bytemuck::bytes_of_mut(&mut out));
        out
    }

    /// Store `value` at `address` and hand it back
    ///
    /// The store is only modified if all `size_of::<T>()` bytes fit.
    pub fn put<T: Pod>(&mut self, address: i32, value: T) -> T {
        self.write_from(address, bytemuck::bytes_of(&value));
        value
    }

    /// Whether a `T` at `address` lies fully inside the store
    pub fn fits<T: Pod>(&self, address: i32) -> bool {
        self.checked_range(address.into(), size_of::<T>()).is_some()
    }

    // =========================================================================
    // Structured Objects
    // =========================================================================

    /// Encode `value` with bincode and store it at `address`
    ///
    /// Returns the encoded length. Nothing is written if the encoding does
    /// not fit.
    pub fn put_object<T: Serialize + ?Sized>(&mut self, address: i32, value: &T) -> Result<usize> {
        let bytes = bincode::serialize(value)?;

        if !self.write_from(address, &bytes) {
            return Err(EepromError::OutOfRange {
                address: address.into(),
                len: bytes.len(),
                size: self.size(),
            });
        }

        Ok(bytes.len())
    }

    /// Decode a bincode value stored at `address`
    ///
    /// Decoding may consume any bytes up to the end of the store.
    pub fn get_object<T: DeserializeOwned>(&self, address: i32) -> Result<T> {
        let range = self
            .checked_range(address.into(), 0)
            .ok_or(EepromError::OutOfRange {
                address: address.into(),
                len: 0,
                size: self.size(),
            })?;

        let value = bincode::deserialize(&self.data[range.start..])?;
        Ok(value)
    }
}
