//! Store images
//!
//! A self-describing, checksummed copy of a whole store. This is the
//! explicit way to duplicate or ship a store's contents as bytes.
//!
//! ## Image Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Header (26 bytes)                                            │
//! │   Magic: "RE2P" (4) | Version: u16 (2)                       │
//! │   Size: u64 (8) | BlockSize: u64 (8) | DataCRC: u32 (4)      │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Data (Size bytes)                                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//! All integers are little-endian. The device discriminator is not part of
//! the image; decoded stores are plain buffers.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::eeprom::Eeprom;
use crate::error::{EepromError, Result};

/// Magic bytes identifying a RamEeprom image
pub const MAGIC: &[u8; 4] = b"RE2P";

/// Current image format version
pub const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + Size (8) + BlockSize (8) + CRC (4) = 26 bytes
pub const HEADER_SIZE: usize = 26;

impl Eeprom {
    /// Encode the whole store as an image
    pub fn to_image(&self) -> Bytes {
        let data = self.as_slice();

        let mut buf = BytesMut::with_capacity(HEADER_SIZE + data.len());
        buf.put_slice(MAGIC);
        buf.put_u16_le(VERSION);
        buf.put_u64_le(data.len() as u64);
        buf.put_u64_le(self.block_size() as u64);
        buf.put_u32_le(crc32fast::hash(data));
        buf.put_slice(data);

        buf.freeze()
    }

    /// Rebuild a store from an image produced by [`Eeprom::to_image`]
    pub fn from_image(image: &[u8]) -> Result<Self> {
        if image.len() < HEADER_SIZE {
            return Err(EepromError::Image(format!(
                "Incomplete header: expected {} bytes, got {}",
                HEADER_SIZE,
                image.len()
            )));
        }

        let (mut header, data) = image.split_at(HEADER_SIZE);

        let mut magic = [0u8; 4];
        header.copy_to_slice(&mut magic);
        if &magic != MAGIC {
            return Err(EepromError::Image(format!(
                "Invalid magic: expected RE2P, got {:?}",
                magic
            )));
        }

        let version = header.get_u16_le();
        if version != VERSION {
            return Err(EepromError::Image(format!(
                "Unsupported image version: {}",
                version
            )));
        }

        let size = usize::try_from(header.get_u64_le())
            .map_err(|_| EepromError::Image("Store size does not fit in memory".to_string()))?;
        let block_size = usize::try_from(header.get_u64_le())
            .map_err(|_| EepromError::Image("Block size does not fit in memory".to_string()))?;
        let expected = header.get_u32_le();

        if data.len() != size {
            return Err(EepromError::Image(format!(
                "Data length mismatch: header says {} bytes, got {}",
                size,
                data.len()
            )));
        }

        if block_size > size {
            return Err(EepromError::Image(format!(
                "Block size {} exceeds store size {}",
                block_size, size
            )));
        }

        let actual = crc32fast::hash(data);
        if actual != expected {
            return Err(EepromError::ChecksumMismatch { expected, actual });
        }

        let eeprom = Eeprom::from_parts(data.into(), block_size);

        tracing::debug!(
            "Decoded EEPROM image: size={}, block_size={}",
            size,
            block_size
        );

        Ok(eeprom)
    }
}
