//! Fixed-width little-endian integers
//!
//! Slice helpers for encoding plus the stream readers every other codec
//! module builds on. Short reads surface as `CodecError::UnexpectedEof`.

use crate::error::{CodecError, Result};
use std::borrow::Cow;
use std::io::Read;

/// Encode `value` into exactly `width` bytes, least-significant byte first
///
/// The caller guarantees `value` fits in `width` bytes and `width <= 8`.
///
/// # Examples
///
/// ```
/// use blvm_txcodec::serialization::int::int_to_le;
///
/// assert_eq!(int_to_le(1, 4), vec![1, 0, 0, 0]);
/// assert_eq!(int_to_le(0x0102, 2), vec![0x02, 0x01]);
/// ```
pub fn int_to_le(value: u64, width: usize) -> Vec<u8> {
    debug_assert!(width <= 8, "width ({width}) must be at most 8 bytes");
    debug_assert!(
        width == 8 || value >> (width * 8) == 0,
        "value ({value}) must fit in {width} bytes"
    );
    value.to_le_bytes()[..width].to_vec()
}

/// Decode a little-endian unsigned integer of up to 8 bytes
pub fn le_to_int(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | byte as u64)
}

/// Read exactly `N` bytes
pub fn read_array<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read exactly `len` bytes
///
/// Grows the buffer as data arrives, so an absurd declared length on a short
/// stream fails with `UnexpectedEof` instead of allocating up front.
pub fn read_bytes<R: Read>(reader: &mut R, len: u64) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.by_ref().take(len).read_to_end(&mut buf)?;
    if (buf.len() as u64) < len {
        return Err(CodecError::UnexpectedEof(Cow::Owned(format!(
            "wanted {len} bytes, got {}",
            buf.len()
        ))));
    }
    Ok(buf)
}

pub fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    Ok(read_array::<R, 1>(reader)?[0])
}

pub fn read_u16_le<R: Read>(reader: &mut R) -> Result<u16> {
    Ok(u16::from_le_bytes(read_array(reader)?))
}

pub fn read_u32_le<R: Read>(reader: &mut R) -> Result<u32> {
    Ok(u32::from_le_bytes(read_array(reader)?))
}

pub fn read_u64_le<R: Read>(reader: &mut R) -> Result<u64> {
    Ok(u64::from_le_bytes(read_array(reader)?))
}
