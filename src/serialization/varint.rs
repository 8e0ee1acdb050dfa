//! Bitcoin VarInt encoding/decoding
//!
//! VarInt (Variable Integer) is a compact encoding for integers used throughout
//! Bitcoin's wire format. It uses 1-9 bytes depending on the value.
//!
//! Encoding rules:
//! - If value < 0xfd: single byte
//! - If value <= 0xffff: 0xfd prefix + 2 bytes (little-endian)
//! - If value <= 0xffffffff: 0xfe prefix + 4 bytes (little-endian)
//! - If value <= u64::MAX: 0xff prefix + 8 bytes (little-endian)
//! - Anything larger is not representable
//!
//! Decoding is lenient: a value written with a wider prefix than necessary is
//! accepted as-is.

use super::int::{read_u16_le, read_u32_le, read_u64_le, read_u8};
use crate::error::{CodecError, Result};
use std::borrow::Cow;
use std::io::Read;

/// Encode a value as a Bitcoin VarInt
///
/// Takes a `u128` so that out-of-range requests can be reported rather than
/// truncated.
///
/// # Examples
///
/// ```
/// use blvm_txcodec::serialization::varint::encode_varint;
///
/// assert_eq!(encode_varint(252).unwrap(), vec![252]);
/// assert_eq!(encode_varint(253).unwrap(), vec![0xfd, 253, 0]);
/// assert!(encode_varint(1u128 << 64).is_err());
/// ```
pub fn encode_varint(value: u128) -> Result<Vec<u8>> {
    let value = u64::try_from(value).map_err(|_| {
        CodecError::IntegerRange(Cow::Owned(format!(
            "{value} does not fit in a VarInt"
        )))
    })?;
    Ok(encode_varint_u64(value))
}

/// Encode a u64 value as a Bitcoin VarInt
///
/// # Examples
///
/// ```
/// use blvm_txcodec::serialization::varint::encode_varint_u64;
///
/// assert_eq!(encode_varint_u64(0), vec![0]);
/// assert_eq!(encode_varint_u64(65535), vec![0xfd, 255, 255]);
/// assert_eq!(encode_varint_u64(65536), vec![0xfe, 0, 0, 1, 0]);
/// ```
pub fn encode_varint_u64(value: u64) -> Vec<u8> {
    if value < 0xfd {
        vec![value as u8]
    } else if value <= 0xffff {
        let mut result = vec![0xfd];
        result.extend_from_slice(&(value as u16).to_le_bytes());
        debug_assert_eq!(result.len(), 3);
        result
    } else if value <= 0xffffffff {
        let mut result = vec![0xfe];
        result.extend_from_slice(&(value as u32).to_le_bytes());
        debug_assert_eq!(result.len(), 5);
        result
    } else {
        let mut result = vec![0xff];
        result.extend_from_slice(&value.to_le_bytes());
        debug_assert_eq!(result.len(), 9);
        result
    }
}

/// Decode a Bitcoin VarInt from bytes
///
/// Returns the decoded value and the number of bytes consumed.
///
/// # Examples
///
/// ```
/// use blvm_txcodec::serialization::varint::decode_varint;
///
/// assert_eq!(decode_varint(&[0]), Ok((0, 1)));
/// assert_eq!(decode_varint(&[0xfd, 253, 0]), Ok((253, 3)));
/// assert_eq!(decode_varint(&[0xfe, 0, 0, 1, 0]), Ok((65536, 5)));
/// assert!(decode_varint(&[]).is_err());
/// ```
pub fn decode_varint(data: &[u8]) -> Result<(u64, usize)> {
    let mut cursor = data;
    let value = read_varint(&mut cursor)?;
    Ok((value, data.len() - cursor.len()))
}

/// Read a Bitcoin VarInt from a stream
pub fn read_varint<R: Read>(reader: &mut R) -> Result<u64> {
    let first_byte = read_u8(reader)?;
    let value = match first_byte {
        0xfd => read_u16_le(reader)? as u64,
        0xfe => read_u32_le(reader)? as u64,
        0xff => read_u64_le(reader)?,
        b => b as u64,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_varint_small() {
        assert_eq!(encode_varint_u64(0), vec![0]);
        assert_eq!(encode_varint_u64(1), vec![1]);
        assert_eq!(encode_varint_u64(252), vec![252]);
    }

    #[test]
    fn test_encode_varint_medium() {
        assert_eq!(encode_varint_u64(253), vec![0xfd, 253, 0]);
        assert_eq!(encode_varint_u64(255), vec![0xfd, 255, 0]);
        assert_eq!(encode_varint_u64(256), vec![0xfd, 0, 1]);
        assert_eq!(encode_varint_u64(65535), vec![0xfd, 255, 255]);
    }

    #[test]
    fn test_encode_varint_large() {
        assert_eq!(encode_varint_u64(65536), vec![0xfe, 0, 0, 1, 0]);
        assert_eq!(encode_varint_u64(0xffffffff), vec![0xfe, 255, 255, 255, 255]);
    }

    #[test]
    fn test_encode_varint_huge() {
        assert_eq!(
            encode_varint_u64(0x100000000),
            vec![0xff, 0, 0, 0, 0, 1, 0, 0, 0]
        );
        assert_eq!(encode_varint_u64(u64::MAX), vec![0xff; 9]);
    }

    #[test]
    fn test_encode_varint_out_of_range() {
        assert!(matches!(
            encode_varint(1u128 << 64),
            Err(CodecError::IntegerRange(_))
        ));
        assert!(matches!(
            encode_varint(u128::MAX),
            Err(CodecError::IntegerRange(_))
        ));
        assert_eq!(encode_varint(u64::MAX as u128).unwrap(), vec![0xff; 9]);
    }

    #[test]
    fn test_decode_varint_insufficient_bytes() {
        assert!(decode_varint(&[]).is_err());
        assert!(decode_varint(&[0xfd]).is_err());
        assert!(decode_varint(&[0xfd, 0]).is_err());
        assert!(decode_varint(&[0xfe, 0, 0, 0]).is_err());
        assert!(decode_varint(&[0xff, 0, 0, 0, 0, 0, 0, 0]).is_err());
    }

    #[test]
    fn test_decode_varint_accepts_wide_prefix() {
        // 252 would normally be a single byte
        assert_eq!(decode_varint(&[0xfd, 252, 0]), Ok((252, 3)));
        assert_eq!(decode_varint(&[0xfe, 1, 0, 0, 0]), Ok((1, 5)));
    }

    #[test]
    fn test_decode_varint_ignores_trailing_data() {
        assert_eq!(decode_varint(&[0x05, 0xaa, 0xbb]), Ok((5, 1)));
        assert_eq!(decode_varint(&[0xfd, 0x00, 0x01, 0xaa]), Ok((256, 3)));
    }

    #[test]
    fn test_read_varint_advances_stream() {
        let data = [0xfd, 0x34, 0x12, 0x07];
        let mut cursor = &data[..];
        assert_eq!(read_varint(&mut cursor).unwrap(), 0x1234);
        assert_eq!(read_varint(&mut cursor).unwrap(), 7);
        assert!(cursor.is_empty());
    }
}
