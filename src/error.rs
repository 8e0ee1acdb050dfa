//! Error types for transaction encoding and decoding

use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum CodecError {
    /// Segwit marker present but not exactly `0x00 0x01`
    #[error("Invalid segwit marker: expected 0x00 0x01, got {0:#04x} {1:#04x}")]
    Format(u8, u8),

    #[error("Script length mismatch: declared {declared} bytes, consumed {consumed}")]
    ScriptLengthMismatch { declared: u64, consumed: u64 },

    /// Data push whose length has no push/pushdata1/pushdata2 encoding
    #[error("Unencodable script element: {0} bytes")]
    UnencodableElement(usize),

    #[error("Integer out of range: {0}")]
    IntegerRange(Cow<'static, str>),

    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(Cow<'static, str>),

    #[error("Invalid hex: {0}")]
    InvalidHex(Cow<'static, str>),

    #[error("Limit exceeded: {what} count {count} is above {limit}")]
    LimitExceeded {
        what: &'static str,
        count: u64,
        limit: u64,
    },

    #[error("Input {0} has no witness attached")]
    MissingWitness(usize),

    #[error("{0} trailing bytes after transaction")]
    TrailingBytes(usize),

    #[error("I/O error: {0}")]
    Io(Cow<'static, str>),
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => CodecError::UnexpectedEof(Cow::Owned(err.to_string())),
            _ => CodecError::Io(Cow::Owned(err.to_string())),
        }
    }
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(Cow::Owned(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
