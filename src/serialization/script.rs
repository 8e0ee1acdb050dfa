//! Script command stream serialization/deserialization
//!
//! On the wire a script is a VarInt byte length followed by its commands.
//! Each command starts with one byte:
//! - 0x01..=0x4b: push that many following bytes
//! - 0x4c (OP_PUSHDATA1): 1-byte length, then data
//! - 0x4d (OP_PUSHDATA2): 2-byte little-endian length, then data
//! - anything else: a bare opcode

use super::int::{read_bytes, read_u16_le, read_u8};
use super::varint::{encode_varint_u64, read_varint};
use crate::error::{CodecError, Result};
use crate::opcodes::{opcode_name, MAX_DIRECT_PUSH, MAX_SCRIPT_ELEMENT_SIZE, OP_PUSHDATA1, OP_PUSHDATA2};
use crate::types::{Command, Script};
use std::fmt;
use std::io::Read;

/// Serialize the command stream without the length prefix
///
/// Pushes use the smallest admissible form. A push of exactly 75 bytes uses
/// the direct form, the same range the decoder accepts.
pub fn serialize_script_raw(script: &Script) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for cmd in &script.cmds {
        match cmd {
            Command::Opcode(op) => result.push(*op),
            Command::Push(data) => {
                let len = data.len();
                if len <= MAX_DIRECT_PUSH as usize {
                    result.push(len as u8);
                } else if len <= 0xff {
                    result.push(OP_PUSHDATA1);
                    result.push(len as u8);
                } else if len <= MAX_SCRIPT_ELEMENT_SIZE {
                    result.push(OP_PUSHDATA2);
                    result.extend_from_slice(&(len as u16).to_le_bytes());
                } else {
                    return Err(CodecError::UnencodableElement(len));
                }
                result.extend_from_slice(data);
            }
        }
    }

    Ok(result)
}

/// Serialize a script with its VarInt length prefix
pub fn serialize_script(script: &Script) -> Result<Vec<u8>> {
    let raw = serialize_script_raw(script)?;
    let mut result = encode_varint_u64(raw.len() as u64);
    result.extend_from_slice(&raw);
    Ok(result)
}

/// Deserialize a length-prefixed script from a stream
///
/// The bytes consumed by the commands must add up to exactly the declared
/// length; a push running past it is a `ScriptLengthMismatch`.
pub fn deserialize_script<R: Read>(reader: &mut R) -> Result<Script> {
    let length = read_varint(reader)?;
    let mut cmds = Vec::new();
    let mut count: u64 = 0;

    while count < length {
        let current = read_u8(reader)?;
        count += 1;

        match current {
            1..=MAX_DIRECT_PUSH => {
                let n = current as u64;
                cmds.push(Command::Push(read_bytes(reader, n)?));
                count += n;
            }
            OP_PUSHDATA1 => {
                let n = read_u8(reader)? as u64;
                cmds.push(Command::Push(read_bytes(reader, n)?));
                count += n + 1;
            }
            OP_PUSHDATA2 => {
                let n = read_u16_le(reader)? as u64;
                cmds.push(Command::Push(read_bytes(reader, n)?));
                count += n + 2;
            }
            op => cmds.push(Command::Opcode(op)),
        }
    }

    if count != length {
        return Err(CodecError::ScriptLengthMismatch {
            declared: length,
            consumed: count,
        });
    }

    log::trace!("decoded script: {} commands, {} bytes", cmds.len(), length);
    Ok(Script { cmds })
}

impl Script {
    pub fn serialize(&self) -> Result<Vec<u8>> {
        serialize_script(self)
    }

    pub fn raw_serialize(&self) -> Result<Vec<u8>> {
        serialize_script_raw(self)
    }

    pub fn parse<R: Read>(reader: &mut R) -> Result<Script> {
        deserialize_script(reader)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Opcode(op) => match opcode_name(*op) {
                Some(name) => f.write_str(name),
                None => write!(f, "OP_[{op}]"),
            },
            Command::Push(data) => f.write_str(&hex::encode(data)),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.cmds.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}
