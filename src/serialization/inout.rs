//! Transaction input and output record serialization/deserialization
//!
//! Input:  prev txid (32, wire order) | prev index (u32 LE) | script_sig | sequence (u32 LE)
//! Output: value (u64 LE) | script_pubkey
//!
//! The previous txid is stored reversed relative to the wire so that it
//! matches the usual display order.

use super::int::{read_array, read_u32_le, read_u64_le};
use super::script::{deserialize_script, serialize_script};
use crate::error::Result;
use crate::types::{Hash, OutPoint, TransactionInput, TransactionOutput};
use std::fmt;
use std::io::Read;

/// Serialize one input (witness is never part of the input record)
pub fn serialize_input(input: &TransactionInput) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(41 + input.script_sig.len());

    let mut wire_hash: Hash = input.prevout.hash;
    wire_hash.reverse();
    result.extend_from_slice(&wire_hash);
    result.extend_from_slice(&input.prevout.index.to_le_bytes());
    result.extend_from_slice(&serialize_script(&input.script_sig)?);
    result.extend_from_slice(&input.sequence.to_le_bytes());

    Ok(result)
}

/// Deserialize one input; `witness` is left unset
pub fn deserialize_input<R: Read>(reader: &mut R) -> Result<TransactionInput> {
    let mut hash: Hash = read_array(reader)?;
    hash.reverse();
    let index = read_u32_le(reader)?;
    let script_sig = deserialize_script(reader)?;
    let sequence = read_u32_le(reader)?;

    Ok(TransactionInput {
        prevout: OutPoint { hash, index },
        script_sig,
        sequence,
        witness: None,
    })
}

pub fn serialize_output(output: &TransactionOutput) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(9 + output.script_pubkey.len());
    result.extend_from_slice(&output.value.to_le_bytes());
    result.extend_from_slice(&serialize_script(&output.script_pubkey)?);
    Ok(result)
}

pub fn deserialize_output<R: Read>(reader: &mut R) -> Result<TransactionOutput> {
    let value = read_u64_le(reader)?;
    let script_pubkey = deserialize_script(reader)?;
    Ok(TransactionOutput {
        value,
        script_pubkey,
    })
}

impl TransactionInput {
    pub fn serialize(&self) -> Result<Vec<u8>> {
        serialize_input(self)
    }

    pub fn parse<R: Read>(reader: &mut R) -> Result<TransactionInput> {
        deserialize_input(reader)
    }
}

impl TransactionOutput {
    pub fn serialize(&self) -> Result<Vec<u8>> {
        serialize_output(self)
    }

    pub fn parse<R: Read>(reader: &mut R) -> Result<TransactionOutput> {
        deserialize_output(reader)
    }
}

impl fmt::Display for TransactionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", hex::encode(self.prevout.hash), self.prevout.index)
    }
}

impl fmt::Display for TransactionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.value, self.script_pubkey)
    }
}
