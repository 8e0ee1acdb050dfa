//! Transaction wire format serialization/deserialization
//!
//! Legacy:
//! `version | varint(n_in) | inputs | varint(n_out) | outputs | lock_time`
//!
//! SegWit:
//! `version | 0x00 0x01 | varint(n_in) | inputs | varint(n_out) | outputs | witnesses | lock_time`
//!
//! The layout is picked on decode by peeking at the byte after the version,
//! and on encode by `Transaction::segwit`.

use super::inout::{deserialize_input, deserialize_output, serialize_input, serialize_output};
use super::int::{read_array, read_bytes, read_u32_le, read_u8};
use super::varint::{encode_varint_u64, read_varint};
use crate::config::{get_codec_config, CodecConfig, DecodeLimits};
use crate::crypto::hash256;
use crate::error::{CodecError, Result};
use crate::types::{Hash, Network, Transaction, WitnessItem};
use std::borrow::Cow;
use std::fmt;
use std::io::{Cursor, Read, Seek, SeekFrom};

/// Marker and flag bytes that follow the version in a SegWit transaction
pub const SEGWIT_MARKER: [u8; 2] = [0x00, 0x01];

/// Serialize a transaction in the layout selected by its `segwit` flag
pub fn serialize_transaction(tx: &Transaction) -> Result<Vec<u8>> {
    if tx.segwit {
        serialize_transaction_segwit(tx)
    } else {
        serialize_transaction_legacy(tx)
    }
}

/// Serialize without marker or witness data (the form hashed for the txid)
pub fn serialize_transaction_legacy(tx: &Transaction) -> Result<Vec<u8>> {
    let mut result = Vec::new();
    result.extend_from_slice(&tx.version.to_le_bytes());
    write_inputs_and_outputs(&mut result, tx)?;
    result.extend_from_slice(&tx.lock_time.to_le_bytes());
    Ok(result)
}

/// Serialize with marker and witness data
///
/// Every input must have a witness attached, even if it is empty.
pub fn serialize_transaction_segwit(tx: &Transaction) -> Result<Vec<u8>> {
    let mut result = Vec::new();
    result.extend_from_slice(&tx.version.to_le_bytes());
    result.extend_from_slice(&SEGWIT_MARKER);
    write_inputs_and_outputs(&mut result, tx)?;

    for (i, input) in tx.inputs.iter().enumerate() {
        let witness = input.witness.as_ref().ok_or(CodecError::MissingWitness(i))?;

        // One fixed byte; from 0xfd upwards the decoder would read a VarInt prefix
        if witness.len() >= 0xfd {
            return Err(CodecError::IntegerRange(Cow::Owned(format!(
                "input {i} has {} witness items, at most 252 fit in one byte",
                witness.len()
            ))));
        }
        result.push(witness.len() as u8);

        for item in witness {
            match item {
                WitnessItem::Empty => result.push(0x00),
                WitnessItem::Data(data) => {
                    if data.len() < 0xfd {
                        result.push(data.len() as u8);
                    } else {
                        result.extend_from_slice(&encode_varint_u64(data.len() as u64));
                    }
                    result.extend_from_slice(data);
                }
            }
        }
    }

    result.extend_from_slice(&tx.lock_time.to_le_bytes());
    log::debug!(
        "serialized segwit transaction: {} inputs, {} outputs, {} bytes",
        tx.inputs.len(),
        tx.outputs.len(),
        result.len()
    );
    Ok(result)
}

fn write_inputs_and_outputs(result: &mut Vec<u8>, tx: &Transaction) -> Result<()> {
    result.extend_from_slice(&encode_varint_u64(tx.inputs.len() as u64));
    for input in &tx.inputs {
        result.extend_from_slice(&serialize_input(input)?);
    }

    result.extend_from_slice(&encode_varint_u64(tx.outputs.len() as u64));
    for output in &tx.outputs {
        result.extend_from_slice(&serialize_output(output)?);
    }
    Ok(())
}

/// Deserialize a transaction from bytes using the global config
pub fn deserialize_transaction(data: &[u8]) -> Result<Transaction> {
    deserialize_transaction_with(data, None, &get_codec_config())
}

/// Deserialize a transaction from bytes
///
/// `network` overrides `config.default_network` when given.
pub fn deserialize_transaction_with(
    data: &[u8],
    network: Option<Network>,
    config: &CodecConfig,
) -> Result<Transaction> {
    let mut cursor = Cursor::new(data);
    let tx = read_transaction(&mut cursor, network, config)?;

    let remaining = data.len() - cursor.position() as usize;
    if remaining > 0 {
        if config.reject_trailing_bytes {
            return Err(CodecError::TrailingBytes(remaining));
        }
        log::debug!("ignoring {remaining} trailing bytes after transaction");
    }

    Ok(tx)
}

/// Read one transaction from a positioned stream
///
/// Leaves the stream just past the lock time.
pub fn read_transaction<R: Read + Seek>(
    reader: &mut R,
    network: Option<Network>,
    config: &CodecConfig,
) -> Result<Transaction> {
    let network = network.unwrap_or(config.default_network);

    let start = reader.stream_position()?;
    let _version: [u8; 4] = read_array(reader)?;
    let flag = read_u8(reader)?;
    reader.seek(SeekFrom::Start(start))?;

    let tx = if flag == 0x00 {
        log::debug!("byte after version is 0x00, decoding as segwit");
        read_segwit(reader, network, &config.limits)?
    } else {
        read_legacy(reader, network, &config.limits)?
    };

    log::debug!(
        "decoded transaction: version {}, {} inputs, {} outputs, segwit {}",
        tx.version,
        tx.inputs.len(),
        tx.outputs.len(),
        tx.segwit
    );
    Ok(tx)
}

fn read_legacy<R: Read>(reader: &mut R, network: Network, limits: &DecodeLimits) -> Result<Transaction> {
    let version = read_u32_le(reader)?;
    let mut tx = read_inputs_and_outputs(reader, version, limits)?;
    tx.lock_time = read_u32_le(reader)?;
    tx.network = network;
    Ok(tx)
}

fn read_segwit<R: Read>(reader: &mut R, network: Network, limits: &DecodeLimits) -> Result<Transaction> {
    let version = read_u32_le(reader)?;

    let marker: [u8; 2] = read_array(reader)?;
    if marker != SEGWIT_MARKER {
        return Err(CodecError::Format(marker[0], marker[1]));
    }

    let mut tx = read_inputs_and_outputs(reader, version, limits)?;

    // Witness stacks come after all outputs, one per input in order
    for input in tx.inputs.iter_mut() {
        let num_items = read_count(reader, "witness item", limits.max_witness_items)?;
        let mut items = Vec::new();
        for _ in 0..num_items {
            let item_len = read_varint(reader)?;
            if item_len == 0 {
                items.push(WitnessItem::Empty);
            } else {
                items.push(WitnessItem::Data(read_bytes(reader, item_len)?));
            }
        }
        log::trace!("witness for {}: {} items", input, items.len());
        input.attach_witness(items);
    }

    tx.lock_time = read_u32_le(reader)?;
    tx.segwit = true;
    tx.network = network;
    Ok(tx)
}

fn read_inputs_and_outputs<R: Read>(
    reader: &mut R,
    version: u32,
    limits: &DecodeLimits,
) -> Result<Transaction> {
    let input_count = read_count(reader, "input", limits.max_inputs)?;
    let mut inputs = Vec::new();
    for _ in 0..input_count {
        inputs.push(deserialize_input(reader)?);
    }

    let output_count = read_count(reader, "output", limits.max_outputs)?;
    let mut outputs = Vec::new();
    for _ in 0..output_count {
        outputs.push(deserialize_output(reader)?);
    }

    Ok(Transaction::new(version, inputs, outputs, 0))
}

fn read_count<R: Read>(reader: &mut R, what: &'static str, limit: u64) -> Result<u64> {
    let count = read_varint(reader)?;
    if count > limit {
        return Err(CodecError::LimitExceeded { what, count, limit });
    }
    Ok(count)
}

impl Transaction {
    /// Decode from a positioned stream
    pub fn parse<R: Read + Seek>(reader: &mut R, network: Option<Network>) -> Result<Transaction> {
        read_transaction(reader, network, &get_codec_config())
    }

    pub fn from_bytes(data: &[u8], network: Option<Network>) -> Result<Transaction> {
        deserialize_transaction_with(data, network, &get_codec_config())
    }

    pub fn from_hex(tx_hex: &str, network: Option<Network>) -> Result<Transaction> {
        let data = hex::decode(tx_hex.trim())?;
        Self::from_bytes(&data, network)
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        serialize_transaction(self)
    }

    pub fn serialize_legacy(&self) -> Result<Vec<u8>> {
        serialize_transaction_legacy(self)
    }

    pub fn serialize_segwit(&self) -> Result<Vec<u8>> {
        serialize_transaction_segwit(self)
    }

    /// Double SHA256 of the legacy serialization, in hash (wire) byte order
    pub fn hash(&self) -> Result<Hash> {
        Ok(hash256(&self.serialize_legacy()?))
    }

    /// Transaction id bytes in display order
    pub fn txid(&self) -> Result<Hash> {
        let mut txid = self.hash()?;
        txid.reverse();
        Ok(txid)
    }

    /// Transaction id as lowercase hex
    pub fn id(&self) -> Result<String> {
        Ok(hex::encode(self.txid()?))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Ok(id) => writeln!(f, "tx id: {id}")?,
            Err(err) => writeln!(f, "tx id: <{err}>")?,
        }
        writeln!(f, "version: {}", self.version)?;
        writeln!(f, "tx_ins:")?;
        for input in &self.inputs {
            writeln!(f, "\t{input}")?;
        }
        writeln!(f, "tx_outs:")?;
        for output in &self.outputs {
            writeln!(f, "\t{output}")?;
        }
        write!(f, "locktime: {}", self.lock_time)
    }
}
