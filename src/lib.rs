//! # blvm-txcodec
//!
//! Byte-exact codec for Bitcoin transactions.
//!
//! This crate decodes and encodes the wire representation of transactions in
//! both the legacy and the segregated-witness layout, including the script
//! command streams embedded in inputs and outputs, and computes transaction
//! identifiers. It does not execute scripts, verify signatures or talk to the
//! network.
//!
//! ## Layers
//!
//! - `serialization::int` / `serialization::varint`: fixed-width and VarInt integers
//! - `serialization::script`: opcode / data-push command streams
//! - `serialization::inout`: input and output records
//! - `serialization::transaction`: whole transactions, format detection, witnesses
//! - `crypto`: double SHA256 for transaction ids
//!
//! ## Usage
//!
//! ```rust
//! use blvm_txcodec::{Command, Script, Transaction, TransactionInput, TransactionOutput};
//!
//! let tx = Transaction::new(
//!     1,
//!     vec![TransactionInput::new([0x11; 32], 0)],
//!     vec![TransactionOutput::new(1000, Script::new(vec![Command::Opcode(0x51)]))],
//!     0,
//! );
//! let bytes = tx.serialize().unwrap();
//! let decoded = Transaction::from_bytes(&bytes, None).unwrap();
//! assert_eq!(decoded.id().unwrap(), tx.id().unwrap());
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod opcodes;
pub mod serialization;
pub mod types;

pub use config::{CodecConfig, DecodeLimits};
pub use error::{CodecError, Result};
pub use types::*;
