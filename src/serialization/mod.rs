//! Bitcoin transaction wire format serialization/deserialization
//!
//! Byte-exact encoders and decoders for the integer, script, input/output and
//! transaction layouts. Decoders read from any `std::io::Read`; the
//! transaction decoder also needs `Seek` to peek at the SegWit marker.
//!
//! All multi-byte integers are little-endian (Bitcoin standard).

pub mod inout;
pub mod int;
pub mod script;
pub mod transaction;
pub mod varint;

pub use inout::{deserialize_input, deserialize_output, serialize_input, serialize_output};
pub use script::{deserialize_script, serialize_script, serialize_script_raw};
pub use transaction::{
    deserialize_transaction, deserialize_transaction_with, read_transaction,
    serialize_transaction, serialize_transaction_legacy, serialize_transaction_segwit,
};
pub use varint::{decode_varint, encode_varint, encode_varint_u64, read_varint};
