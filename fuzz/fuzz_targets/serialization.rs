#![no_main]
use blvm_txcodec::serialization::script::{deserialize_script, serialize_script};
use blvm_txcodec::serialization::transaction::{deserialize_transaction_with, serialize_transaction};
use blvm_txcodec::serialization::varint::{decode_varint, encode_varint_u64};
use blvm_txcodec::CodecConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let config = CodecConfig::default();

    // Transaction: after one decode/encode pass the bytes are canonical, so a
    // second pass must reproduce them exactly
    if let Ok(tx) = deserialize_transaction_with(data, None, &config) {
        // A legacy encoding with zero inputs reads back as a segwit candidate
        if !tx.segwit && tx.inputs.is_empty() {
            return;
        }
        if let Ok(first) = serialize_transaction(&tx) {
            if let Ok(again) = deserialize_transaction_with(&first, None, &config) {
                let second = serialize_transaction(&again)
                    .expect("re-decoded transaction must encode");
                assert_eq!(first, second, "re-encoding must be a fixed point");
                assert_eq!(tx.id().ok(), again.id().ok(), "txid must survive re-encoding");
            }
        }
    }

    // Script: same fixed-point property
    if let Ok(script) = deserialize_script(&mut &data[..]) {
        if let Ok(first) = serialize_script(&script) {
            if let Ok(again) = deserialize_script(&mut &first[..]) {
                assert_eq!(serialize_script(&again).ok(), Some(first));
            }
        }
    }

    // VarInt: encode of a decoded value decodes to the same value
    if let Ok((value, _)) = decode_varint(data) {
        let encoded = encode_varint_u64(value);
        assert_eq!(decode_varint(&encoded), Ok((value, encoded.len())));
    }
});
