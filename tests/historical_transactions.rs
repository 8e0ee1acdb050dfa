//! Historical transaction decoding tests
//!
//! Real transactions decoded from raw hex, re-encoded byte-for-byte, and
//! checked against their well-known transaction ids.


use blvm_txcodec::{Command, Network, Transaction, WitnessItem};
use test_helpers::*;

#[test]
fn test_block_170_decodes() {
    init_logging();
    let tx = Transaction::from_hex(BLOCK_170_TX_HEX, None).unwrap();

    assert!(!tx.segwit);
    assert_eq!(tx.version, 1);
    assert_eq!(tx.lock_time, 0);
    assert_eq!(tx.inputs.len(), 1);
    assert_eq!(tx.outputs.len(), 2);

    let input = &tx.inputs[0];
    assert_eq!(
        hex::encode(input.prevout.hash),
        "0437cd7f8525ceed2324359c2d0ba26006d92d856a9c20fa0241106ee5a597c9"
    );
    assert_eq!(input.prevout.index, 0);
    assert_eq!(input.sequence, 0xffffffff);
    assert!(input.witness.is_none());
    assert_eq!(input.script_sig.len(), 1);
    assert!(matches!(&input.script_sig.cmds[0], Command::Push(sig) if sig.len() == 71));

    assert_eq!(tx.outputs[0].value, 1_000_000_000);
    assert_eq!(tx.outputs[1].value, 4_000_000_000);
    for output in &tx.outputs {
        assert_eq!(output.script_pubkey.len(), 2);
        assert!(matches!(&output.script_pubkey.cmds[0], Command::Push(key) if key.len() == 65));
        assert_eq!(output.script_pubkey.cmds[1], Command::Opcode(0xac));
    }
}

#[test]
fn test_block_170_txid() {
    let tx = Transaction::from_hex(BLOCK_170_TX_HEX, None).unwrap();
    assert_eq!(tx.id().unwrap(), BLOCK_170_TXID);

    let mut hash = tx.hash().unwrap();
    hash.reverse();
    assert_eq!(hex::encode(hash), BLOCK_170_TXID);
}

#[test]
fn test_block_170_round_trip() {
    let bytes = hex::decode(BLOCK_170_TX_HEX).unwrap();
    let tx = Transaction::from_bytes(&bytes, None).unwrap();
    assert_eq!(tx.serialize().unwrap(), bytes);
    assert_eq!(tx.serialize_legacy().unwrap(), bytes);
}

#[test]
fn test_bip143_segwit_decodes() {
    init_logging();
    let tx = Transaction::from_hex(BIP143_P2WPKH_TX_HEX, Some(Network::Testnet)).unwrap();

    assert!(tx.segwit);
    assert_eq!(tx.network, Network::Testnet);
    assert_eq!(tx.version, 1);
    assert_eq!(tx.lock_time, 17);
    assert_eq!(tx.inputs.len(), 2);
    assert_eq!(tx.outputs.len(), 2);

    assert_eq!(tx.inputs[0].sequence, 0xffffffee);
    assert_eq!(tx.inputs[0].witness, Some(vec![]));

    assert!(tx.inputs[1].script_sig.is_empty());
    assert_eq!(tx.inputs[1].prevout.index, 1);
    let witness = tx.inputs[1].witness.as_ref().unwrap();
    assert_eq!(witness.len(), 2);
    assert!(matches!(&witness[0], WitnessItem::Data(sig) if sig.len() == 71));
    assert!(matches!(&witness[1], WitnessItem::Data(key) if key.len() == 33));

    assert_eq!(tx.outputs[0].value, 112_340_000);
    assert_eq!(tx.outputs[1].value, 223_450_000);
    assert_eq!(
        tx.outputs[0].script_pubkey.to_string(),
        "OP_DUP OP_HASH160 8280b37df378db99f66f85c95a783a76ac7a6d59 OP_EQUALVERIFY OP_CHECKSIG"
    );
}

#[test]
fn test_bip143_segwit_round_trip_and_txid() {
    let bytes = hex::decode(BIP143_P2WPKH_TX_HEX).unwrap();
    let tx = Transaction::from_bytes(&bytes, None).unwrap();

    assert_eq!(tx.serialize().unwrap(), bytes);
    assert_eq!(
        hex::encode(tx.serialize_legacy().unwrap()),
        BIP143_P2WPKH_LEGACY_HEX
    );
    assert_eq!(tx.id().unwrap(), BIP143_P2WPKH_TXID);
}

#[test]
fn test_segwit_txid_matches_stripped_form() {
    let segwit = Transaction::from_hex(BIP143_P2WPKH_TX_HEX, None).unwrap();
    let stripped = Transaction::from_hex(BIP143_P2WPKH_LEGACY_HEX, None).unwrap();

    assert!(!stripped.segwit);
    assert_eq!(segwit.id().unwrap(), stripped.id().unwrap());
}

#[test]
fn test_display() {
    let tx = Transaction::from_hex(BLOCK_170_TX_HEX, None).unwrap();
    let rendered = tx.to_string();

    assert!(rendered.starts_with(&format!("tx id: {BLOCK_170_TXID}\n")));
    assert!(rendered.contains("version: 1\n"));
    assert!(rendered.contains(
        "\t0437cd7f8525ceed2324359c2d0ba26006d92d856a9c20fa0241106ee5a597c9:0\n"
    ));
    assert!(rendered.contains("\t1000000000:04ae1a62"));
    assert!(rendered.contains(" OP_CHECKSIG\n"));
    assert!(rendered.ends_with("locktime: 0"));
}

#[test]
fn test_hex_input_is_validated() {
    assert!(matches!(
        Transaction::from_hex("01000000zz", None),
        Err(blvm_txcodec::CodecError::InvalidHex(_))
    ));
    assert!(matches!(
        Transaction::from_hex("010", None),
        Err(blvm_txcodec::CodecError::InvalidHex(_))
    ));
}

#[test]
fn test_p2sh_p2wsh_multisig_empty_witness_element() {
    let bytes = hex::decode(P2SH_P2WSH_MULTISIG_TX_HEX).unwrap();
    let tx = Transaction::from_bytes(&bytes, None).unwrap();

    assert!(tx.segwit);
    assert_eq!(tx.inputs.len(), 1);
    assert_eq!(tx.inputs[0].sequence, 0xfffffffd);
    assert_eq!(
        tx.inputs[0].script_sig.to_string(),
        "002090a0daaae7ab4d2fe9737db9ea7f9b5a63dfa083cc457adf1e324167d78f1ded"
    );

    let witness = tx.inputs[0].witness.as_ref().unwrap();
    assert_eq!(witness.len(), 4);
    assert_eq!(witness[0], WitnessItem::Empty);
    assert!(matches!(&witness[1], WitnessItem::Data(sig) if sig.len() == 72));
    assert!(matches!(&witness[2], WitnessItem::Data(sig) if sig.len() == 72));
    assert!(matches!(&witness[3], WitnessItem::Data(script) if script.len() == 139));

    assert_eq!(
        tx.outputs[0].to_string(),
        "1194000:OP_HASH160 652d1b1ffc7b5216adc7fa4d0ad4c66d3108b62a OP_EQUAL"
    );
    assert_eq!(tx.outputs[1].value, 755_918_237);

    assert_eq!(tx.serialize().unwrap(), bytes);
    assert_eq!(tx.id().unwrap(), P2SH_P2WSH_MULTISIG_TXID);
}
