//! Core Bitcoin transaction types

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit hash
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Network the transaction belongs to.
///
/// Carried as metadata only; the wire format is identical on every network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

/// A single script command: either a bare opcode or a data push
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Opcode(u8),
    Push(ByteString),
}

/// Witness stack item
///
/// A zero-length item on the wire decodes to `Empty`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WitnessItem {
    Empty,
    Data(ByteString),
}

/// Script: ordered command stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script {
    pub cmds: Vec<Command>,
}

impl Script {
    pub fn new(cmds: Vec<Command>) -> Self {
        Script { cmds }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl From<Vec<Command>> for Script {
    fn from(cmds: Vec<Command>) -> Self {
        Script { cmds }
    }
}

impl std::ops::Add for Script {
    type Output = Script;

    fn add(mut self, other: Script) -> Script {
        self.cmds.extend(other.cmds);
        self
    }
}

/// Reference to an output of a previous transaction
///
/// `hash` is held in display order, i.e. reversed relative to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

/// Transaction input
///
/// `witness` stays `None` until attached: segwit decode fills it in a second
/// pass once all outputs have been read, and segwit encode refuses inputs
/// that never had one attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
    pub witness: Option<Vec<WitnessItem>>,
}

impl TransactionInput {
    /// Input spending `prev_tx:prev_index` with an empty unlocking script and final sequence
    pub fn new(prev_tx: Hash, prev_index: u32) -> Self {
        TransactionInput {
            prevout: OutPoint {
                hash: prev_tx,
                index: prev_index,
            },
            script_sig: Script::default(),
            sequence: 0xffff_ffff,
            witness: None,
        }
    }

    pub fn with_script_sig(mut self, script_sig: Script) -> Self {
        self.script_sig = script_sig;
        self
    }

    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn attach_witness(&mut self, witness: Vec<WitnessItem>) {
        self.witness = Some(witness);
    }

    pub fn with_witness(mut self, witness: Vec<WitnessItem>) -> Self {
        self.attach_witness(witness);
        self
    }
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    /// Amount in satoshis
    pub value: u64,
    pub script_pubkey: Script,
}

impl TransactionOutput {
    pub fn new(value: u64, script_pubkey: Script) -> Self {
        TransactionOutput {
            value,
            script_pubkey,
        }
    }
}

/// Transaction
///
/// `segwit` selects the wire layout used by encode. `network` is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
    pub segwit: bool,
    pub network: Network,
}

impl Transaction {
    /// Legacy mainnet transaction
    pub fn new(
        version: u32,
        inputs: Vec<TransactionInput>,
        outputs: Vec<TransactionOutput>,
        lock_time: u32,
    ) -> Self {
        Transaction {
            version,
            inputs,
            outputs,
            lock_time,
            segwit: false,
            network: Network::Mainnet,
        }
    }

    pub fn with_segwit(mut self, segwit: bool) -> Self {
        self.segwit = segwit;
        self
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_concatenation_keeps_order() {
        let a = Script::new(vec![Command::Opcode(0x76), Command::Opcode(0xa9)]);
        let b = Script::new(vec![Command::Push(vec![1; 20]), Command::Opcode(0x88)]);

        let joined = a + b;
        assert_eq!(joined.len(), 4);
        assert_eq!(joined.cmds[0], Command::Opcode(0x76));
        assert_eq!(joined.cmds[2], Command::Push(vec![1; 20]));
        assert_eq!(joined.cmds[3], Command::Opcode(0x88));
    }

    #[test]
    fn test_input_defaults() {
        let input = TransactionInput::new([7; 32], 3);
        assert_eq!(input.prevout.index, 3);
        assert!(input.script_sig.is_empty());
        assert_eq!(input.sequence, 0xffffffff);
        assert!(input.witness.is_none());
    }

    #[test]
    fn test_attach_witness() {
        let mut input = TransactionInput::new([0; 32], 0);
        input.attach_witness(vec![WitnessItem::Empty, WitnessItem::Data(vec![0xab])]);
        assert_eq!(input.witness.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_transaction_defaults_to_legacy_mainnet() {
        let tx = Transaction::new(2, vec![], vec![], 0);
        assert!(!tx.segwit);
        assert_eq!(tx.network, Network::Mainnet);

        let tx = tx.with_segwit(true).with_network(Network::Testnet);
        assert!(tx.segwit);
        assert_eq!(tx.network, Network::Testnet);
    }
}
