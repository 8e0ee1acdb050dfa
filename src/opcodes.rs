//! Bitcoin Script Opcode Constants
//!
//! Opcode values the codec refers to, plus the read-only opcode-name table
//! used when rendering scripts.
//!
//! Reference: Bitcoin Core `script/script.h`

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// PUSH DATA OPCODES (0x00 - 0x4e)
// ============================================================================

/// OP_0 / OP_FALSE - Push empty array
pub const OP_0: u8 = 0x00;

/// Largest direct push: the opcode itself is the data length
pub const MAX_DIRECT_PUSH: u8 = 0x4b;

/// OP_PUSHDATA1 - Push next byte as data length
pub const OP_PUSHDATA1: u8 = 0x4c;

/// OP_PUSHDATA2 - Push next 2 bytes (little-endian) as data length
pub const OP_PUSHDATA2: u8 = 0x4d;

/// OP_PUSHDATA4 - Push next 4 bytes (little-endian) as data length
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Maximum size of a single pushed element
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

// ============================================================================
// COMMON OPCODES
// ============================================================================

pub const OP_1: u8 = 0x51;
pub const OP_RETURN: u8 = 0x6a;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;
pub const OP_CHECKMULTISIG: u8 = 0xae;

const OPCODE_NAME_TABLE: &[(u8, &str)] = &[
    (0, "OP_0"),
    (76, "OP_PUSHDATA1"),
    (77, "OP_PUSHDATA2"),
    (78, "OP_PUSHDATA4"),
    (79, "OP_1NEGATE"),
    (81, "OP_1"),
    (82, "OP_2"),
    (83, "OP_3"),
    (84, "OP_4"),
    (85, "OP_5"),
    (86, "OP_6"),
    (87, "OP_7"),
    (88, "OP_8"),
    (89, "OP_9"),
    (90, "OP_10"),
    (91, "OP_11"),
    (92, "OP_12"),
    (93, "OP_13"),
    (94, "OP_14"),
    (95, "OP_15"),
    (96, "OP_16"),
    (97, "OP_NOP"),
    (99, "OP_IF"),
    (100, "OP_NOTIF"),
    (103, "OP_ELSE"),
    (104, "OP_ENDIF"),
    (105, "OP_VERIFY"),
    (106, "OP_RETURN"),
    (107, "OP_TOALTSTACK"),
    (108, "OP_FROMALTSTACK"),
    (109, "OP_2DROP"),
    (110, "OP_2DUP"),
    (111, "OP_3DUP"),
    (112, "OP_2OVER"),
    (113, "OP_2ROT"),
    (114, "OP_2SWAP"),
    (115, "OP_IFDUP"),
    (116, "OP_DEPTH"),
    (117, "OP_DROP"),
    (118, "OP_DUP"),
    (119, "OP_NIP"),
    (120, "OP_OVER"),
    (121, "OP_PICK"),
    (122, "OP_ROLL"),
    (123, "OP_ROT"),
    (124, "OP_SWAP"),
    (125, "OP_TUCK"),
    (130, "OP_SIZE"),
    (135, "OP_EQUAL"),
    (136, "OP_EQUALVERIFY"),
    (139, "OP_1ADD"),
    (140, "OP_1SUB"),
    (143, "OP_NEGATE"),
    (144, "OP_ABS"),
    (145, "OP_NOT"),
    (146, "OP_0NOTEQUAL"),
    (147, "OP_ADD"),
    (148, "OP_SUB"),
    (154, "OP_BOOLAND"),
    (155, "OP_BOOLOR"),
    (156, "OP_NUMEQUAL"),
    (157, "OP_NUMEQUALVERIFY"),
    (158, "OP_NUMNOTEQUAL"),
    (159, "OP_LESSTHAN"),
    (160, "OP_GREATERTHAN"),
    (161, "OP_LESSTHANOREQUAL"),
    (162, "OP_GREATERTHANOREQUAL"),
    (163, "OP_MIN"),
    (164, "OP_MAX"),
    (165, "OP_WITHIN"),
    (166, "OP_RIPEMD160"),
    (167, "OP_SHA1"),
    (168, "OP_SHA256"),
    (169, "OP_HASH160"),
    (170, "OP_HASH256"),
    (171, "OP_CODESEPARATOR"),
    (172, "OP_CHECKSIG"),
    (173, "OP_CHECKSIGVERIFY"),
    (174, "OP_CHECKMULTISIG"),
    (175, "OP_CHECKMULTISIGVERIFY"),
    (176, "OP_NOP1"),
    (177, "OP_CHECKLOCKTIMEVERIFY"),
    (178, "OP_CHECKSEQUENCEVERIFY"),
    (179, "OP_NOP4"),
    (180, "OP_NOP5"),
    (181, "OP_NOP6"),
    (182, "OP_NOP7"),
    (183, "OP_NOP8"),
    (184, "OP_NOP9"),
    (185, "OP_NOP10"),
];

static OPCODE_NAMES: OnceLock<HashMap<u8, &'static str>> = OnceLock::new();

fn opcode_names() -> &'static HashMap<u8, &'static str> {
    OPCODE_NAMES.get_or_init(|| OPCODE_NAME_TABLE.iter().copied().collect())
}

/// Human-readable name of an opcode, if it has one
pub fn opcode_name(opcode: u8) -> Option<&'static str> {
    opcode_names().get(&opcode).copied()
}
