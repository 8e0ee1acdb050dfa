//! Configuration for blvm-txcodec
//!
//! Provides decode limits and defaults. Settings can be loaded from
//! environment variables or passed programmatically. Nothing here changes the
//! bytes produced by encode.

use crate::types::Network;
use serde::{Deserialize, Serialize};

/// Upper bounds on counts read from untrusted input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeLimits {
    /// Maximum inputs per transaction
    #[serde(default = "default_max_inputs")]
    pub max_inputs: u64,

    /// Maximum outputs per transaction
    #[serde(default = "default_max_outputs")]
    pub max_outputs: u64,

    /// Maximum witness items per input
    #[serde(default = "default_max_witness_items")]
    pub max_witness_items: u64,
}

fn default_max_inputs() -> u64 {
    1_000_000
}

fn default_max_outputs() -> u64 {
    1_000_000
}

fn default_max_witness_items() -> u64 {
    1_000_000
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_inputs: default_max_inputs(),
            max_outputs: default_max_outputs(),
            max_witness_items: default_max_witness_items(),
        }
    }
}

/// Complete codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodecConfig {
    #[serde(default)]
    pub limits: DecodeLimits,

    /// Network recorded on decoded transactions when the caller gives no hint
    #[serde(default)]
    pub default_network: Network,

    /// Fail byte/hex decodes that leave unread bytes after the locktime
    #[serde(default)]
    pub reject_trailing_bytes: bool,
}

impl CodecConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables follow the pattern: `BLVM_TXCODEC_<KEY>`
    ///
    /// Examples:
    /// - `BLVM_TXCODEC_MAX_INPUTS=10000`
    /// - `BLVM_TXCODEC_DEFAULT_NETWORK=testnet`
    /// - `BLVM_TXCODEC_REJECT_TRAILING_BYTES=true`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("BLVM_TXCODEC_MAX_INPUTS") {
            if let Ok(limit) = val.parse::<u64>() {
                config.limits.max_inputs = limit;
            }
        }

        if let Ok(val) = std::env::var("BLVM_TXCODEC_MAX_OUTPUTS") {
            if let Ok(limit) = val.parse::<u64>() {
                config.limits.max_outputs = limit;
            }
        }

        if let Ok(val) = std::env::var("BLVM_TXCODEC_MAX_WITNESS_ITEMS") {
            if let Ok(limit) = val.parse::<u64>() {
                config.limits.max_witness_items = limit;
            }
        }

        if let Ok(val) = std::env::var("BLVM_TXCODEC_DEFAULT_NETWORK") {
            match val.to_ascii_lowercase().as_str() {
                "main" | "mainnet" => config.default_network = Network::Mainnet,
                "test" | "testnet" => config.default_network = Network::Testnet,
                other => log::debug!("ignoring unknown BLVM_TXCODEC_DEFAULT_NETWORK {other:?}"),
            }
        }

        if let Ok(val) = std::env::var("BLVM_TXCODEC_REJECT_TRAILING_BYTES") {
            if let Ok(reject) = val.parse::<bool>() {
                config.reject_trailing_bytes = reject;
            }
        }

        config
    }
}

/// Global codec configuration instance
static GLOBAL_CODEC_CONFIG: std::sync::OnceLock<CodecConfig> = std::sync::OnceLock::new();

/// Initialize global codec configuration
///
/// Returns the rejected config back if one was already installed.
pub fn init_codec_config(config: CodecConfig) -> Result<(), CodecConfig> {
    GLOBAL_CODEC_CONFIG.set(config)
}

/// Get global codec configuration
///
/// Returns the global config if initialized, otherwise reads the environment.
pub fn get_codec_config() -> CodecConfig {
    GLOBAL_CODEC_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(CodecConfig::from_env)
}
