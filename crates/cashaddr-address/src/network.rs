//! Network descriptors.
//!
//! A network fixes the two legacy version bytes and the cashaddr prefix.

#![forbid(unsafe_code)]

use cashaddr_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Cashaddr prefix of the main network.
pub const MAINNET_PREFIX: &str = "bitcoincash";

/// Cashaddr prefix of the test network.
pub const TESTNET_PREFIX: &str = "bchtest";

/// Legacy version bytes and cashaddr prefix of one network.
///
/// The prefix is never empty and always stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NetworkParams")]
pub struct Network {
    pub_key_hash: u8,
    script_hash: u8,
    prefix: String,
}

/// Unchecked form used for deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NetworkParams {
    pub_key_hash: u8,
    script_hash: u8,
    prefix: String,
}

impl TryFrom<NetworkParams> for Network {
    type Error = Error;

    fn try_from(params: NetworkParams) -> Result<Self> {
        Self::new(params.pub_key_hash, params.script_hash, &params.prefix)
    }
}

impl Network {
    /// Build a network, validating the prefix.
    ///
    /// The prefix must be non-empty and either all lowercase or all uppercase.
    pub fn new(pub_key_hash: u8, script_hash: u8, prefix: &str) -> Result<Self> {
        if prefix.is_empty() {
            return Err(Error::InvalidPrefix("prefix must not be empty".to_string()));
        }
        let lowered = prefix.to_lowercase();
        if prefix != lowered && prefix != prefix.to_uppercase() {
            return Err(Error::InvalidPrefix(format!(
                "{prefix:?} must be all lowercase or all uppercase"
            )));
        }
        Ok(Self {
            pub_key_hash,
            script_hash,
            prefix: lowered,
        })
    }

    /// Main network: version bytes 0x00 / 0x05, prefix `bitcoincash`.
    pub fn mainnet() -> Self {
        Self {
            pub_key_hash: 0x00,
            script_hash: 0x05,
            prefix: MAINNET_PREFIX.to_string(),
        }
    }

    /// Test network: version bytes 0x6f / 0xc4, prefix `bchtest`.
    pub fn testnet() -> Self {
        Self {
            pub_key_hash: 0x6f,
            script_hash: 0xc4,
            prefix: TESTNET_PREFIX.to_string(),
        }
    }

    /// Legacy version byte for pay-to-pubkey-hash.
    pub const fn pub_key_hash(&self) -> u8 {
        self.pub_key_hash
    }

    /// Legacy version byte for pay-to-script-hash.
    pub const fn script_hash(&self) -> u8 {
        self.script_hash
    }

    /// Lowercase cashaddr prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Copy of this network under a different prefix.
    pub fn with_prefix(&self, prefix: &str) -> Result<Self> {
        Self::new(self.pub_key_hash, self.script_hash, prefix)
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::mainnet()
    }
}
