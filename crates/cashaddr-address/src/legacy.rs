//! Legacy base58-check addresses.
//!
//! Address format:
//! - Version byte: network pub-key-hash or script-hash version (1 byte)
//! - Content: hash160 (20 bytes)
//! - Checksum: sha256(sha256(version || content))[0:4] (4 bytes)
//! - Encoded: Base58(version || content || checksum)

#![forbid(unsafe_code)]

use crate::network::Network;
use crate::script::{CashOutScript, HashType};
use cashaddr_core::{Error, Result};

/// Hash length carried by legacy addresses.
pub const LEGACY_HASH_LEN: usize = 20;

/// Base58-check codec bound to a network's version bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyAddress {
    network: Network,
}

impl LegacyAddress {
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    fn version(&self, hash_type: HashType) -> u8 {
        match hash_type {
            HashType::Pkh => self.network.pub_key_hash(),
            HashType::Sh => self.network.script_hash(),
        }
    }

    pub fn encode(&self, script: &CashOutScript) -> Result<String> {
        if script.hash.len() != LEGACY_HASH_LEN {
            return Err(Error::InvalidLegacyHashLength(script.hash.len()));
        }

        let mut payload = [0u8; 1 + LEGACY_HASH_LEN];
        payload[0] = self.version(script.hash_type);
        payload[1..].copy_from_slice(&script.hash);

        Ok(bs58::encode(payload).with_check().into_string())
    }

    pub fn decode(&self, address: &str) -> Result<CashOutScript> {
        let payload = bs58::decode(address)
            .with_check(None)
            .into_vec()
            .map_err(|e| Error::Base58(e.to_string()))?;

        let (&version, hash) = payload
            .split_first()
            .ok_or(Error::InvalidLegacyHashLength(0))?;
        if hash.len() != LEGACY_HASH_LEN {
            return Err(Error::InvalidLegacyHashLength(hash.len()));
        }

        let hash_type = if version == self.network.pub_key_hash() {
            HashType::Pkh
        } else if version == self.network.script_hash() {
            HashType::Sh
        } else {
            return Err(Error::UnknownLegacyVersion(version));
        };

        Ok(CashOutScript::new(hash_type, hash))
    }
}
