//! Cashaddr addresses for one network.
//!
//! Payload layout before base-32 regrouping:
//! - Version byte: type code (bits 3..7) | size code (bits 0..2)
//! - Hash: 20, 24, 28, 32, 40, 48, 56 or 64 bytes, per the size code
//!
//! Encoded: `prefix:` (optional) || charset(words) || charset(checksum)

#![forbid(unsafe_code)]

use crate::network::Network;
use crate::script::{hash_size, size_bits, CashOutScript, HashType};
use cashaddr_codec::{bytes_to_words, cashaddr, words_to_bytes, SEPARATOR};
use cashaddr_core::{Error, Result};

/// Largest type code the version byte can carry.
pub const MAX_TYPE_BITS: u8 = 0b1111;

/// Largest size code the version byte can carry.
pub const MAX_SIZE_BITS: u8 = 0b111;

/// Version byte fields and hash, not yet checked against each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawCashAddress {
    pub type_bits: u8,
    pub size_bits: u8,
    pub hash: Vec<u8>,
}

impl RawCashAddress {
    pub fn version_byte(&self) -> u8 {
        (self.type_bits << 3) | self.size_bits
    }
}

fn check_bits(type_bits: u8, size_bits: u8) -> Result<()> {
    if type_bits > MAX_TYPE_BITS {
        return Err(Error::InvalidTypeBits(type_bits));
    }
    if size_bits > MAX_SIZE_BITS {
        return Err(Error::InvalidSizeBits(size_bits));
    }
    Ok(())
}

/// Cashaddr codec bound to a network prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CashAddress {
    network: Network,
}

impl CashAddress {
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Encode explicit type and size codes.
    ///
    /// The hash length is not checked against `size_bits`.
    pub fn encode_raw(&self, raw: &RawCashAddress, include_prefix: bool) -> Result<String> {
        check_bits(raw.type_bits, raw.size_bits)?;

        let mut data = Vec::with_capacity(1 + raw.hash.len());
        data.push(raw.version_byte());
        data.extend_from_slice(&raw.hash);

        cashaddr::encode(self.network.prefix(), &bytes_to_words(&data), include_prefix)
    }

    /// Encode a script, deriving the size code from the hash length.
    pub fn encode(&self, script: &CashOutScript, include_prefix: bool) -> Result<String> {
        let size_bits =
            size_bits(script.hash.len()).ok_or(Error::UnsupportedHashSize(script.hash.len()))?;
        let raw = RawCashAddress {
            type_bits: script.hash_type.type_bits(),
            size_bits,
            hash: script.hash.clone(),
        };
        self.encode_raw(&raw, include_prefix)
    }

    /// Decode to version byte fields and hash.
    ///
    /// An address without `prefix:` is read under this network's prefix.
    /// A checksummed address with no data words fails `EmptyPayload` rather
    /// than `HashLengthMismatch`.
    pub fn decode_raw(&self, address: &str) -> Result<RawCashAddress> {
        let payload = if address.contains(SEPARATOR) {
            cashaddr::decode(address)?
        } else {
            cashaddr::decode(&self.with_implicit_prefix(address))?
        };

        if payload.prefix != self.network.prefix() {
            return Err(Error::PrefixMismatch {
                expected: self.network.prefix().to_string(),
                got: payload.prefix,
            });
        }

        let data = words_to_bytes(&payload.words)?;
        let (&version, hash) = data.split_first().ok_or(Error::EmptyPayload)?;

        let raw = RawCashAddress {
            type_bits: version >> 3,
            size_bits: version & 0x07,
            hash: hash.to_vec(),
        };
        check_bits(raw.type_bits, raw.size_bits)?;
        Ok(raw)
    }

    /// Decode and check the version byte against the hash.
    pub fn decode(&self, address: &str) -> Result<CashOutScript> {
        let raw = self.decode_raw(address)?;

        let hash_type =
            HashType::from_type_bits(raw.type_bits).ok_or(Error::InvalidType(raw.type_bits))?;
        let expected = hash_size(raw.size_bits).ok_or(Error::InvalidSize(raw.size_bits))?;
        if raw.hash.len() != expected {
            return Err(Error::HashLengthMismatch {
                expected,
                got: raw.hash.len(),
            });
        }

        Ok(CashOutScript {
            hash_type,
            hash: raw.hash,
        })
    }

    // The prefix is matched to the payload's case so an all-uppercase
    // payload stays uniform.
    fn with_implicit_prefix(&self, address: &str) -> String {
        let prefix = self.network.prefix();
        let is_upper = address != address.to_lowercase() && address == address.to_uppercase();
        if is_upper {
            format!("{}{}{}", prefix.to_uppercase(), SEPARATOR, address)
        } else {
            format!("{}{}{}", prefix, SEPARATOR, address)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_20: &str = "F5BF48B397DAE70BE82B3CCA4793F8EB2B6CDAC9";

    fn hash20() -> Vec<u8> {
        hex::decode(HASH_20).unwrap()
    }

    fn codec(prefix: &str) -> CashAddress {
        CashAddress::new(Network::mainnet().with_prefix(prefix).unwrap())
    }

    #[test]
    fn test_version_byte_packing() {
        let pkh = RawCashAddress {
            type_bits: 0,
            size_bits: 0,
            hash: vec![],
        };
        assert_eq!(pkh.version_byte(), 0x00);

        let sh32 = RawCashAddress {
            type_bits: 1,
            size_bits: 3,
            hash: vec![],
        };
        assert_eq!(sh32.version_byte(), 0x0b);
    }

    #[test]
    fn test_encode_known_vectors() {
        let p2pkh = CashOutScript::new(HashType::Pkh, hash20());
        assert_eq!(
            codec("bitcoincash").encode(&p2pkh, true).unwrap(),
            "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"
        );

        let p2sh = CashOutScript::new(HashType::Sh, hash20());
        assert_eq!(
            codec("bchtest").encode(&p2sh, true).unwrap(),
            "bchtest:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyvwc0uz5t"
        );
        assert_eq!(
            codec("pref").encode(&p2sh, true).unwrap(),
            "pref:pr6m7j9njldwwzlg9v7v53unlr4jkmx6ey65nvtks5"
        );
    }

    #[test]
    fn test_encode_without_prefix() {
        let p2pkh = CashOutScript::new(HashType::Pkh, hash20());
        assert_eq!(
            CashAddress::default().encode(&p2pkh, false).unwrap(),
            "qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"
        );
    }

    #[test]
    fn test_sh_32_version_byte_on_the_wire() {
        let script = CashOutScript::new(HashType::Sh, vec![0u8; 32]);
        let addr = CashAddress::default().encode(&script, true).unwrap();
        assert_eq!(
            addr,
            "bitcoincash:pvqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqae05xh4w"
        );
        let raw = CashAddress::default().decode_raw(&addr).unwrap();
        assert_eq!(raw.version_byte(), 0x0b);
    }

    #[test]
    fn test_encode_rejects_unsupported_size() {
        let script = CashOutScript::new(HashType::Pkh, vec![0u8; 21]);
        assert_eq!(
            CashAddress::default().encode(&script, true),
            Err(Error::UnsupportedHashSize(21))
        );
    }

    #[test]
    fn test_encode_raw_rejects_out_of_range_bits() {
        let codec = CashAddress::default();
        let raw = RawCashAddress { type_bits: 16, size_bits: 0, hash: hash20() };
        assert_eq!(codec.encode_raw(&raw, true), Err(Error::InvalidTypeBits(16)));

        let raw = RawCashAddress { type_bits: 0, size_bits: 8, hash: hash20() };
        assert_eq!(codec.encode_raw(&raw, true), Err(Error::InvalidSizeBits(8)));
    }

    #[test]
    fn test_encode_raw_reserved_type_roundtrips_raw_only() {
        let codec = codec("pref");
        let raw = RawCashAddress { type_bits: 15, size_bits: 0, hash: hash20() };
        let addr = codec.encode_raw(&raw, true).unwrap();
        assert_eq!(codec.decode_raw(&addr).unwrap(), raw);
        assert_eq!(codec.decode(&addr), Err(Error::InvalidType(15)));
    }

    #[test]
    fn test_decode_with_and_without_prefix() {
        let codec = CashAddress::default();
        let full = codec.decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap();
        let bare = codec.decode("qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap();
        assert_eq!(full, bare);
        assert_eq!(full, CashOutScript::new(HashType::Pkh, hash20()));
    }

    #[test]
    fn test_decode_uppercase() {
        let codec = CashAddress::default();
        let lower = codec.decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap();
        let upper = codec.decode("BITCOINCASH:QR6M7J9NJLDWWZLG9V7V53UNLR4JKMX6EYLEP8EKG2").unwrap();
        let bare_upper = codec.decode("QR6M7J9NJLDWWZLG9V7V53UNLR4JKMX6EYLEP8EKG2").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, bare_upper);
    }

    #[test]
    fn test_decode_prefix_mismatch() {
        // Valid checksum under its own prefix, wrong network for this codec.
        let res = codec("bchtest").decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2");
        assert_eq!(
            res,
            Err(Error::PrefixMismatch {
                expected: "bchtest".to_string(),
                got: "bitcoincash".to_string(),
            })
        );
    }

    #[test]
    fn test_uppercase_network_prefix() {
        let net = Network::new(0x00, 0x05, "BITCOINCASH").unwrap();
        let script = CashOutScript::new(HashType::Pkh, hash20());
        let addr = CashAddress::new(net).encode(&script, true).unwrap();
        assert_eq!(addr, "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2");
    }

    #[test]
    fn test_decode_empty_payload() {
        assert_eq!(
            CashAddress::default().decode_raw("bitcoincash:a5a8yrhz"),
            Err(Error::EmptyPayload)
        );
        // the typed decode never reaches the hash length check
        assert_eq!(
            CashAddress::default().decode("bitcoincash:a5a8yrhz"),
            Err(Error::EmptyPayload)
        );
    }

    #[test]
    fn test_decode_hash_length_mismatch() {
        // version byte 0x00 (20 bytes) followed by a 24-byte hash
        assert_eq!(
            CashAddress::default()
                .decode("bitcoincash:qqqqzqsrqszsvpcgpy9qkrqdpc83qygjzv2p29shdf00dy0q"),
            Err(Error::HashLengthMismatch { expected: 20, got: 24 })
        );
    }

    #[test]
    fn test_decode_top_bit_in_version_byte() {
        // version byte 0x80 -> type bits 16
        assert_eq!(
            CashAddress::default().decode("bitcoincash:spm2qsznhks23z7629mms6s4cwef74vcwv4glwxl5g"),
            Err(Error::InvalidTypeBits(16))
        );
    }

    #[test]
    fn test_single_character_errors_detected() {
        let codec = CashAddress::default();
        let addr = "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";
        let start = addr.find(SEPARATOR).unwrap() + 1;
        for pos in start..addr.len() {
            let original = addr.as_bytes()[pos];
            // next character of the alphabet, wrapping
            let idx = cashaddr_codec::CHARSET.iter().position(|&c| c == original).unwrap();
            let replacement = cashaddr_codec::CHARSET[(idx + 1) % 32] as char;
            let mut corrupted = addr.to_string();
            corrupted.replace_range(pos..pos + 1, &replacement.to_string());
            assert!(
                matches!(codec.decode(&corrupted), Err(Error::ChecksumMismatch { .. })),
                "corruption at {pos} not detected: {corrupted}"
            );
        }
    }
}
