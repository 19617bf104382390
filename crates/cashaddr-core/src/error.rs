use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid network prefix: {0}")]
    InvalidPrefix(String),

    #[error("empty prefix")]
    EmptyPrefix,

    #[error("invalid prefix character {0:?}")]
    InvalidPrefixChar(char),

    #[error("invalid word {0}: expected a value in 0..=31")]
    InvalidWord(u8),

    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("invalid padding: {0}")]
    InvalidPadding(&'static str),

    #[error("mixed-case address")]
    MixedCase,

    #[error("missing ':' separator between prefix and payload")]
    MissingSeparator,

    #[error("payload too short: {len} characters, need at least 8")]
    PayloadTooShort { len: usize },

    #[error("invalid cashaddr checksum in {address}: expected {expected:?}")]
    ChecksumMismatch { address: String, expected: String },

    #[error("invalid cashaddr prefix {got:?}: expected {expected:?}")]
    PrefixMismatch { expected: String, got: String },

    #[error("empty payload: missing version byte")]
    EmptyPayload,

    #[error("invalid type bits {0}: expected 0..=15")]
    InvalidTypeBits(u8),

    #[error("invalid size bits {0}: expected 0..=7")]
    InvalidSizeBits(u8),

    #[error("invalid hash type {0}")]
    InvalidType(u8),

    #[error("invalid hash size code {0}")]
    InvalidSize(u8),

    #[error("unsupported hash size {0}: expected one of 20, 24, 28, 32, 40, 48, 56 or 64 bytes")]
    UnsupportedHashSize(usize),

    #[error("hash length mismatch: version byte declares {expected} bytes, payload has {got}")]
    HashLengthMismatch { expected: usize, got: usize },

    #[error("unknown address type {0:?}")]
    UnknownAddressType(String),

    #[error("unknown address format {0:?}")]
    UnknownAddressFormat(String),

    #[error("base58 error: {0}")]
    Base58(String),

    #[error("invalid legacy hash length {0}: expected 20 bytes")]
    InvalidLegacyHashLength(usize),

    #[error("unknown legacy version byte {0:#04x}")]
    UnknownLegacyVersion(u8),
}
