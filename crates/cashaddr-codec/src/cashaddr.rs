//! `prefix:payload` strings.
//!
//! Layout: lowercase prefix, `:`, data words, 8 checksum words, all through
//! the base-32 charset. The prefix may be left off the encoded string but
//! always takes part in the checksum.

#![forbid(unsafe_code)]

use crate::charset;
use crate::checksum::{checksum_str, CHECKSUM_LEN};
use cashaddr_core::{Error, Result};

/// Separator between prefix and payload.
pub const SEPARATOR: char = ':';

/// A decoded cashaddr string: lowercase prefix and data words, checksum removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    pub prefix: String,
    pub words: Vec<u8>,
}

/// Encode `words` under `prefix`, optionally leaving the prefix off the output.
pub fn encode(prefix: &str, words: &[u8], include_prefix: bool) -> Result<String> {
    if prefix.is_empty() {
        return Err(Error::EmptyPrefix);
    }
    let prefix = prefix.to_lowercase();

    let data = charset::encode_words(words)?;
    let sum = checksum_str(&prefix, words)?;

    let mut out = String::with_capacity(prefix.len() + 1 + data.len() + sum.len());
    if include_prefix {
        out.push_str(&prefix);
        out.push(SEPARATOR);
    }
    out.push_str(&data);
    out.push_str(&sum);
    Ok(out)
}

/// Decode a full `prefix:payload` string and verify its checksum.
pub fn decode(s: &str) -> Result<Payload> {
    let lowered = s.to_lowercase();
    if s != lowered && s != s.to_uppercase() {
        return Err(Error::MixedCase);
    }

    let sep = match lowered.rfind(SEPARATOR) {
        Some(0) | None => return Err(Error::MissingSeparator),
        Some(i) => i,
    };
    let prefix = &lowered[..sep];
    let payload = &lowered[sep + SEPARATOR.len_utf8()..];

    let len = payload.chars().count();
    if len < CHECKSUM_LEN {
        return Err(Error::PayloadTooShort { len });
    }

    let mut words = charset::decode_str(payload)?;
    words.truncate(words.len() - CHECKSUM_LEN);

    let expected = checksum_str(prefix, &words)?;
    if !payload.ends_with(&expected) {
        return Err(Error::ChecksumMismatch {
            address: s.to_string(),
            expected,
        });
    }

    Ok(Payload {
        prefix: prefix.to_string(),
        words,
    })
}
