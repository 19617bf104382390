//! Cashaddr polymod checksum.
//!
//! A BCH code over 5-bit symbols with a 40-bit state. The prefix contributes
//! only the low 5 bits of each character followed by a zero separator
//! symbol, which is where cashaddr parts ways with bech32.

#![forbid(unsafe_code)]

use crate::charset::CHARSET;
use cashaddr_core::{Error, Result};

/// Number of checksum words appended to every payload.
pub const CHECKSUM_LEN: usize = 8;

/// Generator constants, selected by the five bits shifted out of the state.
const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Advance the 40-bit state by one symbol slot.
///
/// The caller XORs the next symbol into the result.
pub const fn step(pre: u64) -> u64 {
    let b = pre >> 35;
    let mut chk = (pre & 0x07_ffff_ffff) << 5;
    let mut i = 0;
    while i < GENERATORS.len() {
        if (b >> i) & 1 != 0 {
            chk ^= GENERATORS[i];
        }
        i += 1;
    }
    chk
}

/// Compute the 8 checksum words for `prefix` and `words`.
///
/// `prefix` must already be lowercase printable ASCII and every word below 32.
pub fn checksum(prefix: &str, words: &[u8]) -> Result<[u8; CHECKSUM_LEN]> {
    let mut chk: u64 = 1;

    for c in prefix.chars() {
        if !matches!(c, '!'..='~') || c.is_ascii_uppercase() {
            return Err(Error::InvalidPrefixChar(c));
        }
        chk = step(chk) ^ (c as u64 & 0x1f);
    }

    // separator
    chk = step(chk);

    for &w in words {
        if w > 0x1f {
            return Err(Error::InvalidWord(w));
        }
        chk = step(chk) ^ u64::from(w);
    }

    // Room for the checksum itself, zero while computing.
    for _ in 0..CHECKSUM_LEN {
        chk = step(chk);
    }
    chk ^= 1;

    let mut out = [0u8; CHECKSUM_LEN];
    for (i, word) in out.iter_mut().enumerate() {
        *word = ((chk >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f) as u8;
    }
    Ok(out)
}

/// [`checksum`] rendered through the charset.
pub fn checksum_str(prefix: &str, words: &[u8]) -> Result<String> {
    let sum = checksum(prefix, words)?;
    Ok(sum.iter().map(|&w| CHARSET[w as usize] as char).collect())
}
