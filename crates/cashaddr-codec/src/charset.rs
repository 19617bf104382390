//! Base-32 charset used by cashaddr payloads, plus the strict 8 <-> 5 bit
//! regrouping between bytes and words.
//!
//! A "word" is a `u8` holding a 5-bit value (0..=31).

#![forbid(unsafe_code)]

use cashaddr_core::{Error, Result};

/// Cashaddr alphabet, indexed by word value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup table: ASCII byte -> word, or -1 if not in the alphabet.
const CHARSET_REV: [i8; 128] = build_rev();

const fn build_rev() -> [i8; 128] {
    let mut rev = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        rev[CHARSET[i] as usize] = i as i8;
        i += 1;
    }
    rev
}

/// Map each word through the alphabet.
pub fn encode_words(words: &[u8]) -> Result<String> {
    let mut out = String::with_capacity(words.len());
    for &w in words {
        let c = CHARSET.get(w as usize).ok_or(Error::InvalidWord(w))?;
        out.push(*c as char);
    }
    Ok(out)
}

/// Inverse of [`encode_words`]. Only lowercase characters are accepted.
pub fn decode_str(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .map(|c| {
            let idx = if c.is_ascii() { CHARSET_REV[c as usize] } else { -1 };
            if idx < 0 {
                Err(Error::InvalidCharacter(c))
            } else {
                Ok(idx as u8)
            }
        })
        .collect()
}

/// Regroup bytes into 5-bit words.
///
/// The final partial group is filled with zero low bits, so the output always
/// holds `ceil(8 * n / 5)` words.
pub fn bytes_to_words(bytes: &[u8]) -> Vec<u8> {
    let mut words = Vec::with_capacity((bytes.len() * 8 + 4) / 5);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            words.push(((acc >> bits) & 0x1f) as u8);
        }
        acc &= (1 << bits) - 1;
    }

    if bits > 0 {
        words.push(((acc << (5 - bits)) & 0x1f) as u8);
    }

    words
}

/// Regroup 5-bit words back into bytes.
///
/// Rejects input that [`bytes_to_words`] could not have produced: a whole
/// spare word at the end, or leftover bits that are not zero.
pub fn words_to_bytes(words: &[u8]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(words.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &w in words {
        if w > 0x1f {
            return Err(Error::InvalidWord(w));
        }
        acc = (acc << 5) | u32::from(w);
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            bytes.push(((acc >> bits) & 0xff) as u8);
        }
        acc &= (1 << bits) - 1;
    }

    if bits >= 5 {
        return Err(Error::InvalidPadding("excess padding"));
    }
    if acc != 0 {
        return Err(Error::InvalidPadding("non-zero padding"));
    }

    Ok(bytes)
}
