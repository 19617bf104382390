//! Cashaddr primitives.
//!
//! Leaves first: `charset` maps 5-bit words to text, `checksum` computes the
//! 40-bit polymod, `cashaddr` joins them into `prefix:payload` strings.
//! Nothing here knows about version bytes or networks.

#![forbid(unsafe_code)]

pub mod cashaddr;
pub mod charset;
pub mod checksum;

pub use cashaddr::{decode, encode, Payload, SEPARATOR};
pub use charset::{bytes_to_words, decode_str, encode_words, words_to_bytes, CHARSET};
pub use checksum::{checksum, checksum_str, CHECKSUM_LEN};
