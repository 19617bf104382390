//! Output-script descriptors: a hash type plus the raw hash, and the address
//! format the descriptor was read from or should be written as.

#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use cashaddr_core::Error;
use serde::{Deserialize, Serialize};

/// Hash lengths a cashaddr version byte can declare, indexed by size code.
pub const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// Size code for a hash of `len` bytes.
pub fn size_bits(len: usize) -> Option<u8> {
    HASH_SIZES.iter().position(|&n| n == len).map(|i| i as u8)
}

/// Hash length declared by a size code.
pub fn hash_size(size_bits: u8) -> Option<usize> {
    HASH_SIZES.get(usize::from(size_bits)).copied()
}

/// Output script type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashType {
    /// Pay-to-pubkey-hash (type code 0)
    Pkh,
    /// Pay-to-script-hash (type code 1)
    Sh,
}

impl HashType {
    /// Cashaddr type code.
    pub const fn type_bits(self) -> u8 {
        match self {
            Self::Pkh => 0,
            Self::Sh => 1,
        }
    }

    pub const fn from_type_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Pkh),
            1 => Some(Self::Sh),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pkh => "pkh",
            Self::Sh => "sh",
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pkh" => Ok(Self::Pkh),
            "sh" => Ok(Self::Sh),
            _ => Err(Error::UnknownAddressType(s.to_string())),
        }
    }
}

/// Textual address format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFormat {
    #[default]
    #[serde(rename = "cashaddr")]
    CashAddr,
    #[serde(rename = "legacy")]
    Legacy,
}

impl AddressFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CashAddr => "cashaddr",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cashaddr" => Ok(Self::CashAddr),
            "legacy" => Ok(Self::Legacy),
            _ => Err(Error::UnknownAddressFormat(s.to_string())),
        }
    }
}

/// Hash type and raw hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashOutScript {
    #[serde(rename = "type")]
    pub hash_type: HashType,
    pub hash: Vec<u8>,
}

impl CashOutScript {
    pub fn new(hash_type: HashType, hash: impl Into<Vec<u8>>) -> Self {
        Self {
            hash_type,
            hash: hash.into(),
        }
    }

    /// Tag this script with an address format.
    pub fn with_format(self, format: AddressFormat) -> OutScript {
        OutScript {
            script: self,
            format,
        }
    }
}

/// A [`CashOutScript`] tagged with its address format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutScript {
    #[serde(flatten)]
    pub script: CashOutScript,
    #[serde(default)]
    pub format: AddressFormat,
}

impl OutScript {
    pub fn new(hash_type: HashType, hash: impl Into<Vec<u8>>, format: AddressFormat) -> Self {
        CashOutScript::new(hash_type, hash).with_format(format)
    }

    pub fn hash_type(&self) -> HashType {
        self.script.hash_type
    }

    pub fn hash(&self) -> &[u8] {
        &self.script.hash
    }
}

impl From<OutScript> for CashOutScript {
    fn from(out: OutScript) -> Self {
        out.script
    }
}

impl From<CashOutScript> for OutScript {
    fn from(script: CashOutScript) -> Self {
        script.with_format(AddressFormat::default())
    }
}
