//! Cashaddr and legacy address encoding.
//!
//! ```
//! use cashaddr_address::{Address, AddressFormat, HashType, Network, OutScript};
//!
//! let addr = Address::new(Network::mainnet());
//! let hash = [0x76, 0xa0, 0x40, 0x53, 0xbd, 0xa0, 0xa8, 0x8b, 0xda, 0x51,
//!             0x77, 0xb8, 0x6a, 0x15, 0xc3, 0xb2, 0x9f, 0x55, 0x98, 0x73];
//! let script = OutScript::new(HashType::Pkh, hash, AddressFormat::CashAddr);
//!
//! let cash = addr.encode(&script, true).unwrap();
//! assert_eq!(cash, "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a");
//! assert_eq!(addr.to_legacy_address(&cash).unwrap(), "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu");
//! ```

#![forbid(unsafe_code)]

pub mod address;
pub mod cash_address;
pub mod legacy;
pub mod network;
pub mod script;

pub use address::Address;
pub use cash_address::{CashAddress, RawCashAddress};
pub use cashaddr_core::{Error, Result};
pub use legacy::LegacyAddress;
pub use network::Network;
pub use script::{AddressFormat, CashOutScript, HashType, OutScript, HASH_SIZES};
