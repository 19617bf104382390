//! Format dispatch between cashaddr and legacy addresses.

#![forbid(unsafe_code)]

use crate::cash_address::CashAddress;
use crate::legacy::LegacyAddress;
use crate::network::Network;
use crate::script::{AddressFormat, CashOutScript, OutScript};
use cashaddr_core::Result;

/// Formats tried by [`Address::decode`], in order. On total failure the
/// error of the last one is returned.
const DECODE_ORDER: [AddressFormat; 2] = [AddressFormat::Legacy, AddressFormat::CashAddr];

/// Address codec for one network, covering both formats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Address {
    cash: CashAddress,
    legacy: LegacyAddress,
}

impl Address {
    pub fn new(network: Network) -> Self {
        Self {
            cash: CashAddress::new(network.clone()),
            legacy: LegacyAddress::new(network),
        }
    }

    pub fn network(&self) -> &Network {
        self.cash.network()
    }

    /// Encode in the script's own format. `include_prefix` only affects cashaddr.
    pub fn encode(&self, script: &OutScript, include_prefix: bool) -> Result<String> {
        match script.format {
            AddressFormat::CashAddr => self.cash.encode(&script.script, include_prefix),
            AddressFormat::Legacy => self.legacy.encode(&script.script),
        }
    }

    /// Decode either format, tagging the result with the one that matched.
    pub fn decode(&self, address: &str) -> Result<OutScript> {
        let first = self.decode_as(address, DECODE_ORDER[0]);
        DECODE_ORDER[1..].iter().fold(first, |result, &format| {
            result.or_else(|_| self.decode_as(address, format))
        })
    }

    /// Re-encode any supported address as cashaddr.
    pub fn to_cash_address(&self, address: &str, include_prefix: bool) -> Result<String> {
        let mut script = self.decode(address)?;
        script.format = AddressFormat::CashAddr;
        self.encode(&script, include_prefix)
    }

    /// Re-encode any supported address as legacy base58-check.
    pub fn to_legacy_address(&self, address: &str) -> Result<String> {
        let mut script = self.decode(address)?;
        script.format = AddressFormat::Legacy;
        self.encode(&script, true)
    }

    fn decode_as(&self, address: &str, format: AddressFormat) -> Result<OutScript> {
        let script: CashOutScript = match format {
            AddressFormat::CashAddr => self.cash.decode(address)?,
            AddressFormat::Legacy => self.legacy.decode(address)?,
        };
        Ok(script.with_format(format))
    }
}
