use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Campaign limits that also shape how results are rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// Number of runs after which a still-open test counts as passed.
    pub test_limit: u32,
    /// Maximum shrinking attempts per failing sequence.
    pub shrink_limit: u32,
    /// Gas limit attached to generated transactions. Calls using exactly
    /// this much are rendered without a gas annotation.
    pub tx_gas: u64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self { test_limit: 50_000, shrink_limit: 5_000, tx_gas: 12_500_000 }
    }
}

/// Position of an address within a rendered call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressRole {
    Sender,
    Receiver,
}

/// Strategy for displaying the addresses taking part in a call.
///
/// The returned string is appended verbatim after the rendered call, so it
/// carries its own leading separator. Returning an empty string omits the
/// address entirely.
pub trait AddressNamer {
    fn name(&self, role: AddressRole, addr: Address) -> String;
}

/// Default naming policy: user labels, falling back to the checksummed
/// address.
#[derive(Clone, Debug, Default)]
pub struct AddressLabels {
    pub labels: BTreeMap<Address, String>,
}

impl AddressNamer for AddressLabels {
    fn name(&self, role: AddressRole, addr: Address) -> String {
        let name = self.labels.get(&addr).cloned().unwrap_or_else(|| addr.to_string());
        match role {
            AddressRole::Sender => format!(" from: {name}"),
            AddressRole::Receiver => format!(" to: {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn default_limits() {
        let config = CampaignConfig::default();
        assert_eq!(config.test_limit, 50_000);
        assert_eq!(config.shrink_limit, 5_000);
        assert_eq!(config.tx_gas, 12_500_000);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: CampaignConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CampaignConfig::default());

        let config: CampaignConfig = serde_json::from_str(r#"{"test_limit":100}"#).unwrap();
        assert_eq!(config.test_limit, 100);
        assert_eq!(config.shrink_limit, 5_000);
    }

    #[test]
    fn labels_win_over_addresses() {
        let owner = address!("0000000000000000000000000000000000010000");
        let other = address!("0000000000000000000000000000000000020000");
        let names = AddressLabels {
            labels: BTreeMap::from([(owner, "owner".to_string())]),
        };

        assert_eq!(names.name(AddressRole::Sender, owner), " from: owner");
        assert_eq!(
            names.name(AddressRole::Receiver, other),
            " to: 0x0000000000000000000000000000000000020000"
        );
    }
}
