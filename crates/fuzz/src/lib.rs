//! # stheno-fuzz
//!
//! Campaign state model for stheno's EVM property fuzzer: generated
//! transactions, test lifecycle, coverage and corpus bookkeeping, and the
//! configuration surface the renderers read.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use alloy_json_abi::Function;
use alloy_primitives::{Address, I256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod config;
pub use config::{AddressLabels, AddressNamer, AddressRole, CampaignConfig};

mod corpus;
pub use corpus::{Corpus, CorpusEntry};

mod coverage;
pub use coverage::{CoverageMap, HitMap};

mod error;
pub use error::ExecError;

pub mod fmt;

mod tx;
pub use tx::{BasicTx, FunctionCall, TxCall};

/// What a test checks and under which name it is reported.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TestKind {
    /// A user-defined boolean property, checked after every call.
    Property { name: String, target: Address },
    /// A property driven through a standalone call instead of a state read.
    Call { name: String },
    /// Detects assertion failures in a specific function.
    Assertion { function: Function, target: Address },
    /// Maximizes the signed value returned by the target function.
    Optimization { name: String, target: Address },
    /// Drives coverage only; never appears in reports.
    Exploration,
}

impl TestKind {
    /// The name under which the test is reported, or `None` when the test is
    /// not reportable.
    pub fn display_name(&self) -> Option<String> {
        match self {
            Self::Property { name, .. } | Self::Call { name } | Self::Optimization { name, .. } => {
                Some(name.clone())
            }
            Self::Assertion { function, .. } => Some(function.signature()),
            Self::Exploration => None,
        }
    }

    /// Whether the test maximizes a value rather than checking a property.
    pub fn is_optimization(&self) -> bool {
        matches!(self, Self::Optimization { .. })
    }
}

/// Lifecycle of a single test.
///
/// Exactly one variant holds at any time; transitions are performed by the
/// execution engine, everything downstream only reads the current variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TestState {
    /// Still fuzzing; holds the number of runs executed so far.
    Open(u32),
    /// A falsifying sequence was found and is being shrunk; holds the number
    /// of shrink attempts so far.
    Large(u32),
    /// Shrinking finished; the reproducer is minimal.
    Solved,
    Passed,
    /// The test could not be evaluated.
    Failed(ExecError),
}

/// A single test within a campaign.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FuzzTest {
    pub kind: TestKind,
    pub state: TestState,
    /// Events emitted while executing the reproducer, in emission order.
    pub events: Vec<String>,
    /// Shortest known falsifying (or best-so-far) call sequence.
    pub reproducer: Vec<BasicTx>,
    /// Largest value seen so far; only meaningful for optimization tests.
    pub best_value: I256,
}

impl FuzzTest {
    /// Creates a test in its initial open state.
    pub fn new(kind: TestKind) -> Self {
        Self {
            kind,
            state: TestState::Open(0),
            events: Vec::new(),
            reproducer: Vec::new(),
            best_value: I256::MIN,
        }
    }
}

/// Maximum gas observed for one function, with the sequence that hit it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GasInfo {
    pub gas: u64,
    pub tx_seq: Vec<BasicTx>,
}

/// Snapshot of one campaign, immutable for the duration of a render.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Campaign {
    pub tests: Vec<FuzzTest>,
    pub coverage: CoverageMap,
    pub corpus: Corpus,
    /// Worst-case gas per function name. The empty name collects calls that
    /// did not decode against a known function.
    pub gas_info: BTreeMap<String, GasInfo>,
    /// Seed the campaign ran with; reported so runs can be replayed.
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        let property = TestKind::Property { name: "prop_balance".into(), target: Address::ZERO };
        assert_eq!(property.display_name().as_deref(), Some("prop_balance"));

        let function = Function::parse("checkBalance(address owner, uint256 amount)").unwrap();
        let assertion = TestKind::Assertion { function, target: Address::ZERO };
        assert_eq!(assertion.display_name().as_deref(), Some("checkBalance(address,uint256)"));

        assert_eq!(TestKind::Exploration.display_name(), None);
    }

    #[test]
    fn new_tests_start_open() {
        let test = FuzzTest::new(TestKind::Call { name: "check_pause".into() });
        assert!(matches!(test.state, TestState::Open(0)));
        assert!(test.reproducer.is_empty());
        assert_eq!(test.best_value, I256::MIN);
    }
}
