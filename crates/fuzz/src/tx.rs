use crate::fmt::fmt_tuple;
use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload of a generated transaction.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum TxCall {
    /// A call that decoded against a known function.
    Call(FunctionCall),
    /// Raw calldata with no matching function.
    Calldata(Bytes),
    /// Contract creation carrying the init code.
    Create(Bytes),
    /// No call at all; the transaction only advances time and block number.
    #[default]
    NoCall,
}

impl TxCall {
    /// Whether this payload performs no call.
    pub fn is_wait(&self) -> bool {
        matches!(self, Self::NoCall)
    }
}

impl fmt::Display for TxCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call(call) => write!(f, "{call}"),
            Self::Calldata(data) => write!(f, "{data}"),
            Self::Create(_) => f.write_str("<CREATE>"),
            Self::NoCall => f.write_str("*wait*"),
        }
    }
}

/// A call to a contract function with decoded arguments.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Solidity function name; empty for the fallback function.
    pub name: String,
    /// Decoded arguments; re-decoded from calldata when a sequence is loaded.
    #[serde(skip)]
    pub args: Vec<DynSolValue>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<DynSolValue>) -> Self {
        Self { name: name.into(), args }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str("*fallback*")?;
        } else {
            f.write_str(&self.name)?;
        }
        fmt_tuple(&self.args, f)
    }
}

/// A single transaction in a generated sequence.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BasicTx {
    /// What the transaction executes.
    pub call: TxCall,
    /// Address issuing the transaction.
    pub sender: Address,
    /// Address receiving the call or deployment.
    pub target: Address,
    /// Gas limit for the call.
    pub gas: u64,
    pub gas_price: U256,
    /// Wei sent along with the call.
    pub value: U256,
    /// Seconds the timestamp advances before the call executes.
    pub warp: U256,
    /// Blocks mined before the call executes.
    pub roll: U256,
}
