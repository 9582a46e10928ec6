use serde::{Deserialize, Serialize};

/// Execution failure that prevented a test from being evaluated.
///
/// Produced by the execution engine and carried in
/// [`TestState::Failed`](crate::TestState::Failed); the report prints its
/// `Display` form verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ExecError {
    /// The VM rejected an operation generated sequences should never contain.
    #[error("VM attempted an illegal operation: {0}")]
    IllegalExec(String),
    /// A failure with no dedicated handling.
    #[error("VM failed for unhandled reason: {0}")]
    UnknownFailure(String),
}
