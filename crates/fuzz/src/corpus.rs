use crate::BasicTx;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Call sequences worth keeping across runs, in insertion order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Corpus(pub Vec<CorpusEntry>);

impl Deref for Corpus {
    type Target = Vec<CorpusEntry>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Corpus {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// A saved call sequence and its mutation scheduling priority.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Entries with a higher priority are picked for mutation more often.
    pub priority: u64,
    pub tx_seq: Vec<BasicTx>,
}
