use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use std::{
    collections::{hash_map::Entry, BTreeMap, HashMap},
    ops::{Deref, DerefMut},
};

/// Accumulated coverage for every executed bytecode, keyed by code hash.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CoverageMap(pub HashMap<B256, HitMap>);

impl CoverageMap {
    /// Increases the hit counter for a program counter of the given bytecode.
    pub fn hit(&mut self, code_hash: B256, pc: usize) {
        self.0.entry(code_hash).or_default().hit(pc);
    }

    /// Merges coverage collected by another worker into this map.
    pub fn merge(&mut self, other: Self) {
        for (code_hash, map) in other.0 {
            match self.0.entry(code_hash) {
                Entry::Occupied(mut entry) => entry.get_mut().merge(&map),
                Entry::Vacant(entry) => {
                    entry.insert(map);
                }
            }
        }
    }

    /// Total number of distinct covered program counters across all
    /// bytecodes.
    pub fn points(&self) -> usize {
        self.values().map(|map| map.hits.len()).sum()
    }

    /// Number of distinct bytecodes that were executed at least once.
    pub fn codehashes(&self) -> usize {
        self.len()
    }
}

impl Deref for CoverageMap {
    type Target = HashMap<B256, HitMap>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CoverageMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Hit counters for the instructions of a single bytecode.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HitMap {
    pub hits: BTreeMap<usize, u64>,
}

impl HitMap {
    /// Increases the hit counter for the given program counter.
    pub fn hit(&mut self, pc: usize) {
        *self.hits.entry(pc).or_default() += 1;
    }

    /// Merges another hit map for the same bytecode into this one.
    pub fn merge(&mut self, other: &Self) {
        for (pc, hits) in &other.hits {
            *self.hits.entry(*pc).or_default() += hits;
        }
    }
}
