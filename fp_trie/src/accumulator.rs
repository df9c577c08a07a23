//! Mutable accumulators threaded through recursive trie walks.
//!
//! Each walk takes one of these by `&mut` so a traversal allocates nothing per call.

use serde::{Serialize, Deserialize};

/// Running totals for the similarity kernels. `matches` carries the Dirac,
/// min and spectrum sums, `weighted` carries the weighted spectrum sum.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimilaritySums {
    pub matches: u64,
    pub weighted: f64,
}

impl SimilaritySums {

    pub fn new() -> Self {
        return Self {
            matches: 0,
            weighted: 0.0,
        };
    }
}

/// Aggregate statistics of one trie, refreshed by a finalize pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Number of distinct feature leaves.
    pub feature_nodes: u64,
    /// Sum of leaf counts over all feature leaves.
    pub total_feature_count: u64,
    /// Every node in the trie except the root sentinel.
    pub total_node_count: u64,
    /// Sum of leaf weights, counting only leaves that carry one.
    pub total_weight: f64,
}

impl TrieStats {

    pub fn new() -> Self {
        return Self::default();
    }
}
