//! Trie construction, aggregate statistics, similarity kernels and consensus.
//!
//! All comparisons walk two tries in lock-step from the roots: a pair of
//! feature leaves with equal match keys contributes to the kernel sum, and
//! recursion only descends into child pairs with equal match keys. Pairs with
//! unequal keys are never visited together, so the walk covers exactly the
//! structurally aligned paths instead of a full bipartite product.

use crate::accumulator::{SimilaritySums, TrieStats};
use crate::error::Error;
use crate::node::TrieNode;
use crate::pattern::PatternSequence;
use serde::{Serialize, Deserialize};

/// The pattern index. Grows monotonically through `insert`; aggregate
/// statistics are cached and only valid after `finalize`, which every
/// similarity entry point checks on both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trie {
    root: TrieNode,
    stats: TrieStats,
    finalized: bool,
}

impl Trie {

    pub fn new() -> Self {
        return Self {
            root: TrieNode::root(),
            stats: TrieStats::new(),
            finalized: false,
        };
    }

    pub fn root(&self) -> &TrieNode {
        return &self.root;
    }

    pub fn is_finalized(&self) -> bool {
        return self.finalized;
    }

    /// Inserts one pattern, sharing the longest existing prefix and creating
    /// nodes only below it. Inserting an already-present path just bumps the
    /// terminal leaf's count. Marks the cached statistics stale.
    pub fn insert(&mut self, pattern: &PatternSequence) {

        if pattern.is_empty() {
            return;
        }

        self.finalized = false;
        Self::insert_step(&mut self.root, pattern, 0);
    }

    fn insert_step(node: &mut TrieNode, pattern: &PatternSequence, depth: usize) {

        if depth > pattern.len() - 1 {
            return;
        }

        let step = &pattern.steps[depth];
        let is_leaf = depth == pattern.len() - 1;

        let index = match node.child_with_key(step.match_key) {

            Some(i) => {
                if is_leaf {
                    let child = &mut node.children[i];
                    child.is_feature = true;
                    child.count += pattern.count;
                    // the first terminal insert wins, duplicates never
                    // overwrite an existing weight
                    if child.weight.is_none() {
                        child.weight = pattern.numeric_value;
                    }
                }
                i
            },

            None => {
                let mut child = TrieNode::from_step(step);
                if is_leaf {
                    child.is_feature = true;
                    child.count = pattern.count;
                    child.weight = pattern.numeric_value;
                }
                node.add_child(child);
                node.children.len() - 1
            },
        };

        Self::insert_step(&mut node.children[index], pattern, depth + 1);
    }

    /// Refreshes the cached aggregate statistics with one depth-first pass
    /// over every node except the root. Must run after a batch of inserts and
    /// before reading aggregates or comparing.
    pub fn finalize(&mut self) {

        let mut stats = TrieStats::new();
        Self::refresh(&self.root, &mut stats);

        self.stats = stats;
        self.finalized = true;
    }

    fn refresh(node: &TrieNode, stats: &mut TrieStats) {

        for child in node.children.iter() {

            if child.is_feature {
                stats.feature_nodes += 1;
                stats.total_feature_count += child.count;
                if let Some(w) = child.weight {
                    stats.total_weight += w;
                }
            }

            stats.total_node_count += 1;
            Self::refresh(child, stats);
        }
    }

    fn ensure_finalized(&self) -> Result<(), Error> {
        match self.finalized {
            true => Ok(()),
            false => Err(Error::NotFinalized),
        }
    }

    pub fn stats(&self) -> Result<&TrieStats, Error> {
        self.ensure_finalized()?;
        return Ok(&self.stats);
    }

    /// Number of distinct feature leaves.
    pub fn feature_node_count(&self) -> Result<u64, Error> {
        self.ensure_finalized()?;
        return Ok(self.stats.feature_nodes);
    }

    /// Sum of leaf counts over all feature leaves.
    pub fn total_feature_count(&self) -> Result<u64, Error> {
        self.ensure_finalized()?;
        return Ok(self.stats.total_feature_count);
    }

    /// Number of nodes excluding the root sentinel.
    pub fn total_node_count(&self) -> Result<u64, Error> {
        self.ensure_finalized()?;
        return Ok(self.stats.total_node_count);
    }

    /// Sum of leaf weights over feature leaves that carry one.
    pub fn total_weight(&self) -> Result<f64, Error> {
        self.ensure_finalized()?;
        return Ok(self.stats.total_weight);
    }

    /// Tanimoto coefficient over matched feature leaves: common /
    /// (leaves_a + leaves_b - common). Two empty tries compare as 1.0.
    pub fn similarity_tanimoto(&self, other: &Trie) -> Result<f64, Error> {

        self.ensure_finalized()?;
        other.ensure_finalized()?;

        let leaves_a = self.stats.feature_nodes;
        let leaves_b = other.stats.feature_nodes;

        // two empty tries are identical by convention
        if (leaves_a == 0) && (leaves_b == 0) {
            return Ok(1.0);
        }

        let mut sums = SimilaritySums::new();
        Self::walk_dirac(&self.root, &other.root, &mut sums);
        let common = sums.matches;

        return Ok(common as f64 / (leaves_a + leaves_b - common) as f64);
    }

    fn walk_dirac(node1: &TrieNode, node2: &TrieNode, sums: &mut SimilaritySums) {

        if (node1.is_feature && node2.is_feature) && (node1.match_key == node2.match_key) {
            sums.matches += 1;
        }

        for child1 in node1.children.iter() {
            for child2 in node2.children.iter() {
                if child1.match_key == child2.match_key {
                    Self::walk_dirac(child1, child2, sums);
                }
            }
        }
    }

    /// Sum of min(count_a, count_b) over matched feature leaves.
    pub fn similarity_min(&self, other: &Trie) -> Result<u64, Error> {

        self.ensure_finalized()?;
        other.ensure_finalized()?;

        let mut sums = SimilaritySums::new();
        Self::walk_min(&self.root, &other.root, &mut sums);

        return Ok(sums.matches);
    }

    fn walk_min(node1: &TrieNode, node2: &TrieNode, sums: &mut SimilaritySums) {

        if (node1.is_feature && node2.is_feature) && (node1.match_key == node2.match_key) {
            sums.matches += node1.count.min(node2.count);
        }

        for child1 in node1.children.iter() {
            for child2 in node2.children.iter() {
                if child1.match_key == child2.match_key {
                    Self::walk_min(child1, child2, sums);
                }
            }
        }
    }

    /// Spectrum kernel: sum of count_a * count_b over matched feature
    /// leaves, a dot product over the feature space spanned by match keys.
    pub fn similarity_spectrum(&self, other: &Trie) -> Result<u64, Error> {

        self.ensure_finalized()?;
        other.ensure_finalized()?;

        if (self.stats.feature_nodes == 0) && (other.stats.feature_nodes == 0) {
            return Ok(0);
        }

        let mut sums = SimilaritySums::new();
        Self::walk_spectrum(&self.root, &other.root, &mut sums);

        return Ok(sums.matches);
    }

    fn walk_spectrum(node1: &TrieNode, node2: &TrieNode, sums: &mut SimilaritySums) {

        if (node1.is_feature && node2.is_feature) && (node1.match_key == node2.match_key) {
            sums.matches += node1.count * node2.count;
        }

        for child1 in node1.children.iter() {
            for child2 in node2.children.iter() {
                if child1.match_key == child2.match_key {
                    Self::walk_spectrum(child1, child2, sums);
                }
            }
        }
    }

    /// Weighted spectrum kernel: sum of weight_a * weight_b over matched
    /// feature leaves. A matched leaf without a weight on either side aborts
    /// just this computation with `Error::MissingWeight`.
    pub fn similarity_spectrum_weighted(&self, other: &Trie) -> Result<f64, Error> {

        self.ensure_finalized()?;
        other.ensure_finalized()?;

        if (self.stats.feature_nodes == 0) && (other.stats.feature_nodes == 0) {
            return Ok(0.0);
        }

        let mut sums = SimilaritySums::new();
        Self::walk_weighted(&self.root, &other.root, &mut sums)?;

        return Ok(sums.weighted);
    }

    fn walk_weighted(node1: &TrieNode, node2: &TrieNode, sums: &mut SimilaritySums) -> Result<(), Error> {

        if (node1.is_feature && node2.is_feature) && (node1.match_key == node2.match_key) {
            match (node1.weight, node2.weight) {
                (Some(w1), Some(w2)) => sums.weighted += w1 * w2,
                _ => return Err(Error::MissingWeight),
            }
        }

        for child1 in node1.children.iter() {
            for child2 in node2.children.iter() {
                if child1.match_key == child2.match_key {
                    Self::walk_weighted(child1, child2, sums)?;
                }
            }
        }

        return Ok(());
    }

    /// Spectrum similarity normalized by the smaller total feature count.
    /// Undefined when that count is zero.
    pub fn percent_match(&self, other: &Trie) -> Result<f64, Error> {

        let sim_aa = self.total_feature_count()?;
        let sim_bb = other.total_feature_count()?;

        let denominator = sim_aa.min(sim_bb);
        if denominator == 0 {
            return Err(Error::ZeroDenominator);
        }

        let sim_ab = self.similarity_spectrum(other)?;

        return Ok(sim_ab as f64 / denominator as f64);
    }

    /// Builds the consensus trie: exactly the paths whose match keys align at
    /// every level in both inputs. Labels, keys and weights are taken from
    /// the left trie; a matched leaf gets count = min of the two sides.
    ///
    /// The result is a fresh independent tree and is NOT finalized.
    pub fn consensus(&self, other: &Trie) -> Trie {

        let mut consensus = Trie::new();
        Self::intersect(&self.root, &other.root, &mut consensus.root);

        return consensus;
    }

    fn intersect(node1: &TrieNode, node2: &TrieNode, out: &mut TrieNode) {

        // matched leaf pair terminates a common pattern
        if (node1.is_feature && node2.is_feature) && (node1.match_key == node2.match_key) {
            out.is_feature = true;
            out.count = node1.count.min(node2.count);
            out.weight = node1.weight;
        }

        for child1 in node1.children.iter() {
            for child2 in node2.children.iter() {
                if child1.match_key == child2.match_key {

                    let mut node = TrieNode::root();
                    node.label = child1.label.clone();
                    node.match_key = child1.match_key;
                    node.weight = child1.weight;

                    Self::intersect(child1, child2, &mut node);
                    out.add_child(node);
                }
            }
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        return Self::new();
    }
}
