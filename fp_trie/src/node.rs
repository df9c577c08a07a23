//! Holds the trie node struct: one step of an inserted pattern, with the
//! children owned by the parent in insertion order.

use crate::pattern::PatternStep;
use serde::{Serialize, Deserialize};

/// A node in the trie. `match_key` carries all comparison semantics; `label`
/// is display-only. A node is a feature leaf iff at least one inserted
/// pattern ends on it, in which case `count` and `weight` are meaningful.
///
/// `Clone` is a deep copy since children are owned, which is what consensus
/// construction relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrieNode {
    pub label: String,
    pub match_key: i64,
    pub children: Vec<TrieNode>,
    pub is_feature: bool,
    pub count: u64,
    pub weight: Option<f64>,
}

impl TrieNode {

    /// The root sentinel: no label, never a feature, key never compared.
    pub fn root() -> Self {
        return Self {
            label: String::new(),
            match_key: -1,
            children: Vec::new(),
            is_feature: false,
            count: 0,
            weight: None,
        };
    }

    pub fn from_step(step: &PatternStep) -> Self {
        return Self {
            label: step.label.clone(),
            match_key: step.match_key,
            children: Vec::new(),
            is_feature: false,
            count: 0,
            weight: None,
        };
    }

    pub fn add_child(&mut self, node: TrieNode) {
        // sibling keys stay pairwise distinct, insertion relies on it
        debug_assert!(self.child_with_key(node.match_key).is_none());
        self.children.push(node);
    }

    /// Index of the first child whose key equals `key`.
    pub fn child_with_key(&self, key: i64) -> Option<usize> {

        for (i, child) in self.children.iter().enumerate() {
            if child.match_key == key {
                return Some(i);
            }
        }

        return None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_child_lookup() {

        let mut node = TrieNode::root();
        node.add_child(TrieNode::from_step(&PatternStep::new("C".to_string(), 6)));
        node.add_child(TrieNode::from_step(&PatternStep::new("O".to_string(), 8)));

        assert_eq!(node.child_with_key(6), Some(0));
        assert_eq!(node.child_with_key(8), Some(1));
        assert_eq!(node.child_with_key(7), None);
    }

    #[test]
    fn quick_clone_is_independent() {

        let mut node = TrieNode::root();
        node.add_child(TrieNode::from_step(&PatternStep::new("C".to_string(), 6)));

        let mut copy = node.clone();
        copy.children[0].count = 99;
        copy.children[0].children.push(TrieNode::from_step(&PatternStep::new("N".to_string(), 7)));

        assert_eq!(node.children[0].count, 0);
        assert_eq!(node.children[0].children.len(), 0);
    }
}
