//! Implementation of an in-memory trie index for molecular substructure patterns.
//!
//! Fingerprint generators emit ordered sequences of integer-labeled steps, one sequence
//! per substructure found in a molecule. Sequences sharing a common prefix share nodes
//! in the trie, so a whole fingerprint is stored in space proportional to the number of
//! distinct prefixes rather than patterns times pattern length.
//!
//! Two finalized tries can be compared with several kernels (Tanimoto over matched
//! leaves, min-count, spectrum dot product, weighted spectrum, percent match) or
//! intersected into a consensus trie containing only the paths present in both. A trie
//! can also be exported to GML for inspection in a graph editor.
//!
//! The trie does no chemistry itself. Match keys are opaque integers produced upstream;
//! only their equality matters here.
//!
//! TODO
//! - [x] prototype trie construction and kernels with tests
//! - [x] consensus (intersection) tries
//! - [ ] parallel all-pairs comparison over a trie collection
//!
pub mod pattern;
pub mod accumulator;
pub mod node;
pub mod trie;
pub mod gml;
pub mod error;
