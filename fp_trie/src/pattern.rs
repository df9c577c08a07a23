//! Input model: ordered integer-keyed step sequences produced by an upstream
//! fingerprint stage, plus helpers for reading pattern files.

use crate::error::Error;
use rand::Rng;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// One step of a substructure pattern. `label` is only for display and GML
/// export; all structural comparison goes through `match_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternStep {
    pub label: String,
    pub match_key: i64,
}

impl PatternStep {

    pub fn new(label: String, match_key: i64) -> Self {
        return Self {
            label,
            match_key,
        };
    }
}

/// A whole substructure pattern: the step path, how many times the pattern
/// occurred in the molecule, and an optional numeric weight for the pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSequence {
    pub steps: Vec<PatternStep>,
    pub count: u64,
    pub numeric_value: Option<f64>,
}

impl PatternSequence {

    pub fn new(steps: Vec<PatternStep>, count: u64, numeric_value: Option<f64>) -> Self {
        return Self {
            steps,
            count,
            numeric_value,
        };
    }

    /// Builds a sequence whose labels are just the printed keys. Mostly for
    /// tests and generated workloads.
    pub fn from_keys(keys: &[i64], count: u64, numeric_value: Option<f64>) -> Self {

        let steps: Vec<PatternStep> = keys.iter()
            .map(|k| PatternStep::new(k.to_string(), *k))
            .collect();

        return Self {
            steps,
            count,
            numeric_value,
        };
    }

    pub fn len(&self) -> usize {
        return self.steps.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.steps.is_empty();
    }

    pub fn random(length: usize) -> Self {

        const SYMBOLS: [&str; 5] = ["C", "O", "N", "F", "S"];

        let mut rng = rand::thread_rng();

        let steps: Vec<PatternStep> = (0..length)
            .map(|_| {
                let idx = rng.gen_range(0..SYMBOLS.len());
                PatternStep::new(SYMBOLS[idx].to_string(), idx as i64)
            })
            .collect();

        let count = rng.gen_range(1..5);
        let numeric_value = Some(rng.gen::<f64>());

        return Self {
            steps,
            count,
            numeric_value,
        };
    }
}

/// Reads a list of pattern sequences from a `.json` file, or YAML for any
/// other extension.
pub fn read_pattern_file<P: AsRef<Path>>(filename: P) -> Result<Vec<PatternSequence>, Error> {

    let text = std::fs::read_to_string(&filename)?;

    let is_json = filename.as_ref()
        .extension()
        .map(|e| e == "json")
        .unwrap_or(false);

    let patterns = match is_json {
        true => serde_json::from_str(&text)?,
        false => serde_yaml::from_str(&text)?,
    };

    return Ok(patterns);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_pattern_json_roundtrip() {

        let patterns = vec![
            PatternSequence::from_keys(&[1, 2, 3], 4, Some(0.5)),
            PatternSequence::from_keys(&[1, 7], 1, None),
        ];

        let serialized = serde_json::to_string(&patterns).unwrap();
        let parsed: Vec<PatternSequence> = serde_json::from_str(&serialized).unwrap();

        assert_eq!(parsed, patterns);
    }

    #[test]
    fn quick_random_pattern_labels_track_keys() {

        for _ in 0..100 {
            let p = PatternSequence::random(6);
            assert_eq!(p.len(), 6);
            for step in p.steps.iter() {
                assert!(step.match_key >= 0 && step.match_key < 5);
            }
        }
    }
}
