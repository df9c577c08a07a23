//! GML export of a trie for visualization in yEd-style graph editors.
//!
//! One node block and one parent-to-child edge block per visited child, in
//! children-list order. Node ids are assigned by a counter that runs across
//! the whole export; the root sentinel always gets id -1.

use crate::node::TrieNode;
use crate::trie::Trie;

/// yEd palette used by the node colorers.
pub mod color {
    pub const GREY: &str = "#C0C0C0";
    pub const RED: &str = "#FF0000";
    pub const BLUE: &str = "#0000FF";
    pub const GREEN: &str = "#00FF00";
    pub const YELLOW: &str = "#FFFF00";
    pub const SANDY_BROWN: &str = "#F4A460";
    pub const SHADOW_BROWN: &str = "#B3A691";
}

/// How node labels map to colors, and what a feature leaf appends to its
/// label text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorScheme {
    /// Element symbols: C grey, O red, N blue, F green, S yellow. Feature
    /// leaves show their count.
    Element,
    /// Pharmacophore point classes: D and P blue, A and N red, L green.
    /// Feature leaves show their weight.
    Pharmacophore,
}

impl ColorScheme {

    fn lookup(&self, label: &str) -> Option<&'static str> {

        let first = match label.chars().next() {
            Some(c) => c,
            None => return None,
        };

        let picked = match self {
            ColorScheme::Element => match first {
                'C' => Some(color::GREY),
                'O' => Some(color::RED),
                'N' => Some(color::BLUE),
                'F' => Some(color::GREEN),
                'S' => Some(color::YELLOW),
                _ => None,
            },
            ColorScheme::Pharmacophore => match first {
                'D' | 'P' => Some(color::BLUE),
                'A' | 'N' => Some(color::RED),
                'L' => Some(color::GREEN),
                _ => None,
            },
        };

        return picked;
    }
}

#[derive(Debug, Clone)]
pub struct GmlNode {
    pub id: i64,
    pub label: String,
    pub fill: Option<&'static str>,
}

impl GmlNode {

    pub fn to_gml(&self) -> String {

        let mut s = String::new();
        s += "\tnode [\n";
        s += &format!("\t\tid {}\n", self.id);
        s += &format!("\t\tlabel \"{}\"\n", self.label);
        if let Some(fill) = self.fill {
            s += "\t\tgraphics [\n";
            s += &format!("\t\t\tfill \"{}\"\n", fill);
            s += "\t\t]\n";
        }
        s += "\t]\n";

        return s;
    }
}

#[derive(Debug, Clone)]
pub struct GmlEdge {
    pub source: i64,
    pub target: i64,
}

impl GmlEdge {

    pub fn to_gml(&self) -> String {

        let mut s = String::new();
        s += "\tedge [\n";
        s += &format!("\t\tsource {}\n", self.source);
        s += &format!("\t\ttarget {}\n", self.target);
        s += "\t]\n";

        return s;
    }
}

/// Renders the whole trie as a GML text blob.
pub fn export(trie: &Trie, scheme: ColorScheme) -> String {

    let mut sb = String::new();
    sb += "graph [\n";

    // root sentinel block
    sb += "\tnode [\n";
    sb += "\t\tid -1\n";
    sb += "\t\tlabel \"root\"\n";
    sb += "\t\tattribute 0\n";
    sb += "\t\tgraphics [\n";
    sb += "\t\t\ttype \"roundrectangle\"\n";
    sb += &format!("\t\t\tdropShadowColor \"{}\"\n", color::SHADOW_BROWN);
    sb += "\t\t\tdropShadowOffsetX 5\n";
    sb += "\t\t]\n";
    sb += "\t]\n";

    let mut next_id: i64 = -1;
    write_children(trie.root(), -1, &mut next_id, scheme, &mut sb);

    sb += "]\n";

    return sb;
}

fn write_children(node: &TrieNode, parent_id: i64, next_id: &mut i64, scheme: ColorScheme, sb: &mut String) {

    for child in node.children.iter() {

        *next_id += 1;
        let id = *next_id;

        let mut label = child.label.clone();
        let mut fill = None;

        // mark leaves and append their count or weight
        if child.is_feature {
            label = match scheme {
                ColorScheme::Element => format!("{} ({})", label, child.count),
                ColorScheme::Pharmacophore => {
                    format!("{} ({:.3})", label, child.weight.unwrap_or(0.0))
                },
            };
            fill = Some(color::SANDY_BROWN);
        }

        // the category color wins over the leaf marker
        if let Some(picked) = scheme.lookup(&child.label) {
            fill = Some(picked);
        }

        let gml_node = GmlNode {
            id,
            label,
            fill,
        };

        let gml_edge = GmlEdge {
            source: parent_id,
            target: id,
        };

        sb.push_str(&gml_node.to_gml());
        sb.push_str(&gml_edge.to_gml());

        write_children(child, id, next_id, scheme, sb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{PatternSequence, PatternStep};

    fn labeled_seq(labels: &[(&str, i64)], count: u64, weight: Option<f64>) -> PatternSequence {

        let steps = labels.iter()
            .map(|(label, key)| PatternStep::new(label.to_string(), *key))
            .collect();

        return PatternSequence::new(steps, count, weight);
    }

    #[test]
    fn quick_export_structure() {

        let mut trie = Trie::new();
        trie.insert(&labeled_seq(&[("C", 6), ("O", 8)], 3, None));
        trie.insert(&labeled_seq(&[("C", 6), ("N", 7)], 1, None));
        trie.finalize();

        let gml = export(&trie, ColorScheme::Element);

        // root plus three trie nodes, one edge per trie node
        assert_eq!(gml.matches("\tnode [").count(), 4);
        assert_eq!(gml.matches("\tedge [").count(), 3);

        assert!(gml.starts_with("graph [\n"));
        assert!(gml.ends_with("]\n"));

        // shared prefix node is not a leaf and keeps its bare label
        assert!(gml.contains("label \"C\""));
        assert!(gml.contains("label \"O (3)\""));
        assert!(gml.contains("label \"N (1)\""));

        assert!(gml.contains(color::GREY));
        assert!(gml.contains(color::RED));
        assert!(gml.contains(color::BLUE));
    }

    #[test]
    fn quick_export_ids_are_consecutive() {

        let mut trie = Trie::new();
        trie.insert(&labeled_seq(&[("C", 6), ("O", 8), ("N", 7)], 1, None));
        trie.finalize();

        let gml = export(&trie, ColorScheme::Element);

        assert!(gml.contains("\t\tid -1\n"));
        assert!(gml.contains("\t\tid 0\n"));
        assert!(gml.contains("\t\tid 1\n"));
        assert!(gml.contains("\t\tid 2\n"));

        // edges chain parent to child
        assert!(gml.contains("\t\tsource -1\n\t\ttarget 0\n"));
        assert!(gml.contains("\t\tsource 0\n\t\ttarget 1\n"));
        assert!(gml.contains("\t\tsource 1\n\t\ttarget 2\n"));
    }

    #[test]
    fn quick_pharmacophore_scheme_shows_weights() {

        let mut trie = Trie::new();
        trie.insert(&labeled_seq(&[("D", 1), ("A", 2)], 2, Some(0.5)));
        trie.insert(&labeled_seq(&[("D", 1), ("L", 3)], 1, Some(1.25)));
        trie.finalize();

        let gml = export(&trie, ColorScheme::Pharmacophore);

        assert!(gml.contains("label \"A (0.500)\""));
        assert!(gml.contains("label \"L (1.250)\""));
        assert!(gml.contains(color::BLUE));
        assert!(gml.contains(color::RED));
        assert!(gml.contains(color::GREEN));
        assert!(!gml.contains(color::SANDY_BROWN));
    }

    #[test]
    fn quick_uncategorized_leaf_keeps_marker_color() {

        let mut trie = Trie::new();
        trie.insert(&labeled_seq(&[("X", 1)], 1, None));
        trie.finalize();

        let gml = export(&trie, ColorScheme::Element);

        assert!(gml.contains("label \"X (1)\""));
        assert!(gml.contains(color::SANDY_BROWN));
    }
}
