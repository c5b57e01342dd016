//! All-pairs CIE94 ranking of named colors.

use crate::color::Lab;
use crate::diff::cie94;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The difference between a subject color and one other named color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub name: String,
    pub diff: f64,
}

/// Ranks every named color against every other one.
///
/// For each name, returns all *other* names with `cie94(subject, other)`,
/// sorted ascending by difference. The sort is stable over the map's name
/// order, so equal differences come out alphabetically.
pub fn rank(colors: &BTreeMap<String, Lab>) -> BTreeMap<String, Vec<DiffEntry>> {
    colors
        .iter()
        .map(|(name, &subject)| (name.clone(), rank_against(name, subject, colors)))
        .collect()
}

/// Ranks a single subject against every entry of `colors` except `name` itself.
pub fn rank_against(name: &str, subject: Lab, colors: &BTreeMap<String, Lab>) -> Vec<DiffEntry> {
    let mut diffs: Vec<DiffEntry> = colors
        .iter()
        .filter(|(other, _)| other.as_str() != name)
        .map(|(other, &color)| DiffEntry {
            name: other.clone(),
            diff: cie94(subject, color),
        })
        .collect();
    diffs.sort_by(|a, b| a.diff.total_cmp(&b.diff));
    diffs
}
