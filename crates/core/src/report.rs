//! Threshold filtering and the end-to-end `compute_report` entry point.

use crate::color::{parse_hex, rgb_to_lab, Lab, Rgb};
use crate::error::ColorError;
use crate::rank::{rank, DiffEntry};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Returns the prefix of an ascending `sorted` list whose diffs are strictly
/// below `threshold`.
///
/// A NaN threshold admits nothing.
pub fn filter(sorted: &[DiffEntry], threshold: f64) -> &[DiffEntry] {
    let end = sorted.iter().take_while(|e| e.diff < threshold).count();
    &sorted[..end]
}

/// An input entry that was dropped because its color did not parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedColor {
    pub name: String,
    pub value: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: ColorError,
}

fn serialize_display<S: serde::Serializer>(err: &ColorError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(err)
}

/// Ranked, threshold-filtered neighbors for every valid input color.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    threshold: f64,
    neighbors: BTreeMap<String, Vec<DiffEntry>>,
    colors: BTreeMap<String, Rgb>,
    skipped: Vec<SkippedColor>,
}

/// Computes the report for a name -> `#RRGGBB` mapping.
///
/// Entries whose color fails to parse are excluded from ranking, logged at
/// `warn`, and listed in [`Report::skipped`]. Never fails.
pub fn compute_report(colors: &BTreeMap<String, String>, threshold: f64) -> Report {
    let mut parsed = BTreeMap::new();
    let mut skipped = Vec::new();

    for (name, value) in colors {
        match parse_hex(value) {
            Ok(rgb) => {
                parsed.insert(name.clone(), rgb);
            }
            Err(error) => {
                warn!(name = %name, value = %value, %error, "skipping unparsable color");
                skipped.push(SkippedColor {
                    name: name.clone(),
                    value: value.clone(),
                    error,
                });
            }
        }
    }

    let labs: BTreeMap<String, Lab> = parsed
        .iter()
        .map(|(name, &rgb)| (name.clone(), rgb_to_lab(rgb)))
        .collect();

    let neighbors: BTreeMap<String, Vec<DiffEntry>> = rank(&labs)
        .into_iter()
        .map(|(name, mut diffs)| {
            let kept = filter(&diffs, threshold).len();
            diffs.truncate(kept);
            (name, diffs)
        })
        .collect();

    debug!(
        colors = labs.len(),
        skipped = skipped.len(),
        threshold,
        "computed color report"
    );

    Report {
        threshold,
        neighbors,
        colors: parsed,
        skipped,
    }
}

impl Report {
    /// The threshold the neighbor lists were filtered with.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Neighbors of `name` below the threshold, closest first.
    ///
    /// `None` if `name` was not a valid input color.
    pub fn neighbors(&self, name: &str) -> Option<&[DiffEntry]> {
        self.neighbors.get(name).map(Vec::as_slice)
    }

    /// The parsed color of `name`.
    pub fn color(&self, name: &str) -> Option<Rgb> {
        self.colors.get(name).copied()
    }

    /// Input entries that were dropped.
    pub fn skipped(&self) -> &[SkippedColor] {
        &self.skipped
    }

    /// Number of valid colors in the report.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Every valid name with its (possibly empty) neighbor list, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DiffEntry])> {
        self.neighbors
            .iter()
            .map(|(name, diffs)| (name.as_str(), diffs.as_slice()))
    }

    /// Picks the entries to render.
    ///
    /// With no requested names, every name in sorted order; otherwise the
    /// requested names in the order given. Names without any neighbor are
    /// left out either way. Requested names that are not valid colors are
    /// logged and skipped.
    pub fn select<'a, S: AsRef<str>>(&'a self, names: &[S]) -> Vec<(&'a str, &'a [DiffEntry])> {
        if names.is_empty() {
            return self.iter().filter(|(_, diffs)| !diffs.is_empty()).collect();
        }
        names
            .iter()
            .filter_map(|name| {
                let name = name.as_ref();
                match self.neighbors.get_key_value(name) {
                    Some((key, diffs)) => Some((key.as_str(), diffs.as_slice())),
                    None => {
                        warn!(name, "requested language has no valid color");
                        None
                    }
                }
            })
            .filter(|(_, diffs)| !diffs.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(diffs: &[f64]) -> Vec<DiffEntry> {
        diffs
            .iter()
            .enumerate()
            .map(|(i, &diff)| DiffEntry {
                name: format!("n{i}"),
                diff,
            })
            .collect()
    }

    fn input(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // -- filter --

    #[test]
    fn filter_stops_at_first_entry_at_or_above_threshold() {
        let sorted = entries(&[1.0, 5.0, 10.0, 12.0]);
        let kept = filter(&sorted, 10.0);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].diff, 5.0);
    }

    #[test]
    fn filter_keeps_everything_below_threshold() {
        let sorted = entries(&[1.0, 2.0]);
        assert_eq!(filter(&sorted, 10.0).len(), 2);
    }

    #[test]
    fn filter_empty_input_and_zero_threshold() {
        assert!(filter(&[], 10.0).is_empty());
        assert!(filter(&entries(&[0.0, 1.0]), 0.0).is_empty());
    }

    #[test]
    fn filter_nan_threshold_admits_nothing() {
        assert!(filter(&entries(&[0.0, 1.0]), f64::NAN).is_empty());
    }

    // -- compute_report --

    #[test]
    fn near_reds_are_neighbors_and_green_is_not() {
        let report = compute_report(
            &input(&[("A", "#FF0000"), ("B", "#FE0000"), ("C", "#00FF00")]),
            10.0,
        );
        let a = report.neighbors("A").unwrap();
        let b = report.neighbors("B").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].name, "B");
        assert!(a[0].diff < 1.0, "got {}", a[0].diff);
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].name, "A");
        assert!(report.neighbors("C").unwrap().is_empty());
        assert!(report.skipped().is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let report = compute_report(&input(&[("A", "#FF0000"), ("B", "notacolor")]), 10.0);
        assert_eq!(report.len(), 1);
        assert_eq!(report.neighbors("A"), Some(&[][..]));
        assert!(report.neighbors("B").is_none());
        assert!(report.color("B").is_none());

        let skipped = report.skipped();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].name, "B");
        assert!(matches!(skipped[0].error, ColorError::InvalidFormat(_)));
    }

    #[test]
    fn skipped_colors_never_appear_as_neighbors() {
        let report = compute_report(
            &input(&[("A", "#FF0000"), ("B", "#FE0000"), ("Bad", "#GG0000")]),
            1000.0,
        );
        for (_, diffs) in report.iter() {
            assert!(diffs.iter().all(|d| d.name != "Bad"));
        }
        assert!(matches!(
            report.skipped()[0].error,
            ColorError::InvalidHex(_)
        ));
    }

    #[test]
    fn report_keeps_parsed_colors_and_threshold() {
        let report = compute_report(&input(&[("A", "#FF0000")]), 7.5);
        assert_eq!(report.threshold(), 7.5);
        assert_eq!(report.color("A"), Some(Rgb { r: 255, g: 0, b: 0 }));
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = compute_report(&BTreeMap::new(), 10.0);
        assert!(report.is_empty());
        assert!(report.select::<&str>(&[]).is_empty());
    }

    // -- select --

    #[test]
    fn select_without_names_lists_non_empty_entries_sorted() {
        let report = compute_report(
            &input(&[("C", "#00FF00"), ("B", "#FE0000"), ("A", "#FF0000")]),
            10.0,
        );
        let picked: Vec<&str> = report.select::<&str>(&[]).iter().map(|(n, _)| *n).collect();
        assert_eq!(picked, vec!["A", "B"]);
    }

    #[test]
    fn select_honors_requested_order_and_drops_unknown() {
        let report = compute_report(
            &input(&[("A", "#FF0000"), ("B", "#FE0000"), ("C", "#00FF00")]),
            10.0,
        );
        let picked: Vec<&str> = report
            .select(&["B", "Nope", "C", "A"])
            .iter()
            .map(|(n, _)| *n)
            .collect();
        assert_eq!(picked, vec!["B", "A"]);
    }

    #[test]
    fn report_serializes_skipped_error_as_message() {
        let report = compute_report(&input(&[("B", "notacolor")]), 10.0);
        let json = serde_json::to_value(&report).unwrap();
        let msg = json["skipped"][0]["error"].as_str().unwrap();
        assert!(msg.contains("notacolor"), "got {msg}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn filter_is_idempotent(
                mut diffs in proptest::collection::vec(0.0_f64..200.0, 0..20),
                threshold in 0.0_f64..200.0,
            ) {
                diffs.sort_by(f64::total_cmp);
                let sorted = entries(&diffs);
                let once = filter(&sorted, threshold).to_vec();
                let twice = filter(&once, threshold).to_vec();
                prop_assert_eq!(&once, &twice);
                prop_assert!(once.iter().all(|e| e.diff < threshold));
            }

            #[test]
            fn neighbors_are_below_threshold(
                hexes in proptest::collection::btree_map("[a-z]{1,4}", "#[0-9a-f]{6}", 0..10),
                threshold in 0.0_f64..100.0,
            ) {
                let report = compute_report(&hexes, threshold);
                prop_assert_eq!(report.len(), hexes.len());
                for (_, diffs) in report.iter() {
                    prop_assert!(diffs.iter().all(|d| d.diff < threshold));
                }
            }
        }
    }
}
