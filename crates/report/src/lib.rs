#![deny(unsafe_code)]
//! Rendering of langcolors reports.
//!
//! This crate sits between `langcolors-core` (which computes the ranked
//! neighbor lists) and the CLI. A [`Report`] is first flattened into
//! [`Section`]s, one per language that has at least one neighbor, each
//! carrying the hex colors needed for display. The [`text`] and [`html`]
//! modules render sections; JSON output serializes them directly.

pub mod html;
pub mod text;

use langcolors_core::{Report, Rgb};
use serde::Serialize;

/// One language and the languages whose colors are too close to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub color: Rgb,
    pub neighbors: Vec<Neighbor>,
}

/// A nearby language with its CIE94 difference from the section's language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub name: String,
    pub diff: f64,
    pub color: Rgb,
}

/// Builds the sections to render, using [`Report::select`] to pick and order
/// the languages.
pub fn sections<S: AsRef<str>>(report: &Report, names: &[S]) -> Vec<Section> {
    report
        .select(names)
        .into_iter()
        .filter_map(|(name, diffs)| {
            let neighbors = diffs
                .iter()
                .filter_map(|d| {
                    report.color(&d.name).map(|color| Neighbor {
                        name: d.name.clone(),
                        diff: d.diff,
                        color,
                    })
                })
                .collect();
            report.color(name).map(|color| Section {
                name: name.to_string(),
                color,
                neighbors,
            })
        })
        .collect()
}
