//! Plaintext report: a header per language followed by aligned neighbor rows.

use crate::Section;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

/// Renders sections as plaintext.
///
/// ```text
/// Rust: (#dea584)
/// ================================================================================
///                            Tan:   0.2631 (#dea585)
/// ```
pub fn render(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}: ({})", section.name, section.color.to_hex());
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
        for n in &section.neighbors {
            let _ = writeln!(out, "{:>30}: {:8.4} ({})", n.name, n.diff, n.color.to_hex());
        }
    }
    out
}
