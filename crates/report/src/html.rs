//! HTML report: a CIE94 parameter table followed by one table of swatches.
//!
//! Each language heading carries an `id` so neighbor rows can link to it.

use crate::Section;
use langcolors_core::color::REFERENCE_WHITE;
use langcolors_core::Cie94Weights;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const DIFF_HEADER: &str =
    r#"Difference (<a href="https://en.wikipedia.org/wiki/Color_difference#CIE94">CIE1994</a>)"#;

/// Escapes text for use in element content and double-quoted attributes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_parameters(out: &mut String) {
    let w = Cie94Weights::UNITY;
    let rows = [
        ("X", REFERENCE_WHITE.x),
        ("Y", REFERENCE_WHITE.y),
        ("Z", REFERENCE_WHITE.z),
        ("WL", w.l),
        ("WC", w.c),
        ("WH", w.h),
    ];
    out.push_str("<table style=\"margin-bottom:50px\">\n");
    out.push_str("<thead><tr><th width=\"33%\">CIE1994 Parameters</th></tr></thead>\n<tbody>\n");
    for (label, value) in rows {
        let _ = writeln!(out, "<tr><td>{label}</td><td>{value:.4}</td></tr>");
    }
    out.push_str("</tbody>\n</table>\n");
}

fn write_section(out: &mut String, section: &Section) {
    let name = escape(&section.name);
    let _ = write!(
        out,
        concat!(
            "<tr style=\"height:10px\"><td colspan=\"3\"></td></tr>\n",
            "<tr style=\"height:1px;background-color:black\"><td colspan=\"3\"></td></tr>\n",
            "<tr id=\"{name}\"><td style=\"font-weight:bold\">{name}</td><td></td>",
            "<td style=\"background-color:{color}\"></td></tr>\n",
            "<tr style=\"height:10px\"><td colspan=\"3\"></td></tr>\n",
        ),
        name = name,
        color = section.color.to_hex(),
    );
    for n in &section.neighbors {
        let other = escape(&n.name);
        let _ = writeln!(
            out,
            "<tr><td><a href=\"#{other}\">{other}</a></td><td>{diff:.4}</td><td style=\"background-color:{color}\"></td></tr>",
            diff = n.diff,
            color = n.color.to_hex(),
        );
    }
}

/// Renders sections as a standalone HTML document.
pub fn render(sections: &[Section]) -> String {
    let mut out = String::from("<!doctype html>\n");
    write_parameters(&mut out);
    out.push_str("<table>\n<thead><tr>");
    let _ = write!(
        out,
        "<th width=\"30%\">Name</th><th width=\"30%\">{DIFF_HEADER}</th><th width=\"40%\">Color</th>"
    );
    out.push_str("</tr></thead>\n<tbody>\n");
    for section in sections {
        write_section(&mut out, section);
    }
    out.push_str("</tbody></table>\n");
    out
}

/// Renders sections and writes the document to `path`.
pub fn write(sections: &[Section], path: &Path) -> std::io::Result<()> {
    fs::write(path, render(sections))
}
