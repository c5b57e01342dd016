#![deny(unsafe_code)]
//! Core color pipeline for langcolors.
//!
//! Converts `#RRGGBB` brand colors to CIELAB (`Rgb` -> `Xyz` -> `Lab`),
//! compares every pair with the CIE94 delta-E metric, and keeps, for each
//! name, the other names closer than a threshold. [`compute_report`] runs the
//! whole pipeline.

pub mod color;
pub mod diff;
pub mod error;
pub mod rank;
pub mod report;

pub use color::{hex_to_lab, parse_hex, rgb_to_lab, rgb_to_xyz, xyz_to_lab, Lab, Rgb, Xyz};
pub use diff::{cie94, cie94_weighted, Cie94Weights};
pub use error::ColorError;
pub use rank::{rank, DiffEntry};
pub use report::{compute_report, filter, Report, SkippedColor};
