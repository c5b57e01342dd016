//! CIE94 perceptual color difference over CIELAB.
//!
//! The CIE94 formula scales the chroma and hue terms by the chroma of the
//! *first* color only, so `cie94(a, b)` and `cie94(b, a)` generally differ.
//! Rankings always compute `cie94(subject, candidate)` for a fixed subject.

use crate::color::Lab;
use serde::{Deserialize, Serialize};

/// Chroma scaling coefficient in SC = 1 + K1 * C1.
pub const K1: f64 = 0.045;

/// Hue scaling coefficient in SH = 1 + K2 * C1.
pub const K2: f64 = 0.015;

/// Parametric weighting factors (kL, kC, kH) for CIE94.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cie94Weights {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Cie94Weights {
    /// Graphic-arts reference conditions: kL = kC = kH = 1.
    pub const UNITY: Cie94Weights = Cie94Weights {
        l: 1.0,
        c: 1.0,
        h: 1.0,
    };
}

impl Default for Cie94Weights {
    fn default() -> Self {
        Self::UNITY
    }
}

fn chroma(c: Lab) -> f64 {
    (c.a * c.a + c.b * c.b).sqrt()
}

/// CIE94 delta-E between `c1` and `c2` with unity weights.
pub fn cie94(c1: Lab, c2: Lab) -> f64 {
    cie94_weighted(c1, c2, Cie94Weights::UNITY)
}

/// CIE94 delta-E between `c1` and `c2` with explicit weighting factors.
///
/// Always non-negative for finite inputs. A negative ΔH² (rounding noise when
/// the hue difference is ~0) is clamped to zero.
pub fn cie94_weighted(c1: Lab, c2: Lab, weights: Cie94Weights) -> f64 {
    let chroma1 = chroma(c1);
    let chroma2 = chroma(c2);

    let dl = c2.l - c1.l;
    let dc = chroma2 - chroma1;
    let de_sq = (c1.l - c2.l).powi(2) + (c1.a - c2.a).powi(2) + (c1.b - c2.b).powi(2);
    let dh_sq = de_sq - dl * dl - dc * dc;
    let dh = if dh_sq > 0.0 { dh_sq.sqrt() } else { 0.0 };

    let sc = 1.0 + K1 * chroma1;
    let sh = 1.0 + K2 * chroma1;

    let dl = dl / weights.l;
    let dc = dc / (weights.c * sc);
    let dh = dh / (weights.h * sh);

    (dl * dl + dc * dc + dh * dh).sqrt()
}
