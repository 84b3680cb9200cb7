// SPDX-License-Identifier: AGPL-3.0-only

//! Cone 6 oxidation limit formula validation.
//!
//! Limit ranges follow the Hesselberth & Roy style tables for cone 6
//! oxidation, in UMF moles with fluxes summing to 1.0. A single fixed
//! firing profile; the table order (fluxes, amphoterics, glass former) is
//! part of the observable contract and is preserved in the output.

use crate::chemistry::Umf;
use crate::tolerances::LIMIT_BOUNDARY;
use serde::Serialize;
use std::fmt;

/// Cone 6 oxidation acceptable ranges: (oxide, min, max) in UMF moles.
pub const CONE6_LIMITS: &[(&str, f64, f64)] = &[
    // Fluxes (sum ≈ 1.0)
    ("Na2O", 0.05, 0.30),
    ("K2O", 0.03, 0.25),
    ("CaO", 0.10, 0.65),
    ("MgO", 0.00, 0.35),
    ("ZnO", 0.00, 0.30),
    ("SrO", 0.00, 0.20),
    ("BaO", 0.00, 0.15),
    ("Li2O", 0.00, 0.10),
    // Amphoterics
    ("Al2O3", 0.20, 0.55),
    ("B2O3", 0.00, 0.60),
    // Glass formers
    ("SiO2", 2.50, 5.00),
];

/// Classification of one oxide value against its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitStatus {
    Ok,
    Low,
    High,
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

/// One row of a limit check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitCheck {
    pub oxide: &'static str,
    /// UMF value, rounded to 4 decimals for reporting.
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub status: LimitStatus,
}

/// Classify every tabulated oxide against its cone 6 range.
///
/// Absent oxides read as 0.0. Boundary values are inclusive: `low` only
/// below min − 1e-9, `high` only above max + 1e-9. Output preserves the
/// fixed table order.
#[must_use]
pub fn check_limits(umf: &Umf) -> Vec<LimitCheck> {
    CONE6_LIMITS
        .iter()
        .map(|&(ox, min, max)| {
            let value = umf.get(ox);
            let status = if value < min - LIMIT_BOUNDARY {
                LimitStatus::Low
            } else if value > max + LIMIT_BOUNDARY {
                LimitStatus::High
            } else {
                LimitStatus::Ok
            };
            LimitCheck {
                oxide: ox,
                value: (value * 1e4).round() / 1e4,
                min,
                max,
                status,
            }
        })
        .collect()
}
