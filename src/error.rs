// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for glaze chemistry operations.
//!
//! Public APIs return a proper enum so callers can pattern-match on failure
//! modes (unknown materials, no LP solution, database loading) rather than
//! parsing opaque strings.

use std::fmt;

/// Why the recipe solver produced no recipe.
///
/// All variants surface as a single `NoSolution` outcome; the reason is
/// carried for diagnostics. Recovery is a caller-level policy, typically
/// retrying with a broadened candidate material set (see `design`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSolutionReason {
    /// No non-negative material combination reproduces the target oxide ratios.
    Infeasible,
    /// The LP was detected unbounded. Should not occur given the constraint
    /// structure; kept as a distinct failure rather than looping.
    Unbounded,
    /// The solved total weight was numerically indistinguishable from zero.
    ZeroTotal,
    /// The pivot cap was exceeded (cycling guard on near-degenerate problems).
    IterationLimit,
}

impl fmt::Display for NoSolutionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infeasible => write!(f, "infeasible"),
            Self::Unbounded => write!(f, "unbounded"),
            Self::ZeroTotal => write!(f, "solved total weight is zero"),
            Self::IterationLimit => write!(f, "pivot iteration cap exceeded"),
        }
    }
}

/// Errors arising from forward transforms, recipe solving, or data loading.
#[derive(Debug, Clone, PartialEq)]
pub enum GlazeError {
    /// One or more recipe materials are absent from the materials database.
    /// Names every missing material; no partial computation is performed.
    UnknownMaterials(Vec<String>),

    /// The recipe solver found no acceptable recipe.
    NoSolution(NoSolutionReason),

    /// Materials database loading failed (path, underlying IO or parse error).
    DataLoad(String),
}

impl fmt::Display for GlazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMaterials(names) => {
                write!(f, "Materials not found in database: {}", names.join(", "))
            }
            Self::NoSolution(reason) => write!(f, "No recipe solution: {reason}"),
            Self::DataLoad(msg) => write!(f, "Materials database loading failed: {msg}"),
        }
    }
}

impl std::error::Error for GlazeError {}
