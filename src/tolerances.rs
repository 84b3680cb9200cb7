// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized numeric thresholds with justification.
//!
//! Every tolerance used by the chemistry transforms and the simplex engine
//! is defined here with documentation of its origin. No ad-hoc magic
//! numbers. These constants are fixed parts of the behavioral contract,
//! not configuration: changing one changes observable results.

// ═══════════════════════════════════════════════════════════════════
// Simplex engine
// ═══════════════════════════════════════════════════════════════════

/// Pivot element considered zero.
///
/// Below this magnitude a pivot would amplify rounding error by > 1e15,
/// destroying all significant digits of an f64. Rows with such entries are
/// skipped during elimination.
pub const PIVOT_ZERO: f64 = 1e-15;

/// Minimum-ratio test positivity threshold.
///
/// Only strictly positive pivot-column entries are eligible leaving rows;
/// 1e-12 separates genuine positives from elimination residue.
pub const RATIO_POSITIVE: f64 = 1e-12;

/// Negative right-hand-side detection for row sign normalization.
///
/// Shifted RHS values more negative than this get their row negated so
/// phase 1 starts from a nonnegative RHS.
pub const RHS_FLIP: f64 = 1e-12;

/// Entering-column reduced-cost threshold.
///
/// A column enters the basis only if its reduced cost is below −1e-9;
/// anything closer to zero is treated as optimal to avoid pivoting on
/// rounding noise.
pub const REDUCED_COST: f64 = 1e-9;

/// Phase-1 optimality test for feasibility.
///
/// The problem is declared infeasible when the optimal sum of artificial
/// variables exceeds this. Constraint magnitudes here are O(1e-3)–O(1)
/// (mole quantities), so 1e-6 cleanly separates "drove artificials to
/// zero" from "could not".
pub const PHASE1_FEASIBLE: f64 = 1e-6;

/// Big-M penalty on artificial-variable columns in phase 2.
///
/// Keeps artificials out of the optimal basis without removing their
/// columns from the tableau. 1e6 dominates any objective coefficient in
/// this problem class (material weights are O(100)).
pub const ARTIFICIAL_PENALTY: f64 = 1e6;

/// Pivot cap per phase.
///
/// Guards against cycling on near-degenerate problems, which are common
/// here: many materials share overlapping oxide contributions, producing
/// near-parallel constraint rows. Exceeding the cap is a solver failure,
/// not an infinite loop.
pub const MAX_PIVOTS: usize = 5000;

// ═══════════════════════════════════════════════════════════════════
// Recipe solver
// ═══════════════════════════════════════════════════════════════════

/// Lower bound on the free scale variable `s`.
///
/// The UMF constraint system `A·w − target·s = 0` is homogeneous; without
/// a strictly positive floor on `s` the trivial all-zero solution would
/// always be optimal.
pub const SCALE_LOWER_BOUND: f64 = 1e-3;

/// Materiality threshold for solved weights (batch units).
///
/// Weights below 0.01 are unweighable in practice and are dropped before
/// rescaling to the requested batch weight.
pub const TRACE_WEIGHT: f64 = 0.01;

/// Solved-total-weight zero test.
///
/// A total below this means the LP returned a degenerate solution; the
/// solver reports no solution rather than rescaling noise.
pub const ZERO_TOTAL: f64 = 1e-9;

// ═══════════════════════════════════════════════════════════════════
// Chemistry transforms and validation
// ═══════════════════════════════════════════════════════════════════

/// Limit-range boundary slack.
///
/// Values within 1e-9 of a limit bound classify as in-range, making the
/// bounds inclusive under f64 rounding.
pub const LIMIT_BOUNDARY: f64 = 1e-9;

/// Flux-unity invariant tolerance.
///
/// A flux-normalized UMF has flux moles summing to 1.0 within this;
/// the normalization is a single division per oxide, so only one rounding
/// step accumulates.
pub const FLUX_UNITY: f64 = 1e-6;

/// Round-trip tolerance: solve a target UMF, convert the recipe back,
/// compare per-oxide. Covers LP convergence (phase-1 feasibility at 1e-6)
/// plus two-decimal weight rounding at batch scale (~5e-5 relative).
pub const ROUND_TRIP: f64 = 1e-3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_ordering_is_consistent() {
        assert!(PIVOT_ZERO < RATIO_POSITIVE, "pivot zero < ratio positivity");
        assert!(RATIO_POSITIVE < REDUCED_COST, "ratio < reduced cost");
        assert!(REDUCED_COST < PHASE1_FEASIBLE, "reduced cost < phase-1 test");
        assert!(PHASE1_FEASIBLE < ROUND_TRIP, "phase-1 < round trip");
    }

    #[test]
    fn scale_bound_exceeds_zero_total() {
        assert!(SCALE_LOWER_BOUND > ZERO_TOTAL);
    }
}
