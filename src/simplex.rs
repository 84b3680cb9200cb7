// SPDX-License-Identifier: AGPL-3.0-only

//! Two-phase primal simplex for `min c·x  s.t.  A·x = b, x ≥ lb`.
//!
//! Dense-tableau method sized for this problem class: materials and oxides
//! each in the low tens. The tableau is a flat row-major `Vec<f64>` with
//! integer indexing; name-to-index translation happens at the solver
//! boundary, never inside the pivot loop.
//!
//! Procedure:
//!   1. Bound shift `y = x − lb`, adjusting the RHS to `b − A·lb`.
//!   2. Row sign normalization so phase 1 starts from a nonnegative RHS.
//!   3. Phase 1: one artificial variable per row, minimize their sum.
//!      Nonzero optimum ⇒ infeasible.
//!   4. Phase 2: install the true objective, penalize artificial columns
//!      (big-M) so they never re-enter, re-express the objective over the
//!      current basis, resume pivoting.
//!   5. Pivot cap per phase as a cycling guard.
//!   6. Read basic-variable values off the final tableau, add back `lb`.
//!
//! Equality constraints and per-variable lower bounds only; this is not a
//! general LP library.

use crate::tolerances::{
    ARTIFICIAL_PENALTY, MAX_PIVOTS, PHASE1_FEASIBLE, PIVOT_ZERO, RATIO_POSITIVE, REDUCED_COST,
    RHS_FLIP,
};

/// Solver failure modes. All are terminal for the given problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplexError {
    /// Phase 1 could not drive the artificial variables to zero.
    Infeasible,
    /// No eligible leaving row for an entering column.
    Unbounded,
    /// Pivot cap exceeded (cycling guard).
    IterationLimit,
}

impl std::fmt::Display for SimplexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Infeasible => write!(f, "infeasible"),
            Self::Unbounded => write!(f, "unbounded"),
            Self::IterationLimit => write!(f, "iteration limit"),
        }
    }
}

/// Minimize `c·x` subject to `A·x = b`, `x ≥ lower_bounds`.
///
/// `a` is row-major with `n` columns and `b.len()` rows.
///
/// # Errors
///
/// [`SimplexError`] on infeasibility, unboundedness, or pivot-cap overrun.
pub fn solve(
    c: &[f64],
    a: &[f64],
    b: &[f64],
    n: usize,
    lower_bounds: &[f64],
) -> Result<Vec<f64>, SimplexError> {
    let m = b.len();
    debug_assert_eq!(a.len(), m * n, "A must be m×n row-major");
    debug_assert_eq!(c.len(), n);
    debug_assert_eq!(lower_bounds.len(), n);

    // Step 1: shift y = x − lb, so y ≥ 0 and RHS becomes b − A·lb.
    let mut a_shift = a.to_vec();
    let mut b_shift = b.to_vec();
    for i in 0..m {
        for j in 0..n {
            b_shift[i] -= a[i * n + j] * lower_bounds[j];
        }
    }

    // Step 2: flip rows with negative RHS.
    for i in 0..m {
        if b_shift[i] < -RHS_FLIP {
            b_shift[i] = -b_shift[i];
            for j in 0..n {
                a_shift[i * n + j] = -a_shift[i * n + j];
            }
        }
    }

    // Tableau layout: columns [y_0..y_{n-1} | a_0..a_{m-1} | rhs],
    // rows [constraints 0..m | objective].
    let total_cols = n + m;
    let cols = total_cols + 1;
    let mut tab = vec![0.0; (m + 1) * cols];
    for i in 0..m {
        tab[i * cols..i * cols + n].copy_from_slice(&a_shift[i * n..(i + 1) * n]);
        tab[i * cols + n + i] = 1.0;
        tab[i * cols + total_cols] = b_shift[i];
    }

    // Phase-1 objective: min Σ artificials, expressed over the artificial
    // basis by subtracting every constraint row.
    for j in n..total_cols {
        tab[m * cols + j] = 1.0;
    }
    for i in 0..m {
        for j in 0..cols {
            let v = tab[i * cols + j];
            tab[m * cols + j] -= v;
        }
    }

    let mut basis: Vec<usize> = (n..n + m).collect();

    run_phase(&mut tab, &mut basis, m, total_cols)?;

    // Step 3 verdict: leftover artificial mass means infeasible.
    if tab[m * cols + total_cols].abs() > PHASE1_FEASIBLE {
        return Err(SimplexError::Infeasible);
    }

    // Step 4: true objective, big-M on artificial columns.
    for j in 0..cols {
        tab[m * cols + j] = 0.0;
    }
    tab[m * cols..m * cols + n].copy_from_slice(c);
    for j in n..total_cols {
        tab[m * cols + j] = ARTIFICIAL_PENALTY;
    }
    // Re-express the objective over the current basis.
    for i in 0..m {
        let factor = tab[m * cols + basis[i]];
        if factor.abs() > PIVOT_ZERO {
            for j in 0..cols {
                let v = tab[i * cols + j];
                tab[m * cols + j] -= factor * v;
            }
        }
    }

    run_phase(&mut tab, &mut basis, m, total_cols)?;

    // Step 6: extract y from basic rows, add the bound back.
    let mut y = vec![0.0; n];
    for i in 0..m {
        if basis[i] < n {
            y[basis[i]] = tab[i * cols + total_cols];
        }
    }
    Ok((0..n).map(|j| y[j] + lower_bounds[j]).collect())
}

/// Dantzig-rule pivoting until optimal, unbounded, or the pivot cap.
fn run_phase(
    tab: &mut [f64],
    basis: &mut [usize],
    m: usize,
    total_cols: usize,
) -> Result<(), SimplexError> {
    let cols = total_cols + 1;
    for _ in 0..MAX_PIVOTS {
        // Entering column: most negative reduced cost.
        let mut min_rc = -REDUCED_COST;
        let mut enter = None;
        for j in 0..total_cols {
            let rc = tab[m * cols + j];
            if rc < min_rc {
                min_rc = rc;
                enter = Some(j);
            }
        }
        let Some(enter) = enter else {
            return Ok(()); // optimal
        };

        // Leaving row: minimum ratio over strictly positive column entries.
        let mut min_ratio = f64::INFINITY;
        let mut leave = None;
        for i in 0..m {
            let aij = tab[i * cols + enter];
            if aij > RATIO_POSITIVE {
                let ratio = tab[i * cols + total_cols] / aij;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    leave = Some(i);
                }
            }
        }
        let Some(leave) = leave else {
            return Err(SimplexError::Unbounded);
        };

        pivot(tab, m, total_cols, leave, enter);
        basis[leave] = enter;
    }
    Err(SimplexError::IterationLimit)
}

/// Normalize the pivot row, then eliminate the pivot column from every
/// other row including the objective row.
fn pivot(tab: &mut [f64], m: usize, total_cols: usize, row: usize, col: usize) {
    let cols = total_cols + 1;
    let piv = tab[row * cols + col];
    if piv.abs() < PIVOT_ZERO {
        return;
    }
    let inv = 1.0 / piv;
    for j in 0..cols {
        tab[row * cols + j] *= inv;
    }
    for i in 0..=m {
        if i == row {
            continue;
        }
        let factor = tab[i * cols + col];
        if factor.abs() < PIVOT_ZERO {
            continue;
        }
        for j in 0..cols {
            let v = tab[row * cols + j];
            tab[i * cols + j] -= factor * v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_equality_unique_solution() {
        // min x  s.t.  x = 5, x ≥ 0.
        let x = solve(&[1.0], &[1.0], &[5.0], 1, &[0.0]).expect("solve");
        assert!((x[0] - 5.0).abs() < 1e-9, "x = {}", x[0]);
    }

    #[test]
    fn objective_prefers_cheaper_variable() {
        // min 2x + y  s.t.  x + y = 4 → y = 4, x = 0.
        let x = solve(&[2.0, 1.0], &[1.0, 1.0], &[4.0], 2, &[0.0, 0.0]).expect("solve");
        assert!(x[0].abs() < 1e-9, "x = {}", x[0]);
        assert!((x[1] - 4.0).abs() < 1e-9, "y = {}", x[1]);
    }

    #[test]
    fn degenerate_optimum_still_satisfies_constraint() {
        // min x + y  s.t.  x + y = 2: every feasible point is optimal.
        let x = solve(&[1.0, 1.0], &[1.0, 1.0], &[2.0], 2, &[0.0, 0.0]).expect("solve");
        assert!((x[0] + x[1] - 2.0).abs() < 1e-9);
        assert!(x[0] >= -1e-12 && x[1] >= -1e-12);
    }

    #[test]
    fn two_constraints_unique_vertex() {
        // min x + y  s.t.  x + 2y = 8, 3x + y = 9 → x = 2, y = 3.
        let a = [1.0, 2.0, 3.0, 1.0];
        let x = solve(&[1.0, 1.0], &a, &[8.0, 9.0], 2, &[0.0, 0.0]).expect("solve");
        assert!((x[0] - 2.0).abs() < 1e-9, "x = {}", x[0]);
        assert!((x[1] - 3.0).abs() < 1e-9, "y = {}", x[1]);
    }

    #[test]
    fn lower_bound_shifts_the_feasible_region() {
        // min x  s.t.  x + y = 10, x ≥ 3, y ≥ 0 → x = 3, y = 7.
        let x = solve(&[1.0, 0.0], &[1.0, 1.0], &[10.0], 2, &[3.0, 0.0]).expect("solve");
        assert!((x[0] - 3.0).abs() < 1e-9, "x = {}", x[0]);
        assert!((x[1] - 7.0).abs() < 1e-9, "y = {}", x[1]);
    }

    #[test]
    fn negative_rhs_row_is_flipped_not_rejected() {
        // x + y = -? — encode  −x − y = −6 (equivalent to x + y = 6).
        let x = solve(&[1.0, 1.0], &[-1.0, -1.0], &[-6.0], 2, &[0.0, 0.0]).expect("solve");
        assert!((x[0] + x[1] - 6.0).abs() < 1e-9);
    }

    #[test]
    fn infeasible_system_is_detected() {
        // x = −1 with x ≥ 0.
        let err = solve(&[1.0], &[1.0], &[-1.0], 1, &[0.0]).expect_err("infeasible");
        assert_eq!(err, SimplexError::Infeasible);
    }

    #[test]
    fn contradictory_rows_are_infeasible() {
        // x = 1 and x = 2.
        let err =
            solve(&[1.0], &[1.0, 1.0], &[1.0, 2.0], 1, &[0.0]).expect_err("infeasible");
        assert_eq!(err, SimplexError::Infeasible);
    }

    #[test]
    fn unbounded_objective_is_detected() {
        // min −x  s.t.  x − y = 1: x grows without bound along y.
        let err = solve(&[-1.0, 0.0], &[1.0, -1.0], &[1.0], 2, &[0.0, 0.0])
            .expect_err("unbounded");
        assert_eq!(err, SimplexError::Unbounded);
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let c = [1.0, 1.0, 1.0];
        let a = [0.3, 0.1, 0.0, 0.0, 0.2, 0.4];
        let b = [1.0, 2.0];
        let lb = [0.0, 0.0, 0.0];
        let x1 = solve(&c, &a, &b, 3, &lb).expect("solve");
        let x2 = solve(&c, &a, &b, 3, &lb).expect("solve");
        assert_eq!(x1, x2);
    }
}
