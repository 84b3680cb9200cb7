// SPDX-License-Identifier: AGPL-3.0-only

//! Inverse problem: target UMF → material recipe.
//!
//! A mixture's UMF is its raw mole vector divided by its own flux sum, a
//! ratio that is nonlinear in the weights alone. The solver linearizes by
//! introducing a free scale variable `s` and requiring, for every
//! target-constrained oxide j:
//!
//! ```text
//! Σ_i A[j][i]·w[i] − target[j]·s = 0,   w ≥ 0,  s ≥ ε
//! ```
//!
//! where `A[j][i] = (wt%[i][j]/100) / molar_mass[j]` is the moles of oxide
//! j per unit weight of material i, and ε excludes the trivial zero
//! solution. The objective `min Σ w[i]` is a proxy for a physically
//! reasonable small batch; it does not guarantee a minimal ingredient
//! count, and any preference among ties is an artifact of pivot order.
//!
//! Retrying a failed solve with a broadened candidate set is a caller
//! policy (see `design`), not done here.

use crate::chemistry::{OxideMap, Recipe};
use crate::error::{GlazeError, NoSolutionReason};
use crate::materials::MaterialsDatabase;
use crate::oxide;
use crate::simplex::{self, SimplexError};
use crate::tolerances::{SCALE_LOWER_BOUND, TRACE_WEIGHT, ZERO_TOTAL};

/// Default total batch weight for solved recipes.
pub const DEFAULT_BATCH: f64 = 100.0;

impl From<SimplexError> for NoSolutionReason {
    fn from(err: SimplexError) -> Self {
        match err {
            SimplexError::Infeasible => Self::Infeasible,
            SimplexError::Unbounded => Self::Unbounded,
            SimplexError::IterationLimit => Self::IterationLimit,
        }
    }
}

/// Solve for a recipe whose self-normalized UMF matches `target_umf`.
///
/// Only oxides with a nonzero target value constrain the problem; a
/// target with none returns an empty recipe. Solved weights below the
/// materiality threshold are dropped, the rest rescaled to `total_batch`
/// and rounded to two decimals.
///
/// Target oxides are taken in sorted (BTreeMap) order and candidates in
/// slice order, so identical inputs yield bit-identical recipes.
///
/// # Errors
///
/// - `GlazeError::UnknownMaterials` if any candidate is absent from the
///   database (checked before any computation).
/// - `GlazeError::NoSolution` if the system is infeasible, unbounded,
///   over the pivot cap, or solves to a zero total weight. No partial
///   recipe is ever returned.
pub fn umf_to_recipe(
    target_umf: &OxideMap,
    candidates: &[&str],
    db: &MaterialsDatabase,
    total_batch: f64,
) -> Result<Recipe, GlazeError> {
    let missing: Vec<String> = candidates
        .iter()
        .filter(|name| !db.contains(name))
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(GlazeError::UnknownMaterials(missing));
    }

    let target_oxides: Vec<(&str, f64)> = target_umf
        .iter()
        .filter(|(_, v)| **v != 0.0)
        .map(|(ox, v)| (ox.as_str(), *v))
        .collect();
    if target_oxides.is_empty() {
        return Ok(Recipe::new());
    }

    let n_mats = candidates.len();
    let n_ox = target_oxides.len();
    // Variables: w_0..w_{n_mats-1}, then the scale s.
    let n_vars = n_mats + 1;

    let mut a = vec![0.0; n_ox * n_vars];
    for (j, &(ox, target)) in target_oxides.iter().enumerate() {
        let mw = oxide::molar_mass(ox).unwrap_or(1.0);
        for (i, name) in candidates.iter().enumerate() {
            if let Some(mat) = db.get(name) {
                let wt_pct = mat.oxides.get(ox).copied().unwrap_or(0.0);
                a[j * n_vars + i] = (wt_pct / 100.0) / mw;
            }
        }
        a[j * n_vars + n_mats] = -target;
    }
    let b = vec![0.0; n_ox];

    let mut c = vec![0.0; n_vars];
    for ci in c.iter_mut().take(n_mats) {
        *ci = 1.0;
    }
    let mut lower_bounds = vec![0.0; n_vars];
    lower_bounds[n_mats] = SCALE_LOWER_BOUND;

    let x = simplex::solve(&c, &a, &b, n_vars, &lower_bounds)
        .map_err(|e| GlazeError::NoSolution(e.into()))?;

    let total: f64 = x[..n_mats].iter().sum();
    if total < ZERO_TOTAL {
        return Err(GlazeError::NoSolution(NoSolutionReason::ZeroTotal));
    }

    let factor = total_batch / total;
    let mut recipe = Recipe::new();
    for (i, name) in candidates.iter().enumerate() {
        let weight = x[i] * factor;
        if weight > TRACE_WEIGHT {
            recipe.insert((*name).to_string(), (weight * 100.0).round() / 100.0);
        }
    }
    Ok(recipe)
}
