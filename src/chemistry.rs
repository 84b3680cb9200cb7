// SPDX-License-Identifier: AGPL-3.0-only

//! Forward transform: weighted recipe → Unity Molecular Formula.
//!
//! A UMF expresses oxide composition as mole quantities normalized so the
//! RO/R2O flux moles sum to 1.0. When a recipe contributes no flux moles
//! at all there is nothing to normalize by; the transform then returns raw
//! moles, tagged `flux_normalized = false` rather than silently changing
//! interpretation.
//!
//! Pure functions throughout; inputs are never mutated.

use crate::error::GlazeError;
use crate::materials::MaterialsDatabase;
use crate::oxide;
use std::collections::BTreeMap;

/// Material name → weight amount. Any positive unit; need not sum to a
/// fixed total. BTreeMap keeps every traversal deterministic.
pub type Recipe = BTreeMap<String, f64>;

/// Oxide symbol → mole value.
pub type OxideMap = BTreeMap<String, f64>;

/// Unity Molecular Formula: oxide moles plus an explicit normalization tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Umf {
    values: OxideMap,
    flux_normalized: bool,
}

impl Umf {
    /// Wrap precomputed values. Intended for synthetic formulas in tests
    /// and for design targets; `recipe_to_umf` is the normal constructor.
    #[must_use]
    pub fn new(values: OxideMap, flux_normalized: bool) -> Self {
        Self {
            values,
            flux_normalized,
        }
    }

    /// Mole value for an oxide, 0.0 if absent.
    #[must_use]
    pub fn get(&self, oxide: &str) -> f64 {
        self.values.get(oxide).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn values(&self) -> &OxideMap {
        &self.values
    }

    /// Whether flux moles were normalized to unity. `false` means the
    /// recipe contributed zero flux moles and `values` are raw moles.
    #[must_use]
    pub fn is_flux_normalized(&self) -> bool {
        self.flux_normalized
    }

    /// Sum over flux-category oxides. ≈ 1.0 when normalized.
    #[must_use]
    pub fn flux_sum(&self) -> f64 {
        self.values
            .iter()
            .filter(|(ox, _)| oxide::is_flux(ox))
            .map(|(_, m)| *m)
            .sum()
    }

    /// Sum over all oxide moles (not only fluxes).
    #[must_use]
    pub fn total_moles(&self) -> f64 {
        self.values.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(ox, m)| (ox.as_str(), *m))
    }
}

/// Convert a weighted recipe to a UMF.
///
/// Accumulates `amount × wt% / 100` per oxide across all materials,
/// converts mass to moles (dropping untracked oxides by allow-list), and
/// normalizes by the flux-mole sum.
///
/// # Errors
///
/// `GlazeError::UnknownMaterials` naming every material absent from the
/// database. No partial computation is performed.
pub fn recipe_to_umf(recipe: &Recipe, db: &MaterialsDatabase) -> Result<Umf, GlazeError> {
    let missing: Vec<String> = recipe
        .keys()
        .filter(|name| !db.contains(name))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(GlazeError::UnknownMaterials(missing));
    }

    // Oxide mass contributed by all materials.
    let mut oxide_weights: OxideMap = BTreeMap::new();
    for (name, amount) in recipe {
        if let Some(mat) = db.get(name) {
            for (ox, wt_pct) in &mat.oxides {
                *oxide_weights.entry(ox.clone()).or_insert(0.0) += amount * wt_pct / 100.0;
            }
        }
    }

    // Mass → moles; untracked oxides (no molar mass) drop out here.
    let mut moles: OxideMap = BTreeMap::new();
    for (ox, weight) in &oxide_weights {
        if let Some(mw) = oxide::molar_mass(ox) {
            moles.insert(ox.clone(), weight / mw);
        }
    }

    let flux_total: f64 = moles
        .iter()
        .filter(|(ox, _)| oxide::is_flux(ox))
        .map(|(_, m)| *m)
        .sum();
    if flux_total <= 0.0 {
        // Nothing to normalize by; raw moles, tagged.
        return Ok(Umf::new(moles, false));
    }

    let values = moles
        .into_iter()
        .map(|(ox, m)| (ox, m / flux_total))
        .collect();
    Ok(Umf::new(values, true))
}

/// Rescale a recipe so its entries sum to `target_weight`, each rounded to
/// one decimal. A recipe with non-positive total is returned unchanged.
#[must_use]
pub fn scale_recipe(recipe: &Recipe, target_weight: f64) -> Recipe {
    let total: f64 = recipe.values().sum();
    if total <= 0.0 {
        return recipe.clone();
    }
    let factor = target_weight / total;
    recipe
        .iter()
        .map(|(name, amount)| (name.clone(), (amount * factor * 10.0).round() / 10.0))
        .collect()
}
