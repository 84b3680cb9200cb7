// SPDX-License-Identifier: AGPL-3.0-only

//! Design-session orchestration: structured targets → solved glaze.
//!
//! Surface-type and flux-system presets give target UMF ranges; the
//! design target is the range midpoints with fluxes renormalized to
//! unity. Each flux system carries a candidate material set; when the
//! solver reports no solution, the retry policy broadens the candidates
//! once (the base set plus the common auxiliary fluxes) before giving up.
//!
//! Natural-language description parsing and colorant addition libraries
//! live outside this crate; the inputs here are already structural.

use crate::chemistry::{recipe_to_umf, OxideMap, Recipe, Umf};
use crate::error::GlazeError;
use crate::limits::{check_limits, LimitCheck};
use crate::materials::MaterialsDatabase;
use crate::oxide;
use crate::safety::food_safety_check;
use crate::solver::{umf_to_recipe, DEFAULT_BATCH};
use crate::thermal::thermal_expansion;

/// Fired surface quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Glossy,
    Satin,
    Matte,
    Crystalline,
}

/// Flux blend character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluxSystem {
    Default,
    ButteryMatte,
    SilkyMatte,
    ZincMatte,
    BoronGloss,
}

/// Surface-driven UMF ranges (oxide, min, max).
#[must_use]
pub fn surface_targets(surface: Surface) -> &'static [(&'static str, f64, f64)] {
    match surface {
        Surface::Glossy => &[("Al2O3", 0.30, 0.45), ("SiO2", 3.0, 4.5)],
        Surface::Satin => &[("Al2O3", 0.35, 0.50), ("SiO2", 2.8, 3.8)],
        Surface::Matte => &[("Al2O3", 0.25, 0.40), ("SiO2", 2.0, 3.2)],
        Surface::Crystalline => &[
            ("Al2O3", 0.02, 0.10),
            ("SiO2", 2.5, 4.0),
            ("ZnO", 0.30, 0.60),
        ],
    }
}

/// Flux-system UMF ranges (oxide, min, max), pre-normalization.
#[must_use]
pub fn flux_preset(system: FluxSystem) -> &'static [(&'static str, f64, f64)] {
    match system {
        FluxSystem::Default => &[
            ("CaO", 0.30, 0.55),
            ("MgO", 0.00, 0.10),
            ("ZnO", 0.00, 0.10),
            ("Na2O", 0.05, 0.20),
            ("K2O", 0.03, 0.15),
        ],
        FluxSystem::ButteryMatte => &[
            ("CaO", 0.10, 0.30),
            ("MgO", 0.20, 0.35),
            ("ZnO", 0.00, 0.05),
            ("Na2O", 0.05, 0.15),
            ("K2O", 0.03, 0.12),
        ],
        FluxSystem::SilkyMatte => &[
            ("CaO", 0.45, 0.65),
            ("MgO", 0.00, 0.10),
            ("ZnO", 0.00, 0.05),
            ("Na2O", 0.05, 0.15),
            ("K2O", 0.03, 0.12),
        ],
        FluxSystem::ZincMatte => &[
            ("CaO", 0.10, 0.30),
            ("MgO", 0.00, 0.10),
            ("ZnO", 0.25, 0.50),
            ("Na2O", 0.05, 0.15),
            ("K2O", 0.03, 0.12),
        ],
        FluxSystem::BoronGloss => &[
            ("CaO", 0.15, 0.40),
            ("MgO", 0.00, 0.10),
            ("ZnO", 0.00, 0.10),
            ("Na2O", 0.05, 0.20),
            ("K2O", 0.03, 0.15),
            ("B2O3", 0.15, 0.50),
        ],
    }
}

/// Published CTE estimates for common clay bodies (×10⁻⁷ /°C).
pub const CLAY_BODIES: &[(&str, f64)] = &[
    ("porcelain", 55.0),
    ("stoneware", 60.0),
    ("nz_6", 55.0),
    ("glacier", 55.0),
    ("oregon_brown", 62.0),
];

/// CTE for a known clay body name.
#[must_use]
pub fn clay_body_cte(name: &str) -> Option<f64> {
    CLAY_BODIES
        .iter()
        .find(|(body, _)| *body == name)
        .map(|(_, cte)| *cte)
}

const BASE_MATERIALS: &[&str] = &[
    "Custer Feldspar",
    "Nepheline Syenite",
    "EPK Kaolin",
    "Silica",
    "Whiting",
    "Bentonite",
];

const BROADENING_MATERIALS: &[&str] = &[
    "Ferro Frit 3134",
    "Ferro Frit 3110",
    "Dolomite",
    "Talc",
    "Wollastonite",
    "Zinc Oxide",
];

/// Candidate materials for a surface / flux-system pair.
#[must_use]
pub fn material_set(surface: Surface, system: FluxSystem) -> Vec<&'static str> {
    if surface == Surface::Crystalline {
        return vec!["Ferro Frit 3110", "Silica", "Zinc Oxide", "EPK Kaolin"];
    }
    let mut set = BASE_MATERIALS.to_vec();
    match system {
        FluxSystem::Default => {}
        FluxSystem::ButteryMatte => set.extend(["Dolomite", "Talc"]),
        FluxSystem::SilkyMatte => set.push("Wollastonite"),
        FluxSystem::ZincMatte => set.push("Zinc Oxide"),
        FluxSystem::BoronGloss => set.push("Ferro Frit 3134"),
    }
    set
}

/// Retry candidates: the base set, the current set, and the auxiliary
/// fluxes, deduplicated in that order (kept deterministic, never a hash
/// set).
#[must_use]
pub fn broadened_material_set(current: &[&'static str]) -> Vec<&'static str> {
    let mut broad: Vec<&'static str> = Vec::new();
    for name in BASE_MATERIALS
        .iter()
        .chain(current.iter())
        .chain(BROADENING_MATERIALS.iter())
    {
        if !broad.contains(name) {
            broad.push(name);
        }
    }
    broad
}

/// Target UMF for a surface / flux-system pair: range midpoints, surface
/// entries overriding flux entries, fluxes renormalized to sum to 1.0.
#[must_use]
pub fn target_umf(surface: Surface, system: FluxSystem) -> OxideMap {
    let mut target: OxideMap = OxideMap::new();
    for &(ox, lo, hi) in flux_preset(system) {
        target.insert(ox.to_string(), (lo + hi) / 2.0);
    }
    for &(ox, lo, hi) in surface_targets(surface) {
        target.insert(ox.to_string(), (lo + hi) / 2.0);
    }

    let flux_sum: f64 = target
        .iter()
        .filter(|(ox, _)| oxide::is_flux(ox))
        .map(|(_, v)| *v)
        .sum();
    if flux_sum > 0.0 {
        for (ox, value) in target.iter_mut() {
            if oxide::is_flux(ox) {
                *value /= flux_sum;
            }
        }
    }
    target
}

/// How a glaze's expansion relates to a clay body's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalFit {
    /// Glaze CTE well above the body: tension cracks on cooling.
    CrazingRisk,
    /// Glaze CTE far below the body: compressive failure, sheets flake off.
    ShiveringRisk,
    GoodFit,
}

impl ThermalFit {
    /// Classify glaze-vs-body CTE difference: > +5 crazing, < −10
    /// shivering (glazes tolerate more compression than tension).
    #[must_use]
    pub fn classify(glaze_cte: f64, body_cte: f64) -> Self {
        let diff = glaze_cte - body_cte;
        if diff > 5.0 {
            Self::CrazingRisk
        } else if diff < -10.0 {
            Self::ShiveringRisk
        } else {
            Self::GoodFit
        }
    }
}

/// A fully analyzed glaze design.
#[derive(Debug, Clone)]
pub struct GlazeDesign {
    pub recipe: Recipe,
    pub umf: Umf,
    pub limits: Vec<LimitCheck>,
    /// Estimated CTE (×10⁻⁷ /°C).
    pub cte: f64,
    pub food_safety: Vec<String>,
    /// Present only when a clay body CTE was supplied.
    pub thermal_fit: Option<ThermalFit>,
    /// Whether the broadened candidate set was needed.
    pub used_broadened_set: bool,
}

/// Design a glaze from structural targets: solve for a recipe, then run
/// the full forward analysis on the result.
///
/// # Errors
///
/// `GlazeError::NoSolution` if even the broadened candidate set cannot
/// reproduce the target; database errors pass through.
pub fn design_glaze(
    surface: Surface,
    system: FluxSystem,
    clay_body: Option<f64>,
    db: &MaterialsDatabase,
) -> Result<GlazeDesign, GlazeError> {
    let target = target_umf(surface, system);
    let candidates = material_set(surface, system);

    let (recipe, used_broadened_set) = match umf_to_recipe(&target, &candidates, db, DEFAULT_BATCH)
    {
        Ok(recipe) => (recipe, false),
        Err(GlazeError::NoSolution(_)) => {
            let broad = broadened_material_set(&candidates);
            (umf_to_recipe(&target, &broad, db, DEFAULT_BATCH)?, true)
        }
        Err(other) => return Err(other),
    };

    let umf = recipe_to_umf(&recipe, db)?;
    let limits = check_limits(&umf);
    let cte = thermal_expansion(&umf);
    let food_safety = food_safety_check(&recipe, &umf);
    let thermal_fit = clay_body.map(|body| ThermalFit::classify(cte, body));

    Ok(GlazeDesign {
        recipe,
        umf,
        limits,
        cte,
        food_safety,
        thermal_fit,
        used_broadened_set,
    })
}
