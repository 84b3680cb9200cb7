// SPDX-License-Identifier: AGPL-3.0-only

//! seger — Cone 6 oxidation glaze chemistry engine
//!
//! Computes and inverts chemical compositions for ceramic glaze formulation:
//! forward analysis of weighed recipes into Seger unity formulas, and the
//! inverse solve from a target formula back to weighable materials.
//!
//! ## Active modules
//!   - `oxide` — immutable oxide registry: molar mass, Appen expansion
//!     coefficient, category (flux / amphoteric / glass former / colorant)
//!   - `materials` — read-only materials database: name → oxide wt% analysis
//!   - `chemistry` — recipe → Unity Molecular Formula (UMF), recipe scaling
//!   - `limits` — cone 6 oxidation limit-range validation
//!   - `thermal` — mole-fraction-weighted thermal expansion estimate
//!   - `safety` — food-safety heuristics (leachable flux and colorant rules)
//!   - `solver` — inverse problem: target UMF → material recipe
//!   - `simplex` — two-phase primal simplex with lower-bounded variables
//!   - `design` — surface/flux presets and design-session orchestration
//!   - `tolerances` — every numeric threshold, centralized with rationale
//!
//! ## Data flow
//!
//! ```text
//! Recipe ── chemistry ─▶ UMF ─▶ limits / thermal / safety
//! UMF target ── solver ─▶ simplex ─▶ raw weights ─▶ Recipe
//! ```
//!
//! All lookup tables are `const` and process-wide; every computation builds
//! private working state per call and mutates no shared input, so calls may
//! run concurrently without locking.

pub mod chemistry;
pub mod design;
pub mod error;
pub mod limits;
pub mod materials;
pub mod oxide;
pub mod safety;
pub mod simplex;
pub mod solver;
pub mod thermal;
pub mod tolerances;

pub use chemistry::{recipe_to_umf, scale_recipe, OxideMap, Recipe, Umf};
pub use error::{GlazeError, NoSolutionReason};
pub use limits::{check_limits, LimitCheck, LimitStatus};
pub use materials::{load_materials_db, Material, MaterialsDatabase};
pub use safety::food_safety_check;
pub use solver::{umf_to_recipe, DEFAULT_BATCH};
pub use thermal::thermal_expansion;
