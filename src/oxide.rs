// SPDX-License-Identifier: AGPL-3.0-only

//! Oxide registry: molar masses, Appen expansion factors, UMF categories.
//!
//! Static and immutable for the process lifetime. Oxides absent from this
//! registry (SnO2, ZrO2, and other opacifier chemistry) are deliberately
//! untracked: the mole-based UMF system excludes them by allow-list, not
//! by error.
//!
//! Molar masses are standard atomic-weight sums (g/mol). Expansion factors
//! are Appen-style mole coefficients in units of ×10⁻⁷ /°C; the B2O3 value
//! applies to low-boron glazes and is anomalous at high levels.

/// UMF role of an oxide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OxideCategory {
    /// RO/R2O melter (Na2O, K2O, CaO, MgO, ZnO, SrO, BaO, Li2O).
    /// UMF normalization divides by the mole sum over this category.
    Flux,
    /// Viscosity moderator between flux and glass former (Al2O3, B2O3).
    Amphoteric,
    /// Silicate network builder (SiO2).
    GlassFormer,
    /// Colorant / opacifier chemistry (Fe2O3, TiO2, MnO, P2O5, CoO, CuO,
    /// Cr2O3, NiO).
    Colorant,
}

/// One registry entry.
#[derive(Debug, Clone, Copy)]
pub struct OxideData {
    pub symbol: &'static str,
    /// Molar mass (g/mol).
    pub molar_mass: f64,
    /// Appen expansion coefficient (×10⁻⁷ /°C).
    pub expansion: f64,
    pub category: OxideCategory,
}

const fn ox(
    symbol: &'static str,
    molar_mass: f64,
    expansion: f64,
    category: OxideCategory,
) -> OxideData {
    OxideData {
        symbol,
        molar_mass,
        expansion,
        category,
    }
}

use OxideCategory::{Amphoteric, Colorant, Flux, GlassFormer};

/// The tracked oxides.
pub const OXIDES: &[OxideData] = &[
    ox("SiO2", 60.08, 38.0, GlassFormer),
    ox("Al2O3", 101.96, 16.7, Amphoteric),
    ox("B2O3", 69.62, 5.0, Amphoteric),
    ox("Na2O", 61.98, 395.0, Flux),
    ox("K2O", 94.20, 283.0, Flux),
    ox("CaO", 56.08, 163.0, Flux),
    ox("MgO", 40.30, 45.0, Flux),
    ox("ZnO", 81.38, 50.0, Flux),
    ox("SrO", 103.62, 160.0, Flux),
    ox("BaO", 153.33, 140.0, Flux),
    ox("Li2O", 29.88, 270.0, Flux),
    ox("Fe2O3", 159.69, 55.0, Colorant),
    ox("TiO2", 79.87, -15.0, Colorant),
    ox("MnO", 70.94, 55.0, Colorant),
    ox("P2O5", 141.94, -40.0, Colorant),
    ox("CoO", 74.93, 50.0, Colorant),
    ox("CuO", 79.55, 30.0, Colorant),
    ox("Cr2O3", 151.99, 50.0, Colorant),
    ox("NiO", 74.69, 50.0, Colorant),
];

/// Registry entry for a symbol, `None` if untracked.
#[must_use]
pub fn lookup(symbol: &str) -> Option<&'static OxideData> {
    OXIDES.iter().find(|o| o.symbol == symbol)
}

/// Molar mass (g/mol), `None` if untracked.
#[must_use]
pub fn molar_mass(symbol: &str) -> Option<f64> {
    lookup(symbol).map(|o| o.molar_mass)
}

/// Appen expansion coefficient; untracked oxides contribute 0.0.
#[must_use]
pub fn expansion_coefficient(symbol: &str) -> f64 {
    lookup(symbol).map_or(0.0, |o| o.expansion)
}

/// Whether a symbol is an RO/R2O flux.
#[must_use]
pub fn is_flux(symbol: &str) -> bool {
    lookup(symbol).is_some_and(|o| o.category == OxideCategory::Flux)
}
