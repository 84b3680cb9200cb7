// SPDX-License-Identifier: AGPL-3.0-only

//! Thermal expansion estimate from a UMF.
//!
//! Mole-fraction-weighted sum of Appen-style per-oxide coefficients, in
//! units of ×10⁻⁷ /°C. An estimate for glaze-fit screening (crazing vs
//! shivering against a clay body), not a measured property.

use crate::chemistry::Umf;
use crate::oxide;

/// Coefficient of thermal expansion (×10⁻⁷ /°C), rounded to one decimal.
///
/// The weighting runs over all oxide moles present, not only fluxes.
/// A formula with no positive mole total returns 0.0.
#[must_use]
pub fn thermal_expansion(umf: &Umf) -> f64 {
    let total = umf.total_moles();
    if total <= 0.0 {
        return 0.0;
    }
    let cte: f64 = umf
        .iter()
        .map(|(ox, moles)| oxide::expansion_coefficient(ox) * (moles / total))
        .sum();
    (cte * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::OxideMap;

    fn umf(entries: &[(&str, f64)]) -> Umf {
        let values: OxideMap = entries
            .iter()
            .map(|(ox, v)| ((*ox).to_string(), *v))
            .collect();
        Umf::new(values, true)
    }

    #[test]
    fn pure_silica_gives_silica_coefficient() {
        assert_eq!(thermal_expansion(&umf(&[("SiO2", 1.0)])), 38.0);
    }

    #[test]
    fn equal_moles_average_coefficients() {
        // Na2O 395.0 and SiO2 38.0 in equal moles → 216.5.
        let cte = thermal_expansion(&umf(&[("Na2O", 0.5), ("SiO2", 0.5)]));
        assert_eq!(cte, 216.5);
    }

    #[test]
    fn empty_formula_is_zero() {
        assert_eq!(thermal_expansion(&umf(&[])), 0.0);
    }

    #[test]
    fn high_soda_expands_more_than_high_silica() {
        let soda = thermal_expansion(&umf(&[("Na2O", 1.0), ("SiO2", 2.0)]));
        let silica = thermal_expansion(&umf(&[("Na2O", 1.0), ("SiO2", 4.0)]));
        assert!(
            soda > silica,
            "soda-rich {soda} should exceed silica-rich {silica}"
        );
    }

    #[test]
    fn negative_coefficients_lower_the_estimate() {
        let base = thermal_expansion(&umf(&[("CaO", 1.0), ("SiO2", 3.0)]));
        let with_titania = thermal_expansion(&umf(&[
            ("CaO", 1.0),
            ("SiO2", 3.0),
            ("TiO2", 0.5),
        ]));
        assert!(with_titania < base);
    }
}
