// SPDX-License-Identifier: AGPL-3.0-only

//! Food-safety heuristics for a recipe and its UMF.
//!
//! A fixed, ordered list of independent rules, each producing zero or one
//! warning. The declared order is part of the contract so warning lists
//! are deterministic and test-reproducible. These are screening
//! heuristics: a passing result still needs a lab leach test.

use crate::chemistry::{Recipe, Umf};

/// UMF mole thresholds for leachable flux and colorant oxides, in rule
/// order. Checked before the recipe-name rules.
const UMF_THRESHOLDS: &[(&str, f64)] = &[
    ("BaO", 0.05),
    ("Li2O", 0.05),
    ("ZnO", 0.25),
    ("CuO", 0.02),
    ("CoO", 0.03),
    ("Cr2O3", 0.01),
    ("MnO", 0.05),
    ("NiO", 0.005),
];

fn umf_warning(oxide: &str, value: f64) -> String {
    match oxide {
        "BaO" => format!("High BaO ({value:.3} mol): barium is toxic if leachable"),
        "Li2O" => format!("High Li2O ({value:.3} mol): lithium concerns at high levels"),
        "ZnO" => format!("High ZnO ({value:.3} mol): may leach in acidic foods"),
        "CuO" => format!("Copper oxide ({value:.3} mol): test for leaching"),
        "CoO" => format!("High cobalt ({value:.3} mol): may be problematic"),
        "Cr2O3" => "Chrome oxide present: avoid on food surfaces".to_string(),
        "MnO" => format!("High manganese ({value:.3} mol)"),
        _ => "Nickel oxide present: toxic, not food-safe".to_string(),
    }
}

/// Evaluate the fixed rule list. Returns one warning per fired rule, in
/// rule order; a single reassurance message if none fire.
///
/// Rules 1-8 check UMF thresholds (see `UMF_THRESHOLDS`). Rule 9 flags any
/// recipe entry whose name contains "barium" (case-insensitive) above 5%
/// of the batch. Rule 10 flags any entry whose name contains "lead",
/// regardless of amount.
#[must_use]
pub fn food_safety_check(recipe: &Recipe, umf: &Umf) -> Vec<String> {
    let mut warnings = Vec::new();

    for &(oxide, threshold) in UMF_THRESHOLDS {
        let value = umf.get(oxide);
        if value > threshold {
            warnings.push(umf_warning(oxide, value));
        }
    }

    let total: f64 = recipe.values().sum();
    for (name, amount) in recipe {
        let pct = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
        let lower = name.to_lowercase();
        if lower.contains("barium") && pct > 5.0 {
            warnings.push(format!(
                "{name} at {pct:.1}% of batch: barium compound, test thoroughly"
            ));
        }
        if lower.contains("lead") {
            warnings.push(format!("{name}: LEAD IS NOT FOOD-SAFE"));
        }
    }

    if warnings.is_empty() {
        warnings.push(
            "No obvious food-safety concerns (confirm with a lab leach test)".to_string(),
        );
    }

    warnings
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

    fn recipe(entries: &[(&str, f64)]) -> Recipe {
        entries
            .iter()
            .map(|(n, a)| ((*n).to_string(), *a))
            .collect()
    }

    #[test]
    fn clean_inputs_get_reassurance() {
        let warnings = food_safety_check(
            &recipe(&[("Whiting", 20.0), ("Silica", 30.0)]),
            &umf(&[("CaO", 1.0), ("SiO2", 3.5)]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("No obvious"));
    }

    #[test]
    fn barium_threshold_fires_above_not_below() {
        let r = recipe(&[("Whiting", 100.0)]);
        let below = food_safety_check(&r, &umf(&[("BaO", 0.04)]));
        assert!(below[0].contains("No obvious"));
        let above = food_safety_check(&r, &umf(&[("BaO", 0.06)]));
        assert!(above[0].contains("BaO"), "got: {}", above[0]);
    }

    #[test]
    fn nickel_threshold_is_strict() {
        let r = recipe(&[("Whiting", 100.0)]);
        let warnings = food_safety_check(&r, &umf(&[("NiO", 0.006)]));
        assert!(warnings[0].contains("Nickel"));
    }

    #[test]
    fn warning_order_follows_rule_order() {
        let r = recipe(&[("Whiting", 100.0)]);
        let warnings = food_safety_check(
            &r,
            &umf(&[("NiO", 0.01), ("BaO", 0.10), ("CuO", 0.05)]),
        );
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("BaO"));
        assert!(warnings[1].contains("Copper"));
        assert!(warnings[2].contains("Nickel"));
    }

    #[test]
    fn barium_material_over_five_percent() {
        let r = recipe(&[("Barium Carbonate", 10.0), ("Silica", 90.0)]);
        let warnings = food_safety_check(&r, &umf(&[]));
        assert!(warnings.iter().any(|w| w.contains("Barium Carbonate")));

        let r = recipe(&[("Barium Carbonate", 3.0), ("Silica", 97.0)]);
        let warnings = food_safety_check(&r, &umf(&[]));
        assert!(!warnings.iter().any(|w| w.contains("Barium Carbonate")));
    }

    #[test]
    fn lead_fires_at_any_amount() {
        let r = recipe(&[("Lead Bisilicate", 0.1), ("Silica", 99.9)]);
        let warnings = food_safety_check(&r, &umf(&[]));
        assert!(warnings.iter().any(|w| w.contains("NOT FOOD-SAFE")));
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        let r = recipe(&[("BARIUM carbonate", 50.0), ("Silica", 50.0)]);
        let warnings = food_safety_check(&r, &umf(&[]));
        assert!(warnings.iter().any(|w| w.contains("barium compound")));
    }
}
