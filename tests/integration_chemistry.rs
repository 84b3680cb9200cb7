// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: forward chemistry pipeline end-to-end.
//!
//! Recipe → UMF → limit check / thermal expansion / food safety, verifying
//! the public API composes correctly across module boundaries.

use seger::{
    check_limits, food_safety_check, recipe_to_umf, scale_recipe, thermal_expansion,
    tolerances, LimitStatus, MaterialsDatabase, Recipe, Umf,
};

fn recipe(entries: &[(&str, f64)]) -> Recipe {
    entries
        .iter()
        .map(|(n, a)| ((*n).to_string(), *a))
        .collect()
}

#[test]
fn flux_normalization_invariant_holds_for_real_recipes() {
    let db = MaterialsDatabase::builtin();
    let recipes = [
        recipe(&[
            ("Custer Feldspar", 40.0),
            ("Whiting", 18.0),
            ("Silica", 28.0),
            ("EPK Kaolin", 14.0),
        ]),
        recipe(&[
            ("Nepheline Syenite", 55.0),
            ("Wollastonite", 12.0),
            ("Silica", 20.0),
            ("Ball Clay", 13.0),
        ]),
        recipe(&[("Whiting", 100.0)]),
    ];
    for r in &recipes {
        let umf = recipe_to_umf(r, &db).expect("umf");
        assert!(umf.is_flux_normalized());
        assert!(
            (umf.flux_sum() - 1.0).abs() < tolerances::FLUX_UNITY,
            "flux sum {} for {r:?}",
            umf.flux_sum()
        );
    }
}

#[test]
fn forward_pipeline_produces_consistent_analysis() {
    let db = MaterialsDatabase::builtin();
    let r = recipe(&[
        ("Custer Feldspar", 38.0),
        ("Whiting", 17.0),
        ("Silica", 30.0),
        ("EPK Kaolin", 15.0),
    ]);
    let umf = recipe_to_umf(&r, &db).expect("umf");

    let limits = check_limits(&umf);
    assert_eq!(limits.len(), 11, "one row per tabulated oxide");

    let cte = thermal_expansion(&umf);
    assert!(cte > 0.0 && cte < 200.0, "plausible glaze CTE, got {cte}");

    let warnings = food_safety_check(&r, &umf);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("No obvious"), "clean base glaze");
}

#[test]
fn scaling_is_idempotent_up_to_rounding() {
    let r = recipe(&[
        ("Custer Feldspar", 38.0),
        ("Whiting", 17.0),
        ("Silica", 30.0),
        ("EPK Kaolin", 15.0),
    ]);
    let rescaled = scale_recipe(&scale_recipe(&r, 500.0), 1000.0);
    let total: f64 = rescaled.values().sum();
    assert!((total - 1000.0).abs() < 0.1, "total {total}");
}

#[test]
fn boundary_value_classifies_ok_not_high() {
    let values = [("SiO2".to_string(), 5.00), ("CaO".to_string(), 1.0)]
        .into_iter()
        .collect();
    let umf = Umf::new(values, true);
    let limits = check_limits(&umf);
    let sio2 = limits.iter().find(|r| r.oxide == "SiO2").expect("SiO2");
    assert_eq!(sio2.status, LimitStatus::Ok);
}

#[test]
fn food_safety_is_monotonic_in_barium() {
    let r = recipe(&[("Whiting", 60.0), ("Silica", 40.0)]);
    let base: Vec<(String, f64)> = vec![
        ("CaO".to_string(), 0.9),
        ("SiO2".to_string(), 3.0),
    ];

    let mut low = base.clone();
    low.push(("BaO".to_string(), 0.04));
    let warnings = food_safety_check(&r, &Umf::new(low.into_iter().collect(), true));
    assert!(warnings[0].contains("No obvious"), "BaO 0.04 is clean");

    let mut high = base;
    high.push(("BaO".to_string(), 0.06));
    let warnings = food_safety_check(&r, &Umf::new(high.into_iter().collect(), true));
    assert!(
        warnings.iter().any(|w| w.contains("BaO")),
        "BaO 0.06 must warn: {warnings:?}"
    );
}

#[test]
fn zero_flux_recipe_is_tagged_and_raw() {
    let db = MaterialsDatabase::builtin();
    let umf = recipe_to_umf(&recipe(&[("Silica", 70.0), ("EPK Kaolin", 30.0)]), &db)
        .expect("umf");
    assert!(!umf.is_flux_normalized());
    assert_eq!(umf.flux_sum(), 0.0);
    assert!(umf.get("SiO2") > 0.0, "raw moles still present");
    // Raw-mole mode feeds the same downstream functions without panicking.
    let _ = check_limits(&umf);
    let _ = thermal_expansion(&umf);
}
