// SPDX-License-Identifier: AGPL-3.0-only

//! Materials database: material name → oxide weight-percent analysis.
//!
//! Loaded once (JSON) or taken from the built-in set of standard published
//! analyses, then treated as immutable for the process lifetime. Analyses
//! are percentages of the material's own mass and need not sum to 100
//! across tracked oxides: LOI (carbonates, clays) and untracked oxides
//! (SnO2, ZrO2) account for the remainder.
//!
//! JSON shape:
//!
//! ```json
//! { "materials": { "Whiting": { "oxides": { "CaO": 56.1 } } } }
//! ```

use crate::error::GlazeError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One material's oxide analysis (oxide symbol → wt%).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub oxides: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct MaterialsFile {
    materials: BTreeMap<String, Material>,
}

/// Read-only mapping from material name to analysis.
#[derive(Debug, Clone, Default)]
pub struct MaterialsDatabase {
    materials: BTreeMap<String, Material>,
}

impl MaterialsDatabase {
    /// Wrap a prebuilt name → material mapping.
    #[must_use]
    pub fn from_materials(materials: BTreeMap<String, Material>) -> Self {
        Self { materials }
    }

    /// Analysis for a material, `None` if absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Material names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    /// Built-in database of standard published analyses.
    ///
    /// Frozen in source so library behavior does not depend on filesystem
    /// state. User-supplied databases go through [`load_materials_db`].
    #[must_use]
    pub fn builtin() -> Self {
        let mut materials = BTreeMap::new();
        for (name, oxides) in BUILTIN_ANALYSES {
            let oxides = oxides
                .iter()
                .map(|(ox, pct)| ((*ox).to_string(), *pct))
                .collect();
            materials.insert((*name).to_string(), Material { oxides });
        }
        Self { materials }
    }
}

/// Load a materials database from JSON.
///
/// Uses streaming `from_reader` to avoid buffering the file as an
/// intermediate string.
///
/// # Errors
///
/// `GlazeError::DataLoad` on IO or parse failure, naming the path.
pub fn load_materials_db(path: &Path) -> Result<MaterialsDatabase, GlazeError> {
    let file = File::open(path)
        .map_err(|e| GlazeError::DataLoad(format!("{}: {e}", path.display())))?;
    let parsed: MaterialsFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| GlazeError::DataLoad(format!("{}: {e}", path.display())))?;
    Ok(MaterialsDatabase {
        materials: parsed.materials,
    })
}

/// Standard published analyses (wt% of the material's own mass).
///
/// Values follow supplier/reference analyses rounded to one decimal;
/// carbonates and clays are short of 100% by their LOI, opacifiers by
/// untracked oxide content.
const BUILTIN_ANALYSES: &[(&str, &[(&str, f64)])] = &[
    (
        "Custer Feldspar",
        &[
            ("SiO2", 68.5),
            ("Al2O3", 17.4),
            ("K2O", 10.0),
            ("Na2O", 3.0),
            ("Fe2O3", 0.1),
        ],
    ),
    (
        "Minspar 200",
        &[
            ("SiO2", 68.2),
            ("Al2O3", 19.2),
            ("Na2O", 6.8),
            ("K2O", 4.1),
            ("CaO", 1.6),
        ],
    ),
    (
        "Nepheline Syenite",
        &[
            ("SiO2", 60.7),
            ("Al2O3", 23.3),
            ("Na2O", 9.8),
            ("K2O", 4.6),
            ("CaO", 0.7),
        ],
    ),
    (
        "EPK Kaolin",
        &[
            ("SiO2", 45.7),
            ("Al2O3", 37.4),
            ("TiO2", 0.4),
            ("Fe2O3", 0.8),
        ],
    ),
    (
        "Grolleg Kaolin",
        &[("SiO2", 48.0), ("Al2O3", 37.0), ("K2O", 1.9)],
    ),
    (
        "Ball Clay",
        &[
            ("SiO2", 60.0),
            ("Al2O3", 26.0),
            ("TiO2", 1.5),
            ("Fe2O3", 1.0),
        ],
    ),
    ("Silica", &[("SiO2", 100.0)]),
    ("Whiting", &[("CaO", 56.1)]),
    ("Wollastonite", &[("CaO", 48.3), ("SiO2", 51.7)]),
    ("Dolomite", &[("CaO", 30.4), ("MgO", 21.7)]),
    ("Talc", &[("MgO", 31.7), ("SiO2", 63.5)]),
    ("Zinc Oxide", &[("ZnO", 100.0)]),
    ("Strontium Carbonate", &[("SrO", 70.2)]),
    ("Barium Carbonate", &[("BaO", 77.7)]),
    ("Lithium Carbonate", &[("Li2O", 40.4)]),
    (
        "Spodumene",
        &[("SiO2", 64.5), ("Al2O3", 27.4), ("Li2O", 8.0)],
    ),
    ("Bone Ash", &[("CaO", 55.8), ("P2O5", 42.4)]),
    (
        "Gerstley Borate",
        &[
            ("B2O3", 26.8),
            ("CaO", 19.4),
            ("SiO2", 14.8),
            ("Na2O", 4.0),
            ("MgO", 3.5),
        ],
    ),
    (
        "Ferro Frit 3134",
        &[
            ("SiO2", 46.5),
            ("B2O3", 23.1),
            ("CaO", 20.1),
            ("Na2O", 10.3),
        ],
    ),
    (
        "Ferro Frit 3124",
        &[
            ("SiO2", 55.3),
            ("B2O3", 13.7),
            ("CaO", 14.1),
            ("Al2O3", 9.9),
            ("Na2O", 6.3),
            ("K2O", 0.7),
        ],
    ),
    (
        "Ferro Frit 3110",
        &[
            ("SiO2", 69.8),
            ("Na2O", 15.3),
            ("CaO", 6.3),
            ("Al2O3", 3.7),
            ("B2O3", 2.6),
            ("K2O", 2.3),
        ],
    ),
    (
        "Bentonite",
        &[
            ("SiO2", 59.0),
            ("Al2O3", 19.0),
            ("Fe2O3", 3.9),
            ("MgO", 2.5),
            ("Na2O", 2.0),
            ("CaO", 0.7),
        ],
    ),
    ("Red Iron Oxide", &[("Fe2O3", 100.0)]),
    ("Rutile", &[("TiO2", 95.0), ("Fe2O3", 5.0)]),
    ("Titanium Dioxide", &[("TiO2", 100.0)]),
    ("Tin Oxide", &[("SnO2", 100.0)]),
    ("Zircopax", &[("ZrO2", 65.0), ("SiO2", 33.0)]),
    ("Cobalt Carbonate", &[("CoO", 63.0)]),
    ("Copper Carbonate", &[("CuO", 71.9)]),
    ("Chrome Oxide", &[("Cr2O3", 100.0)]),
    ("Manganese Dioxide", &[("MnO", 81.6)]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_base_glaze_materials() {
        let db = MaterialsDatabase::builtin();
        for name in [
            "Custer Feldspar",
            "Nepheline Syenite",
            "EPK Kaolin",
            "Silica",
            "Whiting",
        ] {
            assert!(db.contains(name), "missing {name}");
        }
    }

    #[test]
    fn builtin_analyses_are_plausible_percentages() {
        let db = MaterialsDatabase::builtin();
        for name in db.names() {
            let mat = db.get(name).expect("listed name");
            let total: f64 = mat.oxides.values().sum();
            assert!(total > 0.0, "{name}: empty analysis");
            assert!(total <= 100.0 + 1e-9, "{name}: analysis sums to {total}");
            for (ox, pct) in &mat.oxides {
                assert!(*pct > 0.0 && *pct <= 100.0, "{name}/{ox}: {pct}");
            }
        }
    }

    #[test]
    fn get_unknown_material_is_none() {
        let db = MaterialsDatabase::builtin();
        assert!(db.get("Unobtainium").is_none());
    }

    #[test]
    fn load_round_trips_json() {
        let json = r#"{
            "materials": {
                "Test Flux": { "oxides": { "CaO": 56.1 } },
                "Test Clay": { "oxides": { "SiO2": 46.0, "Al2O3": 38.0 } }
            }
        }"#;
        let path = std::env::temp_dir().join("seger_materials_test.json");
        std::fs::write(&path, json).expect("write temp json");
        let db = load_materials_db(&path).expect("load");
        std::fs::remove_file(&path).ok();

        assert_eq!(db.len(), 2);
        let clay = db.get("Test Clay").expect("Test Clay");
        assert_eq!(clay.oxides.get("Al2O3"), Some(&38.0));
    }

    #[test]
    fn load_missing_file_is_data_load_error() {
        let err = load_materials_db(Path::new("/nonexistent/materials.json"))
            .expect_err("should fail");
        assert!(matches!(err, GlazeError::DataLoad(_)));
    }
}
