//! Material catalog: reference data for the cell type tags the game knows.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;

const BUILTIN_TABLE: &str = include_str!("../res/materials.csv");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum Phase {
    Gas {
        molar_mass: f64,
        cold_temp: f64,
        cold_product: String,
    },
    Solid {
        hot_temp: f64,
        hot_product: String,
    },
    Liquid {
        hot_temp: f64,
        hot_product: String,
        cold_temp: f64,
        cold_product: String,
    },
}

impl Phase {
    pub fn is_gas(&self) -> bool {
        matches!(self, Phase::Gas { .. })
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Phase::Solid { .. })
    }

    pub fn is_liquid(&self) -> bool {
        matches!(self, Phase::Liquid { .. })
    }

    /// Names of the materials this phase can turn into.
    pub fn products(&self) -> Vec<&str> {
        match self {
            Phase::Gas { cold_product, .. } => vec![cold_product.as_str()],
            Phase::Solid { hot_product, .. } => vec![hot_product.as_str()],
            Phase::Liquid {
                hot_product,
                cold_product,
                ..
            } => vec![hot_product.as_str(), cold_product.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub comment: String,
    #[serde(flatten)]
    pub phase: Phase,
}

/// One CSV row. Which optional columns are needed depends on `phase`.
#[derive(Debug, Deserialize)]
struct MaterialRecord {
    name: String,
    comment: String,
    phase: String,
    molar_mass: Option<f64>,
    cold_temp: Option<f64>,
    cold_product: Option<String>,
    hot_temp: Option<f64>,
    hot_product: Option<String>,
}

impl TryFrom<MaterialRecord> for Material {
    type Error = CatalogError;

    fn try_from(record: MaterialRecord) -> Result<Self, Self::Error> {
        let name = record.name;
        let phase = match record.phase.to_ascii_lowercase().as_str() {
            "gas" => Phase::Gas {
                molar_mass: require(record.molar_mass, &name, "molar_mass")?,
                cold_temp: require(record.cold_temp, &name, "cold_temp")?,
                cold_product: require(record.cold_product, &name, "cold_product")?,
            },
            "solid" => Phase::Solid {
                hot_temp: require(record.hot_temp, &name, "hot_temp")?,
                hot_product: require(record.hot_product, &name, "hot_product")?,
            },
            "liquid" => Phase::Liquid {
                hot_temp: require(record.hot_temp, &name, "hot_temp")?,
                hot_product: require(record.hot_product, &name, "hot_product")?,
                cold_temp: require(record.cold_temp, &name, "cold_temp")?,
                cold_product: require(record.cold_product, &name, "cold_product")?,
            },
            _ => {
                return Err(CatalogError::UnknownPhase {
                    name,
                    phase: record.phase,
                })
            }
        };
        Ok(Material {
            name,
            comment: record.comment,
            phase,
        })
    }
}

fn require<T>(value: Option<T>, name: &str, field: &'static str) -> Result<T, CatalogError> {
    value.ok_or_else(|| CatalogError::MissingField {
        name: name.to_string(),
        field,
    })
}

#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: HashMap<String, Material>,
}

impl MaterialCatalog {
    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_reader(BUILTIN_TABLE.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut materials = HashMap::new();
        for row in rdr.deserialize::<MaterialRecord>() {
            let material = Material::try_from(row?)?;
            if materials.contains_key(&material.name) {
                return Err(CatalogError::DuplicateMaterial(material.name));
            }
            materials.insert(material.name.clone(), material);
        }

        let catalog = Self { materials };
        catalog.check_products()?;
        debug!(materials = catalog.len(), "loaded material catalog");
        Ok(catalog)
    }

    fn check_products(&self) -> Result<(), CatalogError> {
        for name in self.names() {
            let material = &self.materials[name];
            for product in material.phase.products() {
                if !self.contains(product) {
                    return Err(CatalogError::UnknownProduct {
                        name: name.to_string(),
                        product: product.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Material names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "name,comment,phase,molar_mass,cold_temp,cold_product,hot_temp,hot_product\n";

    fn parse(rows: &str) -> Result<MaterialCatalog, CatalogError> {
        MaterialCatalog::from_reader(format!("{HEADER}{rows}").as_bytes())
    }

    #[test]
    fn builtin_table_loads() {
        let catalog = MaterialCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("water"));
        assert!(catalog.contains("stone"));

        let water = catalog.get("water").unwrap();
        assert!(water.phase.is_liquid());
        assert_eq!(water.phase.products(), vec!["steam", "ice"]);

        let steam = catalog.get("steam").unwrap();
        assert!(steam.phase.is_gas());
        assert!(catalog.get("ice").unwrap().phase.is_solid());
    }

    #[test]
    fn names_are_sorted() {
        let catalog = parse("b,,solid,,,,10,a\na,,solid,,,,10,b\n").unwrap();
        assert_eq!(catalog.names(), vec!["a", "b"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = parse("a,,solid,,,,10,a\na,,solid,,,,20,a\n").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateMaterial(name) if name == "a"));
    }

    #[test]
    fn rejects_unknown_product() {
        let err = parse("a,,solid,,,,10,lava\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownProduct { ref name, ref product } if name == "a" && product == "lava"
        ));
    }

    #[test]
    fn rejects_unknown_phase() {
        let err = parse("a,,plasma,,,,,\n").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownPhase { ref phase, .. } if phase == "plasma"));
    }

    #[test]
    fn rejects_missing_field() {
        let err = parse("a,,gas,,-10,a,,\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingField { field: "molar_mass", .. }
        ));
    }
}
