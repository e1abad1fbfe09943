use serde::{Deserialize, Serialize};

use crate::parser::constants::REFERENCE_BASE_G;

/// A row of the reference composition table.
///
/// All values are per 100 g of food. Field names on the wire follow the
/// reference table columns (`prot`, `carb`, `lip`); missing values read as 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceFood {
    pub name: String,

    #[serde(default)]
    pub kcal: f64,

    #[serde(rename = "prot", alias = "protein", default)]
    pub protein: f64,

    #[serde(rename = "carb", alias = "carbs", default)]
    pub carb: f64,

    #[serde(rename = "lip", alias = "lipid", default)]
    pub lipid: f64,
}

impl ReferenceFood {
    pub fn new(name: &str, kcal: f64, protein: f64, carb: f64, lipid: f64) -> Self {
        Self {
            name: name.to_string(),
            kcal,
            protein,
            carb,
            lipid,
        }
    }

    /// Multiplier that turns per-100g values into values for `grams`.
    #[inline]
    pub fn scale_for(grams: f64) -> f64 {
        grams / REFERENCE_BASE_G
    }

    /// Basic validation: non-empty name and non-negative values.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.kcal >= 0.0
            && self.protein >= 0.0
            && self.carb >= 0.0
            && self.lipid >= 0.0
    }

    /// One-line summary for listings.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} C:{} L:{} (100g)",
            self.name, self.kcal, self.protein, self.carb, self.lipid
        )
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for ReferenceFood {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ReferenceFood {}

impl std::hash::Hash for ReferenceFood {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> ReferenceFood {
        ReferenceFood::new("Aveia", 389.0, 17.0, 66.0, 7.0)
    }

    #[test]
    fn test_scale_for() {
        assert!((ReferenceFood::scale_for(250.0) - 2.5).abs() < 1e-9);
        assert_eq!(ReferenceFood::scale_for(0.0), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut invalid = sample_food();
        invalid.kcal = -1.0;
        assert!(!invalid.is_valid());

        let mut unnamed = sample_food();
        unnamed.name = "  ".to_string();
        assert!(!unnamed.is_valid());
    }

    #[test]
    fn test_equality_case_insensitive() {
        let mut upper = sample_food();
        upper.name = "AVEIA".to_string();
        assert_eq!(sample_food(), upper);
    }

    #[test]
    fn test_deserialize_table_columns() {
        let json = r#"{"name": "Banana", "kcal": 89, "prot": 1.1, "carb": 23}"#;
        let food: ReferenceFood = serde_json::from_str(json).unwrap();
        assert_eq!(food.name, "Banana");
        assert_eq!(food.protein, 1.1);
        assert_eq!(food.carb, 23.0);
        assert_eq!(food.lipid, 0.0);
    }
}
