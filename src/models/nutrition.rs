use serde::{Deserialize, Serialize};

use crate::models::{Meal, ReferenceFood};
use crate::parser::constants::NOT_FOUND_MARKER;

/// Nutrition computed for one food-item phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// The phrase as written, suffixed with the not-found marker when unmatched.
    pub name: String,
    pub kcal: f64,
    pub protein: f64,
    pub carb: f64,
    pub lipid: f64,
    pub quantity_g: f64,
    /// Name of the reference row that was used, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

impl NutritionRecord {
    /// Scale a reference row (per 100 g) to `quantity_g`.
    pub fn from_reference(phrase: &str, food: &ReferenceFood, quantity_g: f64) -> Self {
        let mult = ReferenceFood::scale_for(quantity_g);
        Self {
            name: phrase.to_string(),
            kcal: food.kcal * mult,
            protein: food.protein * mult,
            carb: food.carb * mult,
            lipid: food.lipid * mult,
            quantity_g,
            matched: Some(food.name.clone()),
        }
    }

    /// Zero-valued placeholder for a phrase with no reference match.
    pub fn not_found(phrase: &str) -> Self {
        Self {
            name: format!("{}{}", phrase, NOT_FOUND_MARKER),
            kcal: 0.0,
            protein: 0.0,
            carb: 0.0,
            lipid: 0.0,
            quantity_g: 0.0,
            matched: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.matched.is_some()
    }

    /// The phrase without the not-found marker.
    pub fn phrase(&self) -> &str {
        if self.is_found() {
            &self.name
        } else {
            self.name.strip_suffix(NOT_FOUND_MARKER).unwrap_or(&self.name)
        }
    }
}

/// Field-wise sums of nutrition records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub kcal: f64,
    pub protein: f64,
    pub carb: f64,
    pub lipid: f64,
    pub quantity_g: f64,
}

impl NutrientTotals {
    /// Add a single record.
    pub fn add_record(&mut self, record: &NutritionRecord) {
        self.kcal += record.kcal;
        self.protein += record.protein;
        self.carb += record.carb;
        self.lipid += record.lipid;
        self.quantity_g += record.quantity_g;
    }

    /// Add another set of totals.
    pub fn add_totals(&mut self, other: &NutrientTotals) {
        self.kcal += other.kcal;
        self.protein += other.protein;
        self.carb += other.carb;
        self.lipid += other.lipid;
        self.quantity_g += other.quantity_g;
    }

    pub fn from_records(records: &[NutritionRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.add_record(r);
            acc
        })
    }

    pub fn from_meals(meals: &[MealResult]) -> Self {
        meals.iter().fold(Self::default(), |mut acc, m| {
            acc.add_totals(&m.totals);
            acc
        })
    }
}

/// Records and totals for one meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealResult {
    pub meal: Meal,
    pub records: Vec<NutritionRecord>,
    pub totals: NutrientTotals,
}

impl MealResult {
    /// Build a result; totals are always derived from the records.
    pub fn new(meal: Meal, records: Vec<NutritionRecord>) -> Self {
        let totals = NutrientTotals::from_records(&records);
        Self {
            meal,
            records,
            totals,
        }
    }

    /// Records whose food was not found.
    pub fn unmatched(&self) -> impl Iterator<Item = &NutritionRecord> {
        self.records.iter().filter(|r| !r.is_found())
    }
}
