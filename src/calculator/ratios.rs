use serde::{Deserialize, Serialize};

use crate::models::{MealResult, NutrientTotals};
use crate::parser::constants::{KCAL_PER_G_CARB, KCAL_PER_G_LIPID, KCAL_PER_G_PROTEIN};

/// Grams of each macronutrient per kilogram of body weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerKgRatios {
    pub protein: f64,
    pub carb: f64,
    pub lipid: f64,
}

impl PerKgRatios {
    pub fn new(totals: &NutrientTotals, body_weight_kg: f64) -> Self {
        if body_weight_kg <= 0.0 {
            return Self::default();
        }
        Self {
            protein: totals.protein / body_weight_kg,
            carb: totals.carb / body_weight_kg,
            lipid: totals.lipid / body_weight_kg,
        }
    }
}

/// Share of total energy contributed by each macronutrient, in percent.
///
/// Uses 4 kcal/g for protein and carbohydrate and 9 kcal/g for lipid against
/// the total kcal. All zero when total kcal is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carb_pct: f64,
    pub lipid_pct: f64,
}

impl MacroSplit {
    pub fn new(totals: &NutrientTotals) -> Self {
        if totals.kcal <= 0.0 {
            return Self::default();
        }
        Self {
            protein_pct: totals.protein * KCAL_PER_G_PROTEIN / totals.kcal * 100.0,
            carb_pct: totals.carb * KCAL_PER_G_CARB / totals.kcal * 100.0,
            lipid_pct: totals.lipid * KCAL_PER_G_LIPID / totals.kcal * 100.0,
        }
    }

    pub fn sum(&self) -> f64 {
        self.protein_pct + self.carb_pct + self.lipid_pct
    }
}

/// A meal's share of the grand totals, per field, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealShare {
    pub meal_id: String,
    pub kcal_pct: f64,
    pub protein_pct: f64,
    pub carb_pct: f64,
    pub lipid_pct: f64,
    pub quantity_pct: f64,
}

impl MealShare {
    pub fn new(result: &MealResult, grand: &NutrientTotals) -> Self {
        let t = &result.totals;
        Self {
            meal_id: result.meal.id.clone(),
            kcal_pct: percent_of(t.kcal, grand.kcal),
            protein_pct: percent_of(t.protein, grand.protein),
            carb_pct: percent_of(t.carb, grand.carb),
            lipid_pct: percent_of(t.lipid, grand.lipid),
            quantity_pct: percent_of(t.quantity_g, grand.quantity_g),
        }
    }
}

/// `part / whole * 100`, or 0 when `whole` is not positive.
#[inline]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Full output of a protocol calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolReport {
    pub body_weight_kg: f64,
    pub meals: Vec<MealResult>,
    pub grand_totals: NutrientTotals,
    pub per_kg: PerKgRatios,
    pub macro_split: MacroSplit,
    pub meal_shares: Vec<MealShare>,
}

impl ProtocolReport {
    /// Derive grand totals and ratios from per-meal results.
    pub fn new(meals: Vec<MealResult>, body_weight_kg: f64) -> Self {
        let grand_totals = NutrientTotals::from_meals(&meals);
        let meal_shares = meals
            .iter()
            .map(|m| MealShare::new(m, &grand_totals))
            .collect();

        Self {
            body_weight_kg,
            per_kg: PerKgRatios::new(&grand_totals, body_weight_kg),
            macro_split: MacroSplit::new(&grand_totals),
            grand_totals,
            meals,
            meal_shares,
        }
    }

    /// Number of records whose food was not found, across all meals.
    pub fn unmatched_count(&self) -> usize {
        self.meals.iter().map(|m| m.unmatched().count()).sum()
    }
}
