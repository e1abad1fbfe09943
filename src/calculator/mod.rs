pub mod aggregate;
pub mod ratios;

pub use aggregate::{calculate_meal, calculate_meals};
pub use ratios::{percent_of, MacroSplit, MealShare, PerKgRatios, ProtocolReport};

use crate::error::{NutriError, Result};
use crate::lookup::FoodLookup;
use crate::models::Meal;

/// Options for a calculation.
#[derive(Debug, Clone, Default)]
pub struct CalcConfig {
    /// Also treat line breaks as entry separators, not only `;`.
    pub split_on_newlines: bool,
}

/// Check the caller-side preconditions of a calculation.
pub fn validate_request(meals: &[Meal], body_weight_kg: f64) -> Result<()> {
    if !body_weight_kg.is_finite() || body_weight_kg <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "body weight must be a positive number of kg, got {}",
            body_weight_kg
        )));
    }

    if !meals.iter().any(Meal::has_protocol) {
        return Err(NutriError::InvalidInput(
            "at least one meal must have a protocol".to_string(),
        ));
    }

    Ok(())
}

/// Calculate nutrition for a whole protocol.
///
/// Input is validated before any lookup is issued. Meals with a blank
/// protocol are skipped.
pub fn calculate_protocol<L: FoodLookup + ?Sized>(
    meals: &[Meal],
    body_weight_kg: f64,
    lookup: &L,
    config: &CalcConfig,
) -> Result<ProtocolReport> {
    validate_request(meals, body_weight_kg)?;

    let results = calculate_meals(meals, lookup, config)?;
    let report = ProtocolReport::new(results, body_weight_kg);

    log::info!(
        "Calculated {} meals: {:.0} kcal, {} unmatched items",
        report.meals.len(),
        report.grand_totals.kcal,
        report.unmatched_count()
    );

    Ok(report)
}
