use crate::calculator::CalcConfig;
use crate::error::{NutriError, Result};
use crate::lookup::FoodLookup;
use crate::models::{Meal, MealResult, NutritionRecord};
use crate::parser::{extract_quantity, normalize_food_name, tokenize_with};

/// Running count of lookups issued during one calculation.
#[derive(Debug, Default)]
struct LookupStats {
    attempted: usize,
    failed: usize,
    last_error: Option<String>,
}

impl LookupStats {
    /// True when lookups were issued and every single one errored.
    fn all_failed(&self) -> bool {
        self.attempted > 0 && self.failed == self.attempted
    }
}

/// Compute the nutrition record for one food-item phrase.
///
/// Unmatched foods and lookup errors both yield a not-found record.
fn record_for_phrase<L: FoodLookup + ?Sized>(
    phrase: &str,
    lookup: &L,
    stats: &mut LookupStats,
) -> NutritionRecord {
    let quantity = extract_quantity(phrase);
    let key = normalize_food_name(phrase);

    if key.is_empty() {
        log::warn!("No food name in '{}'", phrase);
        return NutritionRecord::not_found(phrase);
    }

    log::debug!("Searching for '{}' from '{}'", key, phrase);
    stats.attempted += 1;

    match lookup.find(&key) {
        Ok(Some(food)) => NutritionRecord::from_reference(phrase, &food, quantity.grams),
        Ok(None) => {
            log::warn!("Food not found: '{}'", key);
            NutritionRecord::not_found(phrase)
        }
        Err(e) => {
            log::warn!("Lookup failed for '{}': {}", key, e);
            stats.failed += 1;
            stats.last_error = Some(e.to_string());
            NutritionRecord::not_found(phrase)
        }
    }
}

fn calculate_meal_with<L: FoodLookup + ?Sized>(
    meal: &Meal,
    lookup: &L,
    config: &CalcConfig,
    stats: &mut LookupStats,
) -> MealResult {
    let records = tokenize_with(&meal.protocol, config.split_on_newlines)
        .iter()
        .map(|phrase| record_for_phrase(phrase, lookup, stats))
        .collect();

    MealResult::new(meal.clone(), records)
}

/// Compute records and totals for a single meal.
///
/// Never fails: every phrase produces a record, found or not.
pub fn calculate_meal<L: FoodLookup + ?Sized>(
    meal: &Meal,
    lookup: &L,
    config: &CalcConfig,
) -> MealResult {
    calculate_meal_with(meal, lookup, config, &mut LookupStats::default())
}

/// Compute results for every meal with a non-blank protocol, in input order.
///
/// Fails with `InvalidInput` when no meal has a protocol, and with
/// `LookupUnavailable` when every lookup of the whole batch errored.
pub fn calculate_meals<L: FoodLookup + ?Sized>(
    meals: &[Meal],
    lookup: &L,
    config: &CalcConfig,
) -> Result<Vec<MealResult>> {
    let with_protocol: Vec<&Meal> = meals.iter().filter(|m| m.has_protocol()).collect();
    if with_protocol.is_empty() {
        return Err(NutriError::InvalidInput(
            "at least one meal must have a protocol".to_string(),
        ));
    }

    let mut stats = LookupStats::default();
    let results: Vec<MealResult> = with_protocol
        .into_iter()
        .map(|meal| calculate_meal_with(meal, lookup, config, &mut stats))
        .collect();

    if stats.all_failed() {
        return Err(NutriError::LookupUnavailable {
            attempted: stats.attempted,
            last_error: stats.last_error.unwrap_or_default(),
        });
    }

    if stats.failed > 0 {
        log::warn!(
            "{} of {} lookups failed; affected items were zeroed",
            stats.failed,
            stats.attempted
        );
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::ReferenceTable;
    use crate::models::ReferenceFood;
    use std::cell::Cell;

    fn table() -> ReferenceTable {
        ReferenceTable::new(vec![
            ReferenceFood::new("aveia", 389.0, 17.0, 66.0, 7.0),
            ReferenceFood::new("tofu", 76.0, 8.0, 1.9, 4.8),
            ReferenceFood::new("peito de frango", 165.0, 31.0, 0.0, 3.6),
        ])
    }

    /// Errors on every call.
    struct Unreachable;

    impl FoodLookup for Unreachable {
        fn find(&self, _key: &str) -> Result<Option<ReferenceFood>> {
            Err(NutriError::Lookup("connection refused".to_string()))
        }
    }

    /// Errors on every other call, delegating the rest.
    struct Flaky {
        inner: ReferenceTable,
        calls: Cell<usize>,
    }

    impl FoodLookup for Flaky {
        fn find(&self, key: &str) -> Result<Option<ReferenceFood>> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            if n % 2 == 1 {
                Err(NutriError::Lookup("timeout".to_string()))
            } else {
                self.inner.find(key)
            }
        }
    }

    #[test]
    fn test_alternative_uses_first_option() {
        let meal = Meal::new("1", "Almoço", "350g peito de frango ou 200g tofu");
        let result = calculate_meal(&meal, &table(), &CalcConfig::default());

        assert_eq!(result.records.len(), 1);
        let record = &result.records[0];
        assert_eq!(record.name, "350g peito de frango");
        assert_eq!(record.quantity_g, 350.0);
        assert!((record.kcal - 577.5).abs() < 1e-9);
    }

    #[test]
    fn test_quantity_only_phrase_is_not_found() {
        let meal = Meal::new("1", "Lanche", "200g; 50g aveia");
        let result = calculate_meal(&meal, &table(), &CalcConfig::default());

        assert_eq!(result.records.len(), 2);
        assert!(!result.records[0].is_found());
        assert_eq!(result.records[0].name, "200g (não encontrado)");
        assert!((result.totals.kcal - 194.5).abs() < 1e-9);
    }

    #[test]
    fn test_blank_meals_are_skipped() {
        let meals = vec![
            Meal::new("1", "Café", "  "),
            Meal::new("2", "Almoço", "100g aveia"),
        ];
        let results = calculate_meals(&meals, &table(), &CalcConfig::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].meal.id, "2");
    }

    #[test]
    fn test_no_protocol_is_invalid_input() {
        let meals = vec![Meal::new("1", "Café", ""), Meal::new("2", "Jantar", " \n ")];
        let err = calculate_meals(&meals, &table(), &CalcConfig::default()).unwrap_err();
        assert!(matches!(err, NutriError::InvalidInput(_)));
    }

    #[test]
    fn test_total_lookup_failure_is_fatal() {
        let meals = vec![Meal::new("1", "Café", "100g aveia; 1 tofu")];
        let err = calculate_meals(&meals, &Unreachable, &CalcConfig::default()).unwrap_err();
        match err {
            NutriError::LookupUnavailable {
                attempted,
                last_error,
            } => {
                assert_eq!(attempted, 2);
                assert!(last_error.contains("connection refused"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_partial_lookup_failure_degrades_items() {
        let lookup = Flaky {
            inner: table(),
            calls: Cell::new(0),
        };
        let meals = vec![Meal::new("1", "Café", "100g aveia; 100g tofu; 10g aveia")];
        let results = calculate_meals(&meals, &lookup, &CalcConfig::default()).unwrap();

        let records = &results[0].records;
        assert!(records[0].is_found());
        assert!(!records[1].is_found());
        assert!(records[2].is_found());
        assert!((results[0].totals.kcal - 427.9).abs() < 1e-9);
    }

    #[test]
    fn test_empty_keys_do_not_count_as_failed_lookups() {
        // Only quantity-only phrases: nothing is queried, so nothing failed
        let meals = vec![Meal::new("1", "Café", "100g; 2")];
        let results = calculate_meals(&meals, &Unreachable, &CalcConfig::default()).unwrap();
        assert_eq!(results[0].records.len(), 2);
        assert_eq!(results[0].totals.kcal, 0.0);
    }
}
