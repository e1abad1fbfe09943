/// Quantity assumed when a phrase carries no leading number.
pub const DEFAULT_QUANTITY_G: f64 = 100.0;

/// Reference table values are expressed per this many grams.
pub const REFERENCE_BASE_G: f64 = 100.0;

/// Suffix appended to a phrase whose food was not found in the reference table.
pub const NOT_FOUND_MARKER: &str = " (não encontrado)";

// ─────────────────────────────────────────────────────────────────────────────
// Unit conversion heuristics (grams per unit)
// ─────────────────────────────────────────────────────────────────────────────

/// Kilogram.
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Litre, assuming density ≈ 1.
pub const GRAMS_PER_LITRE: f64 = 1000.0;

/// Millilitre, assuming density ≈ 1.
pub const GRAMS_PER_ML: f64 = 1.0;

/// Tablespoon.
pub const GRAMS_PER_SPOON: f64 = 15.0;

/// Cup.
pub const GRAMS_PER_CUP: f64 = 240.0;

/// Estimated medium portion for units and slices.
pub const GRAMS_PER_PORTION: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy per gram of macronutrient
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_LIPID: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Interactive defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Body weight offered by the interactive prompt.
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;

/// Meal count bounds for the interactive flow.
pub const MIN_MEALS: usize = 1;
pub const MAX_MEALS: usize = 7;
pub const DEFAULT_MEALS: usize = 3;

/// Pre-filled (name, protocol) pairs for the first interactive meals.
pub const SAMPLE_MEALS: [(&str, &str); 3] = [
    (
        "Café da manhã",
        "100g aveia; 200ml leite desnatado; 1 unidade banana",
    ),
    (
        "Almoço",
        "150g peito de frango; 100g arroz integral; 80g brócolis",
    ),
    ("Jantar", "120g salmão; 150g batata doce; 50g espinafre"),
];
