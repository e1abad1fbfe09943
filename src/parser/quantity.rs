use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::constants::*;

/// Unit alternation shared by the quantity and name patterns.
///
/// Longer spellings come first and every unit must end on a word boundary,
/// so "2 unidades" is not read as "unidade" and "1 laranja" carries no unit.
pub(crate) const UNIT_ALTERNATION: &str =
    "kg|g|ml|l|unidades|unidade|colheres|colher|xícaras|xícara|fatias|fatia";

static LEADING_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(\d+(?:\.\d+)?)\s*(?:({UNIT_ALTERNATION})\b)?"
    ))
    .expect("leading quantity pattern")
});

/// A unit token recognized after a leading amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Gram,
    Kilogram,
    Millilitre,
    Litre,
    /// "colher" / "colheres" (tablespoon).
    Spoon,
    /// "xícara" / "xícaras".
    Cup,
    /// "unidade" / "unidades".
    Piece,
    /// "fatia" / "fatias".
    Slice,
}

impl Unit {
    /// Parse a unit token (case-insensitive). Unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "g" => Some(Unit::Gram),
            "kg" => Some(Unit::Kilogram),
            "ml" => Some(Unit::Millilitre),
            "l" => Some(Unit::Litre),
            "colher" | "colheres" => Some(Unit::Spoon),
            "xícara" | "xícaras" => Some(Unit::Cup),
            "unidade" | "unidades" => Some(Unit::Piece),
            "fatia" | "fatias" => Some(Unit::Slice),
            _ => None,
        }
    }

    /// Grams per one of this unit.
    pub fn grams_factor(self) -> f64 {
        match self {
            Unit::Gram => 1.0,
            Unit::Kilogram => GRAMS_PER_KG,
            Unit::Millilitre => GRAMS_PER_ML,
            Unit::Litre => GRAMS_PER_LITRE,
            Unit::Spoon => GRAMS_PER_SPOON,
            Unit::Cup => GRAMS_PER_CUP,
            Unit::Piece | Unit::Slice => GRAMS_PER_PORTION,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Millilitre => "ml",
            Unit::Litre => "l",
            Unit::Spoon => "colher",
            Unit::Cup => "xícara",
            Unit::Piece => "unidade",
            Unit::Slice => "fatia",
        };
        f.write_str(s)
    }
}

/// Quantity parsed from the front of a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractedQuantity {
    /// Amount as written, before conversion.
    pub amount: f64,
    /// Unit as written; `Gram` when none was given.
    pub unit: Unit,
    /// Amount converted to grams. Never negative.
    pub grams: f64,
}

impl ExtractedQuantity {
    fn new(amount: f64, unit: Unit) -> Self {
        Self {
            amount,
            unit,
            grams: amount * unit.grams_factor(),
        }
    }
}

/// Extract the leading quantity of a phrase and convert it to grams.
///
/// Phrases without a leading number count as a 100 g serving.
pub fn extract_quantity(phrase: &str) -> ExtractedQuantity {
    let Some(caps) = LEADING_QUANTITY.captures(phrase.trim_start()) else {
        return ExtractedQuantity::new(DEFAULT_QUANTITY_G, Unit::Gram);
    };

    // Digit runs too long for f64 parse to infinity
    let amount = match caps[1].parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => return ExtractedQuantity::new(DEFAULT_QUANTITY_G, Unit::Gram),
    };

    let unit = caps
        .get(2)
        .and_then(|m| Unit::parse(m.as_str()))
        .unwrap_or(Unit::Gram);

    let quantity = ExtractedQuantity::new(amount, unit);
    if quantity.grams.is_finite() {
        quantity
    } else {
        ExtractedQuantity::new(DEFAULT_QUANTITY_G, Unit::Gram)
    }
}

/// Grams for a phrase; shorthand for `extract_quantity(phrase).grams`.
pub fn quantity_in_grams(phrase: &str) -> f64 {
    extract_quantity(phrase).grams
}
