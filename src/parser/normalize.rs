use std::sync::LazyLock;

use regex::Regex;

use crate::parser::quantity::UNIT_ALTERNATION;

static QUANTITY_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\d+(?:\.\d+)?\s*(?:{UNIT_ALTERNATION})\b\s*"
    ))
    .expect("quantity with unit pattern")
});

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?\s*").expect("bare number pattern"));

static LEADING_DE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^de\s+").expect("leading connective pattern"));

/// Reduce a phrase to the key used to search the reference table.
///
/// "200g de arroz integral" becomes "arroz integral". The key is empty when
/// the phrase held nothing but a quantity.
pub fn normalize_food_name(phrase: &str) -> String {
    let name = phrase.trim();
    let name = QUANTITY_WITH_UNIT.replace(name, "");
    let name = BARE_NUMBER.replace(&name, "");
    let name = LEADING_DE.replace(&name, "");
    name.trim().to_lowercase()
}
