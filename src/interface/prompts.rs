use dialoguer::{Confirm, Input};

use crate::error::{NutriError, Result};
use crate::models::Meal;
use crate::parser::constants::{
    DEFAULT_BODY_WEIGHT_KG, DEFAULT_MEALS, MAX_MEALS, MIN_MEALS, SAMPLE_MEALS,
};

/// Prompt for the body weight in kg.
pub fn prompt_body_weight() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Peso do aluno (kg)")
        .default(DEFAULT_BODY_WEIGHT_KG.to_string())
        .interact_text()?;

    parse_body_weight(&input)
}

/// Parse a body weight answer; must be a finite number above zero.
pub fn parse_body_weight(input: &str) -> Result<f64> {
    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if !weight.is_finite() || weight <= 0.0 {
        return Err(NutriError::InvalidInput(
            "Body weight must be greater than zero".to_string(),
        ));
    }

    Ok(weight)
}

/// Prompt for the number of meals.
pub fn prompt_meal_count() -> Result<usize> {
    let input: String = Input::new()
        .with_prompt(format!("Número de refeições ({}-{})", MIN_MEALS, MAX_MEALS))
        .default(DEFAULT_MEALS.to_string())
        .interact_text()?;

    parse_meal_count(&input)
}

/// Parse a meal count answer within the allowed range.
pub fn parse_meal_count(input: &str) -> Result<usize> {
    let count: usize = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if !(MIN_MEALS..=MAX_MEALS).contains(&count) {
        return Err(NutriError::InvalidInput(format!(
            "Meal count must be between {} and {}",
            MIN_MEALS, MAX_MEALS
        )));
    }

    Ok(count)
}

/// Prompt for one meal's name and protocol.
///
/// The first meals are pre-filled with sample protocols.
pub fn prompt_meal(index: usize) -> Result<Meal> {
    let (default_name, default_protocol) = match SAMPLE_MEALS.get(index) {
        Some((name, protocol)) => (name.to_string(), protocol.to_string()),
        None => (format!("Refeição {}", index + 1), String::new()),
    };

    let name: String = Input::new()
        .with_prompt(format!("Nome da refeição {}", index + 1))
        .default(default_name)
        .interact_text()?;

    let protocol: String = Input::new()
        .with_prompt("Protocolo (itens separados por ';')")
        .default(default_protocol)
        .allow_empty(true)
        .interact_text()?;

    Ok(Meal::new((index + 1).to_string(), name, protocol))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect body weight and meals for a calculation.
pub fn collect_protocol() -> Result<(f64, Vec<Meal>)> {
    let weight = prompt_body_weight()?;
    let count = prompt_meal_count()?;

    let mut meals = Vec::with_capacity(count);
    for index in 0..count {
        meals.push(prompt_meal(index)?);
    }

    Ok((weight, meals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_weight() {
        assert_eq!(parse_body_weight(" 72.5 ").unwrap(), 72.5);

        for bad in ["", "abc", "0", "-3", "NaN", "inf"] {
            let err = parse_body_weight(bad).unwrap_err();
            assert!(matches!(err, NutriError::InvalidInput(_)), "{:?}", bad);
            assert!(err.is_recoverable());
        }
    }

    #[test]
    fn test_parse_meal_count() {
        assert_eq!(parse_meal_count("3").unwrap(), 3);
        assert_eq!(parse_meal_count(&MAX_MEALS.to_string()).unwrap(), MAX_MEALS);

        let too_many = (MAX_MEALS + 1).to_string();
        for bad in ["0", "-1", "dois", too_many.as_str()] {
            let err = parse_meal_count(bad).unwrap_err();
            assert!(err.is_recoverable(), "{:?}", bad);
        }
    }
}
