pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod lookup;
pub mod models;
pub mod parser;
pub mod report;

pub use calculator::{calculate_protocol, CalcConfig, ProtocolReport};
pub use error::{NutriError, Result};
pub use lookup::{FoodLookup, ReferenceTable};
pub use models::{Meal, MealResult, NutrientTotals, NutritionRecord, ReferenceFood};
