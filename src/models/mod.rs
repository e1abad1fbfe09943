pub mod food;
pub mod meal;
pub mod nutrition;

pub use food::ReferenceFood;
pub use meal::Meal;
pub use nutrition::{MealResult, NutrientTotals, NutritionRecord};
