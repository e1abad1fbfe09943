pub mod constants;
pub mod normalize;
pub mod quantity;
pub mod tokenizer;

pub use constants::*;
pub use normalize::normalize_food_name;
pub use quantity::{extract_quantity, quantity_in_grams, ExtractedQuantity, Unit};
pub use tokenizer::{first_alternative, has_alternatives, tokenize, tokenize_with};
