pub mod prompts;
pub mod render;

pub use prompts::{
    collect_protocol, parse_body_weight, parse_meal_count, prompt_body_weight, prompt_meal,
    prompt_meal_count, prompt_yes_no,
};
pub use render::{display_food_list, display_report};
