use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::lookup::MatchStrategy;
use crate::models::Meal;

/// NutriProtocol: compute nutrition totals and macro ratios from free-text meal protocols.
#[derive(Parser, Debug)]
#[command(name = "nutri_protocol")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the reference table (JSON or CSV).
    #[arg(short, long, default_value = "foods.json", global = true)]
    pub foods: PathBuf,

    /// How to choose among several reference rows containing the food name.
    #[arg(long, value_enum, default_value_t = MatchStrategy::FirstMatch, global = true)]
    pub strategy: MatchStrategy,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate a protocol given on the command line or in a file.
    Calc(CalcArgs),

    /// Enter body weight and meals interactively.
    Interactive(OutputArgs),

    /// List reference foods.
    Foods {
        /// Only show foods whose name contains this text.
        #[arg(short, long)]
        search: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive(OutputArgs::default())
    }
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Body weight in kg.
    #[arg(short, long)]
    pub weight: f64,

    /// A meal as "Name=protocol"; repeat for several meals.
    #[arg(short, long = "meal")]
    pub meals: Vec<String>,

    /// JSON file with an array of {id, name, protocol}.
    #[arg(long = "meals-file")]
    pub meals_file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Also split protocol entries on line breaks.
    #[arg(long)]
    pub lines: bool,

    /// Write the per-item report to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the full report to this JSON file.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write a rounded summary to this JSON file.
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

/// Parse a `--meal` value. Text before the first `=` is the meal name;
/// without `=`, the meal is named "Refeição N".
pub fn parse_meal_arg(index: usize, value: &str) -> Meal {
    let id = (index + 1).to_string();
    match value.split_once('=') {
        Some((name, protocol)) if !name.trim().is_empty() => {
            Meal::new(id, name.trim(), protocol.trim())
        }
        _ => Meal::new(id, format!("Refeição {}", index + 1), value.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meal_arg_with_name() {
        let meal = parse_meal_arg(0, "Café da manhã= 100g aveia; 1 banana");
        assert_eq!(meal.id, "1");
        assert_eq!(meal.name, "Café da manhã");
        assert_eq!(meal.protocol, "100g aveia; 1 banana");
    }

    #[test]
    fn test_parse_meal_arg_without_name() {
        let meal = parse_meal_arg(2, "150g peito de frango");
        assert_eq!(meal.id, "3");
        assert_eq!(meal.name, "Refeição 3");
        assert_eq!(meal.protocol, "150g peito de frango");
    }

    #[test]
    fn test_cli_parses_calc() {
        let cli = Cli::parse_from([
            "nutri_protocol",
            "--foods",
            "taco.csv",
            "calc",
            "-w",
            "70",
            "--meal",
            "Almoço=100g arroz",
            "--strategy",
            "ranked",
        ]);
        assert_eq!(cli.strategy, MatchStrategy::Ranked);
        match cli.command {
            Some(Command::Calc(args)) => {
                assert_eq!(args.weight, 70.0);
                assert_eq!(args.meals.len(), 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
