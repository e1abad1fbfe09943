use clap::Parser;
use std::fs;
use std::path::Path;

use nutri_protocol_rs::calculator::{calculate_protocol, CalcConfig, ProtocolReport};
use nutri_protocol_rs::cli::{parse_meal_arg, CalcArgs, Cli, Command, OutputArgs};
use nutri_protocol_rs::error::{NutriError, Result};
use nutri_protocol_rs::interface::{
    collect_protocol, display_food_list, display_report, prompt_yes_no,
};
use nutri_protocol_rs::lookup::{load_reference_table, MatchStrategy, ReferenceTable};
use nutri_protocol_rs::models::Meal;
use nutri_protocol_rs::report::{write_csv, write_json, write_summary_json};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc(args) => cmd_calc(&cli.foods, cli.strategy, args),
        Command::Interactive(output) => cmd_interactive(&cli.foods, cli.strategy, output),
        Command::Foods { search } => cmd_foods(&cli.foods, search.as_deref()),
    }
}

fn load_table(path: &Path, strategy: MatchStrategy) -> Result<ReferenceTable> {
    if !path.exists() {
        return Err(NutriError::InvalidInput(format!(
            "reference table not found: {}",
            path.display()
        )));
    }

    let table = load_reference_table(path)?.with_strategy(strategy);
    if table.is_empty() {
        return Err(NutriError::InvalidInput(format!(
            "reference table is empty: {}",
            path.display()
        )));
    }

    Ok(table)
}

/// Calculate a protocol from `--meal` values and/or a meals file.
fn cmd_calc(foods: &Path, strategy: MatchStrategy, args: CalcArgs) -> Result<()> {
    let table = load_table(foods, strategy)?;

    let mut meals: Vec<Meal> = match &args.meals_file {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Vec::new(),
    };
    let offset = meals.len();
    meals.extend(
        args.meals
            .iter()
            .enumerate()
            .map(|(i, value)| parse_meal_arg(offset + i, value)),
    );

    let report = calculate(&table, &meals, args.weight, &args.output)?;
    export(&report, &args.output)
}

/// Prompt for a protocol, show the report, repeat on request.
fn cmd_interactive(foods: &Path, strategy: MatchStrategy, output: OutputArgs) -> Result<()> {
    let table = load_table(foods, strategy)?;
    println!(
        "Loaded {} reference foods (matching: {:?})",
        table.len(),
        table.strategy()
    );
    println!();

    loop {
        let outcome = collect_protocol()
            .and_then(|(weight, meals)| calculate(&table, &meals, weight, &output));

        match outcome {
            Ok(report) => export(&report, &output)?,
            Err(e) if e.is_recoverable() => eprintln!("{}", e),
            Err(e) => return Err(e),
        }

        if !prompt_yes_no("Calcular outro protocolo?", false)? {
            break;
        }
    }

    Ok(())
}

/// List reference foods, optionally filtered.
fn cmd_foods(foods: &Path, search: Option<&str>) -> Result<()> {
    let table = load_table(foods, MatchStrategy::default())?;
    let term = search.unwrap_or("");
    let matches = table.search(term);

    let title = if term.is_empty() {
        "Alimentos disponíveis".to_string()
    } else {
        format!("Alimentos com '{}'", term)
    };
    display_food_list(&matches, &title);

    Ok(())
}

fn calculate(
    table: &ReferenceTable,
    meals: &[Meal],
    weight: f64,
    output: &OutputArgs,
) -> Result<ProtocolReport> {
    let config = CalcConfig {
        split_on_newlines: output.lines,
    };

    let report = calculate_protocol(meals, weight, table, &config)?;
    display_report(&report, Some(table));
    Ok(report)
}

fn export(report: &ProtocolReport, output: &OutputArgs) -> Result<()> {
    if let Some(path) = &output.csv {
        write_csv(report, path)?;
        println!("Wrote CSV report to {}", path.display());
    }

    if let Some(path) = &output.json {
        write_json(report, path)?;
        println!("Wrote JSON report to {}", path.display());
    }

    if let Some(path) = &output.summary {
        write_summary_json(report, path)?;
        println!("Wrote summary to {}", path.display());
    }

    Ok(())
}
