use crate::calculator::ProtocolReport;
use crate::lookup::ReferenceTable;
use crate::models::ReferenceFood;
use crate::parser::normalize_food_name;

/// Maximum "did you mean" hints shown per unmatched item.
const MAX_SUGGESTIONS: usize = 3;

/// Display a protocol report: summary, ratios, and per-meal tables.
///
/// When `table` is given, unmatched items get close-name suggestions.
pub fn display_report(report: &ProtocolReport, table: Option<&ReferenceTable>) {
    let g = &report.grand_totals;

    println!();
    println!("=== Resumo Nutricional ===");
    println!();
    println!("Peso corporal: {} kg", report.body_weight_kg);
    println!("Calorias totais: {:.0} kcal", g.kcal);
    println!(
        "Proteínas: {:.1} g ({:.2} g/kg)",
        g.protein, report.per_kg.protein
    );
    println!(
        "Carboidratos: {:.1} g ({:.2} g/kg)",
        g.carb, report.per_kg.carb
    );
    println!("Lipídeos: {:.1} g ({:.2} g/kg)", g.lipid, report.per_kg.lipid);
    println!("Quantidade total: {:.0} g", g.quantity_g);

    println!();
    println!("--- Distribuição Calórica ---");
    println!("Proteínas: {:.1}%", report.macro_split.protein_pct);
    println!("Carboidratos: {:.1}%", report.macro_split.carb_pct);
    println!("Lipídeos: {:.1}%", report.macro_split.lipid_pct);

    for (result, share) in report.meals.iter().zip(&report.meal_shares) {
        println!();
        println!(
            "=== {} ({:.1}% das kcal) ===",
            result.meal.name, share.kcal_pct
        );

        if result.records.is_empty() {
            println!("  (nenhum alimento)");
            continue;
        }

        let max_name_len = result
            .records
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(10);

        for record in &result.records {
            println!(
                "  {:<width$} {:>6.0} g | {:>6.0} kcal | P {:>5.1} | C {:>5.1} | L {:>5.1}",
                record.name,
                record.quantity_g,
                record.kcal,
                record.protein,
                record.carb,
                record.lipid,
                width = max_name_len
            );

            if let (false, Some(table)) = (record.is_found(), table) {
                let key = normalize_food_name(record.phrase());
                let hints = table.suggest(&key, MAX_SUGGESTIONS);
                if !hints.is_empty() {
                    println!("      Você quis dizer: {}?", hints.join(", "));
                }
            }
        }

        let t = &result.totals;
        println!(
            "  {:<width$} {:>6.0} g | {:>6.0} kcal | P {:>5.1} | C {:>5.1} | L {:>5.1}",
            "Total",
            t.quantity_g,
            t.kcal,
            t.protein,
            t.carb,
            t.lipid,
            width = max_name_len
        );
        println!(
            "  {:<width$} {:>5.1}% g | {:>5.1}% kcal | P {:>4.1}% | C {:>4.1}% | L {:>4.1}%",
            "% do total",
            share.quantity_pct,
            share.kcal_pct,
            share.protein_pct,
            share.carb_pct,
            share.lipid_pct,
            width = max_name_len
        );
    }

    let unmatched = report.unmatched_count();
    if unmatched > 0 {
        println!();
        println!("{} alimento(s) não encontrado(s) na tabela de referência.", unmatched);
    }
    println!();
}

/// Display a list of reference foods with their per-100g values.
pub fn display_food_list(foods: &[&ReferenceFood], title: &str) {
    if foods.is_empty() {
        println!("{}: (nenhum)", title);
        return;
    }

    println!();
    println!("=== {} ({} itens) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - 100g: {} kcal, P:{} C:{} L:{}",
            food.name, food.kcal, food.protein, food.carb, food.lipid
        );
    }

    println!();
}
