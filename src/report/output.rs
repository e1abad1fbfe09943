use std::fs;
use std::path::Path;

use crate::calculator::{MealShare, ProtocolReport};
use crate::error::Result;
use crate::models::NutrientTotals;

/// Round a float to n decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Nutrient columns of a CSV row.
fn totals_columns(t: &NutrientTotals) -> [String; 5] {
    [
        format!("{:.1}", t.quantity_g),
        format!("{:.1}", t.kcal),
        format!("{:.1}", t.protein),
        format!("{:.1}", t.carb),
        format!("{:.1}", t.lipid),
    ]
}

/// Share columns of a CSV row; empty when the row is not a meal total.
fn share_columns(share: Option<&MealShare>) -> [String; 5] {
    match share {
        Some(s) => [
            format!("{:.1}", s.kcal_pct),
            format!("{:.1}", s.protein_pct),
            format!("{:.1}", s.carb_pct),
            format!("{:.1}", s.lipid_pct),
            format!("{:.1}", s.quantity_pct),
        ],
        None => Default::default(),
    }
}

/// Write the report as CSV: one row per record, then one totals row per meal
/// (carrying the meal's share of the grand totals) and a final grand-total row.
pub fn write_csv(report: &ProtocolReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "meal_id",
        "meal",
        "item",
        "quantity_g",
        "kcal",
        "protein_g",
        "carb_g",
        "lipid_g",
        "found",
        "kcal_pct",
        "protein_pct",
        "carb_pct",
        "lipid_pct",
        "quantity_pct",
    ])?;

    for (result, share) in report.meals.iter().zip(&report.meal_shares) {
        for record in &result.records {
            let mut row = vec![
                result.meal.id.clone(),
                result.meal.name.clone(),
                record.name.clone(),
                format!("{:.1}", record.quantity_g),
                format!("{:.1}", record.kcal),
                format!("{:.1}", record.protein),
                format!("{:.1}", record.carb),
                format!("{:.1}", record.lipid),
                record.is_found().to_string(),
            ];
            row.extend(share_columns(None));
            wtr.write_record(&row)?;
        }

        let mut row = vec![
            result.meal.id.clone(),
            result.meal.name.clone(),
            "Total".to_string(),
        ];
        row.extend(totals_columns(&result.totals));
        row.push(String::new());
        row.extend(share_columns(Some(share)));
        wtr.write_record(&row)?;
    }

    let mut row = vec![String::new(), String::new(), "Total geral".to_string()];
    row.extend(totals_columns(&report.grand_totals));
    row.push(String::new());
    row.extend(share_columns(None));
    wtr.write_record(&row)?;

    wtr.flush()?;
    Ok(())
}

/// Write a JSON summary of the report with rounded floats.
pub fn write_summary_json(report: &ProtocolReport, path: &Path) -> Result<()> {
    let g = &report.grand_totals;
    let json = serde_json::json!({
        "body_weight_kg": report.body_weight_kg,
        "totals": {
            "kcal": round_to(g.kcal, 0),
            "protein_g": round_to(g.protein, 1),
            "carb_g": round_to(g.carb, 1),
            "lipid_g": round_to(g.lipid, 1),
            "quantity_g": round_to(g.quantity_g, 0),
        },
        "per_kg": {
            "protein": round_to(report.per_kg.protein, 2),
            "carb": round_to(report.per_kg.carb, 2),
            "lipid": round_to(report.per_kg.lipid, 2),
        },
        "macro_split_pct": {
            "protein": round_to(report.macro_split.protein_pct, 1),
            "carb": round_to(report.macro_split.carb_pct, 1),
            "lipid": round_to(report.macro_split.lipid_pct, 1),
        },
        "meals": report.meals.iter().zip(&report.meal_shares).map(|(m, share)| {
            serde_json::json!({
                "id": m.meal.id,
                "name": m.meal.name,
                "kcal": round_to(m.totals.kcal, 0),
                "share_pct": {
                    "kcal": round_to(share.kcal_pct, 1),
                    "protein": round_to(share.protein_pct, 1),
                    "carb": round_to(share.carb_pct, 1),
                    "lipid": round_to(share.lipid_pct, 1),
                    "quantity": round_to(share.quantity_pct, 1),
                },
                "unmatched": m.unmatched().map(|r| r.phrase().to_string()).collect::<Vec<_>>(),
            })
        }).collect::<Vec<_>>(),
    });

    fs::write(path, serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

/// Write the full report as pretty JSON.
pub fn write_json(report: &ProtocolReport, path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}
