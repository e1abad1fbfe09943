use std::fs;
use std::path::Path;

use crate::error::{NutriError, Result};
use crate::lookup::ReferenceTable;
use crate::models::ReferenceFood;

/// Load reference rows from a JSON array.
pub fn load_reference_json<P: AsRef<Path>>(path: P) -> Result<Vec<ReferenceFood>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<ReferenceFood> = serde_json::from_str(&content)?;
    Ok(foods)
}

/// Load reference rows from a CSV file with `name,kcal,prot,carb,lip` headers.
pub fn load_reference_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ReferenceFood>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for row in rdr.deserialize() {
        let food: ReferenceFood = row?;
        foods.push(food);
    }
    Ok(foods)
}

/// Load a reference table, picking the format from the file extension.
///
/// Rows that fail validation are skipped with a warning.
pub fn load_reference_table<P: AsRef<Path>>(path: P) -> Result<ReferenceTable> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let foods = match extension.as_deref() {
        Some("json") => load_reference_json(path)?,
        Some("csv") => load_reference_csv(path)?,
        other => {
            return Err(NutriError::InvalidInput(format!(
                "unsupported reference table format: {}",
                other.unwrap_or("(none)")
            )));
        }
    };

    let total = foods.len();
    let valid: Vec<ReferenceFood> = foods
        .into_iter()
        .filter(|f| {
            let ok = f.is_valid();
            if !ok {
                log::warn!("Skipping invalid reference row: {}", f.debug_string());
            }
            ok
        })
        .collect();

    log::debug!(
        "Loaded {} of {} reference rows from {}",
        valid.len(),
        total,
        path.display()
    );

    Ok(ReferenceTable::new(valid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_json_table() {
        let json = r#"[
            {"name": "Banana", "kcal": 89, "prot": 1.1, "carb": 23, "lip": 0.3},
            {"name": "Aveia", "kcal": 389, "prot": 17, "carb": 66, "lip": 7},
            {"name": "banana", "kcal": 90, "prot": 1, "carb": 22, "lip": 0.2}
        ]"#;

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let table = load_reference_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.all()[0].name, "Aveia");
        // Last occurrence wins
        assert_eq!(table.get_food("BANANA").unwrap().kcal, 90.0);
    }

    #[test]
    fn test_load_csv_table() {
        let csv = "name,kcal,prot,carb,lip\nLeite desnatado,35,3.4,5,0.2\nArroz integral,124,2.6,25.8,1\n";

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let table = load_reference_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        let leite = table.get_food("leite desnatado").unwrap();
        assert_eq!(leite.protein, 3.4);
        assert_eq!(leite.lipid, 0.2);
    }

    #[test]
    fn test_invalid_rows_skipped() {
        let json = r#"[
            {"name": "Banana", "kcal": 89, "prot": 1.1, "carb": 23, "lip": 0.3},
            {"name": "Broken", "kcal": -5}
        ]"#;

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let table = load_reference_table(file.path()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = NamedTempFile::new().unwrap();
        let err = load_reference_table(file.path()).unwrap_err();
        assert!(matches!(err, NutriError::InvalidInput(_)));
    }
}
