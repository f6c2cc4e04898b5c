use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::FoodItem;

/// Load a food item list from a JSON or CSV file, dispatched on extension.
///
/// This is an input boundary only; nothing is ever written back. Rows
/// without an id get a fresh one, and rows without a calorie figure get the
/// macro-derived value filled in.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let mut items = if is_csv {
        load_csv(path)?
    } else {
        load_json(path)?
    };

    for item in &mut items {
        if item.calories <= 0.0 && item.macro_sum() > 0.0 {
            item.calories = item.derived_calories();
        }
    }

    Ok(items)
}

fn load_json(path: &Path) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// CSV row shape: a name plus any of the numeric columns.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    name: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    weight: f64,
    #[serde(default)]
    protein: f64,
    #[serde(default)]
    carbs: f64,
    #[serde(default)]
    fats: f64,
    #[serde(default)]
    calories: f64,
}

fn load_csv(path: &Path) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();

    for record in reader.deserialize() {
        let record: CsvRecord = record?;
        items.push(FoodItem {
            name: record.name,
            price: record.price,
            weight: record.weight,
            protein: record.protein,
            carbs: record.carbs,
            fats: record.fats,
            calories: record.calories,
            ..FoodItem::new()
        });
    }

    Ok(items)
}
