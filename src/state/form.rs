use uuid::Uuid;

use crate::models::FoodItem;
use crate::units::UnitSystem;

/// Editable field of a food item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    Weight,
    Protein,
    Carbs,
    Fats,
    Calories,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Price,
        Field::Weight,
        Field::Protein,
        Field::Carbs,
        Field::Fats,
        Field::Calories,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Price => "Price",
            Field::Weight => "Weight",
            Field::Protein => "Proteins (g)",
            Field::Carbs => "Carbohydrates (g)",
            Field::Fats => "Fats (g)",
            Field::Calories => "Calories (kcal)",
        }
    }
}

/// The editable food item list.
///
/// Never empty: there is always at least one row to type into. All numeric
/// input is tolerant — empty or unparseable strings store as zero, nothing
/// is reported back.
pub struct FormState {
    items: Vec<FoodItem>,
}

impl FormState {
    /// A form with a single blank row.
    pub fn new() -> Self {
        Self {
            items: vec![FoodItem::new()],
        }
    }

    /// A form preloaded with the given rows; falls back to one blank row.
    pub fn from_items(items: Vec<FoodItem>) -> Self {
        if items.is_empty() {
            Self::new()
        } else {
            Self { items }
        }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append a fresh blank row and return its id.
    pub fn add_item(&mut self) -> Uuid {
        let item = FoodItem::new();
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Update one field of the row matching `id` from raw text input.
    ///
    /// Editing a macronutrient recomputes the row's calories from the new
    /// macro values, overwriting whatever was there — including a value
    /// typed directly into the calories field earlier.
    pub fn update_field(&mut self, id: Uuid, field: Field, raw: &str) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };

        match field {
            Field::Name => item.name = raw.to_string(),
            Field::Price => item.price = parse_number(raw),
            Field::Weight => item.weight = parse_number(raw),
            Field::Protein => item.protein = parse_number(raw),
            Field::Carbs => item.carbs = parse_number(raw),
            Field::Fats => item.fats = parse_number(raw),
            Field::Calories => item.calories = parse_number(raw),
        }

        if matches!(field, Field::Protein | Field::Carbs | Field::Fats) {
            item.calories = item.derived_calories();
        }
    }

    /// Update a row's weight from a displayed value in the active unit
    /// system. Storage is always grams.
    pub fn update_weight(&mut self, id: Uuid, raw: &str, unit_system: UnitSystem) {
        let grams = unit_system.to_grams(parse_number(raw));
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        item.weight = grams;
    }

    /// Remove a row. Refused (returns false) while only one row exists.
    pub fn remove_item(&mut self, id: Uuid) -> bool {
        if self.items.len() <= 1 {
            return false;
        }

        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }

    /// Discard all rows and reset to a single blank one.
    pub fn clear(&mut self) {
        self.items = vec![FoodItem::new()];
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tolerant decimal parse: empty or unparseable input is zero, and values
/// are kept non-negative.
fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
}
