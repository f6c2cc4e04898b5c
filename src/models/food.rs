use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::constants::{CAL_PER_GRAM_CARBS, CAL_PER_GRAM_FATS, CAL_PER_GRAM_PROTEIN};

/// One food product entry.
///
/// Prices are stored in the base currency (EUR) and weights in grams,
/// whatever the display settings are. Calories are kilocalories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Stable row identifier, generated when the row is created.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub name: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub weight: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fats: f64,

    #[serde(default)]
    pub calories: f64,
}

impl FoodItem {
    /// A fresh blank row: new id, empty name, zeroed numerics.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            price: 0.0,
            weight: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            calories: 0.0,
        }
    }

    /// Sum of the three macronutrients in grams.
    #[inline]
    pub fn macro_sum(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }

    /// Calories implied by the current macros (4/4/9 kcal per gram).
    #[inline]
    pub fn derived_calories(&self) -> f64 {
        self.protein * CAL_PER_GRAM_PROTEIN
            + self.carbs * CAL_PER_GRAM_CARBS
            + self.fats * CAL_PER_GRAM_FATS
    }

    /// Whether the row qualifies for the saved list: named, priced, and
    /// carrying at least one nutrient or calorie figure.
    pub fn is_savable(&self) -> bool {
        !self.name.is_empty()
            && self.price > 0.0
            && (self.protein > 0.0 || self.carbs > 0.0 || self.fats > 0.0 || self.calories > 0.0)
    }
}

impl Default for FoodItem {
    fn default() -> Self {
        Self::new()
    }
}
