use std::cmp::Ordering;

use clap::ValueEnum;

use crate::models::FoodItem;

/// Sort key for the saved-items view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Protein,
    Carbs,
    Fats,
    Total,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Price => "Price",
            SortKey::Protein => "Protein Value",
            SortKey::Carbs => "Carb Value",
            SortKey::Fats => "Fat Value",
            SortKey::Total => "Total Value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Cost basis used for ordering under a numeric key.
///
/// Items without the key's denominator sort as infinitely expensive: last
/// ascending, first descending.
fn cost_basis(item: &FoodItem, key: SortKey) -> f64 {
    let per = |quantity: f64| {
        if quantity > 0.0 {
            item.price / quantity
        } else {
            f64::INFINITY
        }
    };

    match key {
        SortKey::Price => item.price,
        SortKey::Protein => per(item.protein),
        SortKey::Carbs => per(item.carbs),
        SortKey::Fats => per(item.fats),
        SortKey::Total => per(item.macro_sum()),
        // Name is compared as a string, not through a cost basis.
        SortKey::Name => 0.0,
    }
}

/// Produce a sorted view of the items. The input order is never mutated;
/// the sort itself is stable.
pub fn sorted(items: &[FoodItem], key: SortKey, order: SortOrder) -> Vec<FoodItem> {
    let mut view: Vec<FoodItem> = items.to_vec();

    view.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            _ => cost_basis(a, key)
                .partial_cmp(&cost_basis(b, key))
                .unwrap_or(Ordering::Equal),
        };

        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    view
}
