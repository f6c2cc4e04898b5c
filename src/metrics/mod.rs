pub mod calculations;
pub mod constants;
pub mod rating;
pub mod sort;

pub use calculations::{analyze, best_value, per_100g, CostAnalysis, Nutrient, Per100g, PerGram, Totals};
pub use constants::*;
pub use rating::ValueRating;
pub use sort::{sorted, SortKey, SortOrder};
