/// Kilocalories per gram of protein.
pub const CAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Kilocalories per gram of carbohydrate.
pub const CAL_PER_GRAM_CARBS: f64 = 4.0;

/// Kilocalories per gram of fat.
pub const CAL_PER_GRAM_FATS: f64 = 9.0;

/// Reference weight for the per-100g projection.
pub const REFERENCE_WEIGHT_GRAMS: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Value rating thresholds (base currency per gram / per kcal)
// ─────────────────────────────────────────────────────────────────────────────

/// Highest unit price still rated "Great".
pub const RATING_GREAT_MAX: f64 = 0.10;

/// Highest unit price still rated "Good".
pub const RATING_GOOD_MAX: f64 = 0.30;

/// Highest unit price still rated "OK"; anything above is "Pricey".
pub const RATING_OK_MAX: f64 = 0.50;
