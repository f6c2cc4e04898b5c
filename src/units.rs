//! Unit and currency conversion plus display formatting.
//!
//! Weights are stored in grams and prices in EUR; everything here converts
//! from those base units for display, or back from a displayed value.

use clap::ValueEnum;

/// Ounces per gram.
pub const OUNCES_PER_GRAM: f64 = 0.035274;

/// Fixed approximate EUR to USD conversion rate (no live lookup).
pub const EUR_TO_USD_RATE: f64 = 1.1;

/// Measurement system used for weight display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Convert a stored gram value to this system's display value.
    pub fn from_grams(&self, grams: f64) -> f64 {
        match self {
            UnitSystem::Metric => grams,
            UnitSystem::Imperial => grams * OUNCES_PER_GRAM,
        }
    }

    /// Convert a displayed weight value back to grams for storage.
    pub fn to_grams(&self, displayed: f64) -> f64 {
        match self {
            UnitSystem::Metric => displayed,
            UnitSystem::Imperial => displayed / OUNCES_PER_GRAM,
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "g",
            UnitSystem::Imperial => "oz",
        }
    }

    pub fn weight_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Weight (g)",
            UnitSystem::Imperial => "Weight (oz)",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }
}

/// Display currency. EUR is the storage base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Currency {
    #[default]
    Eur,
    Usd,
}

impl Currency {
    /// Convert a base (EUR) amount to this currency's display amount.
    pub fn from_base(&self, amount: f64) -> f64 {
        match self {
            Currency::Eur => amount,
            Currency::Usd => amount * EUR_TO_USD_RATE,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Currency::Eur => Currency::Usd,
            Currency::Usd => Currency::Eur,
        }
    }
}

/// Format a base-currency amount for display.
///
/// At least two and at most four fraction digits, with trailing zeros past
/// the second place trimmed. Both currencies render with a dot decimal.
pub fn format_price(base_amount: f64, currency: Currency) -> String {
    let converted = currency.from_base(base_amount);

    if !converted.is_finite() {
        return format!("{}{}", currency.symbol(), converted);
    }

    let mut amount = format!("{:.4}", converted);
    if let Some(dot) = amount.find('.') {
        // Keep at least two fraction digits.
        while amount.len() - dot > 3 && amount.ends_with('0') {
            amount.pop();
        }
    }

    format!("{}{}", currency.symbol(), amount)
}

/// Format a stored gram weight for display in the given system.
pub fn format_weight(grams: f64, unit_system: UnitSystem) -> String {
    match unit_system {
        UnitSystem::Metric => format!("{:.1}g", grams),
        UnitSystem::Imperial => format!("{:.1} oz", unit_system.from_grams(grams)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_round_trip() {
        let oz = UnitSystem::Imperial.from_grams(100.0);
        let back = UnitSystem::Imperial.to_grams(oz);
        assert!((back - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_metric_passthrough() {
        assert_eq!(UnitSystem::Metric.from_grams(42.0), 42.0);
        assert_eq!(UnitSystem::Metric.to_grams(42.0), 42.0);
    }

    #[test]
    fn test_currency_conversion() {
        assert!((Currency::Usd.from_base(10.0) - 11.0).abs() < 1e-9);
        assert_eq!(Currency::Eur.from_base(10.0), 10.0);
    }

    #[test]
    fn test_format_price_trims_trailing_zeros() {
        assert_eq!(format_price(1.5, Currency::Eur), "€1.50");
        assert_eq!(format_price(0.03, Currency::Eur), "€0.03");
        assert_eq!(format_price(0.0346, Currency::Eur), "€0.0346");
        assert_eq!(format_price(0.034, Currency::Eur), "€0.034");
    }

    #[test]
    fn test_format_price_usd_applies_rate() {
        assert_eq!(format_price(10.0, Currency::Usd), "$11.00");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(100.0, UnitSystem::Metric), "100.0g");
        assert_eq!(format_weight(100.0, UnitSystem::Imperial), "3.5 oz");
    }

    #[test]
    fn test_toggles() {
        assert_eq!(UnitSystem::Metric.toggled(), UnitSystem::Imperial);
        assert_eq!(Currency::Usd.toggled(), Currency::Eur);
    }
}
