use crate::metrics::constants::REFERENCE_WEIGHT_GRAMS;
use crate::models::FoodItem;

/// Componentwise sums across a list of items.
#[derive(Debug, Clone, Default)]
pub struct Totals {
    pub price: f64,
    pub weight: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

impl Totals {
    pub fn from_items(items: &[FoodItem]) -> Self {
        items.iter().fold(Totals::default(), |acc, item| Totals {
            price: acc.price + item.price,
            weight: acc.weight + item.weight,
            protein: acc.protein + item.protein,
            carbs: acc.carbs + item.carbs,
            fats: acc.fats + item.fats,
            calories: acc.calories + item.calories,
        })
    }
}

/// Price per gram of each macronutrient.
#[derive(Debug, Clone, Default)]
pub struct PerGram {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Price and nutrients projected onto a 100g basis.
#[derive(Debug, Clone)]
pub struct Per100g {
    pub price: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

/// Aggregate cost breakdown over the full item list.
#[derive(Debug, Clone)]
pub struct CostAnalysis {
    pub totals: Totals,
    pub per_gram: PerGram,
    pub per_calorie: f64,
    pub total_macros: f64,
    pub per_100g: Option<Per100g>,
}

/// Price attributed to one unit of a quantity; zero when the quantity is
/// absent (absence is treated as zero cost attribution, not an error).
#[inline]
fn unit_price(price: f64, quantity: f64) -> f64 {
    if quantity > 0.0 { price / quantity } else { 0.0 }
}

/// Analyze the full item list.
///
/// Returns `None` until the summed price is strictly positive; there is
/// nothing to attribute cost to before that.
pub fn analyze(items: &[FoodItem]) -> Option<CostAnalysis> {
    let totals = Totals::from_items(items);

    if totals.price <= 0.0 {
        return None;
    }

    let per_gram = PerGram {
        protein: unit_price(totals.price, totals.protein),
        carbs: unit_price(totals.price, totals.carbs),
        fats: unit_price(totals.price, totals.fats),
    };
    let per_calorie = unit_price(totals.price, totals.calories);
    let total_macros = totals.protein + totals.carbs + totals.fats;

    let per_100g = if totals.weight > 0.0 {
        let scale = REFERENCE_WEIGHT_GRAMS / totals.weight;
        Some(Per100g {
            price: totals.price * scale,
            protein: totals.protein * scale,
            carbs: totals.carbs * scale,
            fats: totals.fats * scale,
            calories: totals.calories * scale,
        })
    } else {
        None
    };

    Some(CostAnalysis {
        totals,
        per_gram,
        per_calorie,
        total_macros,
        per_100g,
    })
}

/// Per-item 100g projection; `None` when the item has no weight.
pub fn per_100g(item: &FoodItem) -> Option<Per100g> {
    if item.weight <= 0.0 {
        return None;
    }

    let scale = REFERENCE_WEIGHT_GRAMS / item.weight;
    Some(Per100g {
        price: item.price * scale,
        protein: item.protein * scale,
        carbs: item.carbs * scale,
        fats: item.fats * scale,
        calories: item.calories * scale,
    })
}

/// A macronutrient, in its fixed enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Protein,
    Carbs,
    Fats,
}

impl Nutrient {
    pub const ALL: [Nutrient; 3] = [Nutrient::Protein, Nutrient::Carbs, Nutrient::Fats];

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Protein => "Proteins",
            Nutrient::Carbs => "Carbohydrates",
            Nutrient::Fats => "Fats",
        }
    }
}

/// The cheapest macronutrient per gram among those present.
///
/// Ties resolve to the earlier nutrient in the enumeration order.
pub fn best_value(analysis: &CostAnalysis) -> Option<Nutrient> {
    let mut best: Option<(Nutrient, f64)> = None;

    for nutrient in Nutrient::ALL {
        let (total, per_gram) = match nutrient {
            Nutrient::Protein => (analysis.totals.protein, analysis.per_gram.protein),
            Nutrient::Carbs => (analysis.totals.carbs, analysis.per_gram.carbs),
            Nutrient::Fats => (analysis.totals.fats, analysis.per_gram.fats),
        };

        if total <= 0.0 {
            continue;
        }

        match best {
            Some((_, best_price)) if per_gram >= best_price => {}
            _ => best = Some((nutrient, per_gram)),
        }
    }

    best.map(|(nutrient, _)| nutrient)
}
