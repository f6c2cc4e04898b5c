use crate::metrics::calculations::{best_value, CostAnalysis, Nutrient};
use crate::metrics::rating::ValueRating;
use crate::metrics::sort::{SortKey, SortOrder};
use crate::models::FoodItem;
use crate::units::{format_price, format_weight, Currency, UnitSystem};

/// Display the editable form rows.
pub fn display_form(items: &[FoodItem], unit_system: UnitSystem, currency: Currency) {
    println!();
    println!("=== Food Items ({}) ===", items.len());
    println!();

    let max_name_len = items
        .iter()
        .map(|item| display_name(item).len())
        .max()
        .unwrap_or(10);

    for (i, item) in items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>8} | {:>9} | P:{:.1} C:{:.1} F:{:.1} | {:.0} kcal",
            i + 1,
            display_name(item),
            format_price(item.price, currency),
            format_weight(item.weight, unit_system),
            item.protein,
            item.carbs,
            item.fats,
            item.calories,
            width = max_name_len
        );
    }

    println!();
}

/// Display the aggregate cost analysis with ratings and the best-value tag.
pub fn display_cost_analysis(analysis: &CostAnalysis, unit_system: UnitSystem, currency: Currency) {
    let best = best_value(analysis);

    println!();
    println!("=== Cost Analysis ===");
    println!();
    println!("Cost per Nutrient");

    let nutrient_rows = [
        (Nutrient::Protein, analysis.totals.protein, analysis.per_gram.protein),
        (Nutrient::Carbs, analysis.totals.carbs, analysis.per_gram.carbs),
        (Nutrient::Fats, analysis.totals.fats, analysis.per_gram.fats),
    ];

    for (nutrient, total, per_gram) in nutrient_rows {
        if total <= 0.0 {
            continue;
        }

        let tag = if best == Some(nutrient) {
            "  [Best Value]"
        } else {
            ""
        };

        println!(
            "  {:<13} ({:.1}g) - {}/g ({}){}",
            nutrient.label(),
            total,
            format_price(per_gram, currency),
            ValueRating::for_price(per_gram),
            tag
        );
    }

    if analysis.totals.calories > 0.0 {
        println!(
            "  {:<13} ({:.0} kcal) - {}/kcal",
            "Energy",
            analysis.totals.calories,
            format_price(analysis.per_calorie, currency)
        );
    }

    if let Some(per) = &analysis.per_100g {
        println!();
        println!("Per 100g");
        println!(
            "  {} | P:{:.1}g C:{:.1}g F:{:.1}g | {:.0} kcal",
            format_price(per.price, currency),
            per.protein,
            per.carbs,
            per.fats,
            per.calories
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total price: {}", format_price(analysis.totals.price, currency));
    println!(
        "Total weight: {}",
        format_weight(analysis.totals.weight, unit_system)
    );
    println!("Total macros: {:.1}g", analysis.total_macros);
    println!();
}

/// Display the saved items in their current sorted view.
pub fn display_saved_items(
    sorted_view: &[FoodItem],
    key: SortKey,
    order: SortOrder,
    currency: Currency,
) {
    if sorted_view.is_empty() {
        println!("No saved items yet.");
        return;
    }

    let direction = match order {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    };

    println!();
    println!("=== Saved Items ({}) ===", sorted_view.len());
    println!("Sorted by: {} ({})", key.label(), direction);
    println!();

    for item in sorted_view {
        let per_100g = crate::metrics::per_100g(item)
            .map(|per| format!(" ({}/100g)", format_price(per.price, currency)))
            .unwrap_or_default();

        println!(
            "{} - {}{}",
            display_name(item),
            format_price(item.price, currency),
            per_100g
        );

        let mut parts = Vec::new();
        for (label, grams) in [
            ("Proteins", item.protein),
            ("Carbs", item.carbs),
            ("Fats", item.fats),
            ("Total", item.macro_sum()),
        ] {
            if grams > 0.0 {
                let unit_price = item.price / grams;
                parts.push(format!(
                    "{}: {}/g ({})",
                    label,
                    format_price(unit_price, currency),
                    ValueRating::for_price(unit_price)
                ));
            }
        }

        if !parts.is_empty() {
            println!("  {}", parts.join(" | "));
        }
        if item.calories > 0.0 {
            println!("  {:.1} kcal", item.calories);
        }
        println!();
    }
}

fn display_name(item: &FoodItem) -> &str {
    if item.name.is_empty() {
        "(unnamed)"
    } else {
        &item.name
    }
}
