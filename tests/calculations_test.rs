use macro_price_calc_rs::metrics::{analyze, best_value, per_100g, Nutrient, ValueRating};
use macro_price_calc_rs::models::FoodItem;

fn make_item(name: &str, price: f64, weight: f64, p: f64, c: f64, f: f64) -> FoodItem {
    let mut item = FoodItem::new();
    item.name = name.to_string();
    item.price = price;
    item.weight = weight;
    item.protein = p;
    item.carbs = c;
    item.fats = f;
    item.calories = item.derived_calories();
    item
}

#[test]
fn test_no_analysis_without_a_positive_price() {
    assert!(analyze(&[]).is_none());

    let free = vec![make_item("Sample", 0.0, 100.0, 20.0, 20.0, 5.0)];
    assert!(analyze(&free).is_none());
}

#[test]
fn test_chicken_breast_scenario() {
    // price 3, protein 100, carbs 50, fats 10
    let items = vec![make_item("Chicken Breast", 3.0, 500.0, 100.0, 50.0, 10.0)];
    let analysis = analyze(&items).unwrap();

    // calories = 100*4 + 50*4 + 10*9 = 690
    assert!((analysis.totals.calories - 690.0).abs() < 1e-9);

    // perGram.protein = 3/100 = 0.03, which rates "Great"
    assert!((analysis.per_gram.protein - 0.03).abs() < 1e-9);
    assert_eq!(
        ValueRating::for_price(analysis.per_gram.protein),
        ValueRating::Great
    );
}

#[test]
fn test_totals_sum_across_items() {
    let items = vec![
        make_item("A", 1.0, 100.0, 10.0, 20.0, 5.0),
        make_item("B", 2.0, 300.0, 30.0, 0.0, 15.0),
    ];
    let analysis = analyze(&items).unwrap();

    assert!((analysis.totals.price - 3.0).abs() < 1e-9);
    assert!((analysis.totals.weight - 400.0).abs() < 1e-9);
    assert!((analysis.totals.protein - 40.0).abs() < 1e-9);
    assert!((analysis.total_macros - 80.0).abs() < 1e-9);
}

#[test]
fn test_per_100g_is_none_without_weight() {
    let items = vec![make_item("Weightless", 2.0, 0.0, 10.0, 10.0, 10.0)];
    let analysis = analyze(&items).unwrap();
    assert!(analysis.per_100g.is_none());

    assert!(per_100g(&items[0]).is_none());
}

#[test]
fn test_per_item_100g_projection() {
    let item = make_item("Oats", 1.5, 1000.0, 130.0, 680.0, 70.0);
    let per = per_100g(&item).unwrap();

    assert!((per.price - 0.15).abs() < 1e-9);
    assert!((per.protein - 13.0).abs() < 1e-9);
    assert!((per.carbs - 68.0).abs() < 1e-9);
}

#[test]
fn test_best_value_minimum_per_gram() {
    // protein 0.03/g, carbs 0.10/g, fats 0.20/g
    let items = vec![make_item("Mix", 3.0, 0.0, 100.0, 30.0, 15.0)];
    let analysis = analyze(&items).unwrap();
    assert_eq!(best_value(&analysis), Some(Nutrient::Protein));
}

#[test]
fn test_best_value_ignores_missing_nutrients() {
    // Zero protein must not win with its 0.0 "price".
    let items = vec![make_item("Jam", 2.0, 0.0, 0.0, 50.0, 1.0)];
    let analysis = analyze(&items).unwrap();
    assert_eq!(best_value(&analysis), Some(Nutrient::Carbs));
}

#[test]
fn test_value_rating_tiers_and_boundaries() {
    assert_eq!(ValueRating::for_price(0.05), ValueRating::Great);
    assert_eq!(ValueRating::for_price(0.25), ValueRating::Good);
    assert_eq!(ValueRating::for_price(0.45), ValueRating::Ok);
    assert_eq!(ValueRating::for_price(0.9), ValueRating::Pricey);

    // Thresholds are inclusive.
    assert_eq!(ValueRating::for_price(0.10), ValueRating::Great);
    assert_eq!(ValueRating::for_price(0.30), ValueRating::Good);
}
