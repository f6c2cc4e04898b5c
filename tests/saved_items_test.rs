use macro_price_calc_rs::metrics::{sorted, SortKey, SortOrder};
use macro_price_calc_rs::state::{Field, FormState, SavedItems};
use macro_price_calc_rs::units::UnitSystem;

fn filled_form() -> FormState {
    let mut form = FormState::new();
    let first = form.items()[0].id;
    form.update_field(first, Field::Name, "Chicken Breast");
    form.update_field(first, Field::Price, "3");
    form.update_weight(first, "500", UnitSystem::Metric);
    form.update_field(first, Field::Protein, "100");
    form.update_field(first, Field::Carbs, "50");
    form.update_field(first, Field::Fats, "10");

    let second = form.add_item();
    form.update_field(second, Field::Name, "Rice");
    form.update_field(second, Field::Price, "1");
    form.update_field(second, Field::Carbs, "75");

    // An incomplete row that must never be committed.
    form.add_item();

    form
}

#[test]
fn test_commit_takes_only_valid_rows() {
    let mut saved = SavedItems::new();
    let form = filled_form();

    let added = saved.commit(form.items());
    assert_eq!(added, 2);
    assert_eq!(saved.len(), 2);

    let names: Vec<&str> = saved.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Chicken Breast", "Rice"]);
}

#[test]
fn test_later_edits_do_not_touch_snapshots() {
    let mut saved = SavedItems::new();
    let mut form = filled_form();
    saved.commit(form.items());

    let first = form.items()[0].id;
    form.update_field(first, Field::Price, "99");

    assert!((saved.items()[0].price - 3.0).abs() < 1e-9);
}

#[test]
fn test_sorting_is_a_view_over_the_store() {
    let mut saved = SavedItems::new();
    saved.commit(filled_form().items());

    let by_price_desc = sorted(saved.items(), SortKey::Price, SortOrder::Descending);
    assert_eq!(by_price_desc[0].name, "Chicken Breast");

    // The underlying store keeps insertion order.
    assert_eq!(saved.items()[0].name, "Chicken Breast");
    assert_eq!(saved.items()[1].name, "Rice");

    let by_name = sorted(saved.items(), SortKey::Name, SortOrder::Ascending);
    assert_eq!(by_name[0].name, "Chicken Breast");
}

#[test]
fn test_protein_sort_places_missing_denominator_last() {
    let mut form = FormState::new();
    let first = form.items()[0].id;
    form.update_field(first, Field::Name, "No Protein");
    form.update_field(first, Field::Price, "10");
    form.update_field(first, Field::Carbs, "5");

    let second = form.add_item();
    form.update_field(second, Field::Name, "Some Protein");
    form.update_field(second, Field::Price, "2");
    form.update_field(second, Field::Protein, "2");

    let mut saved = SavedItems::new();
    saved.commit(form.items());

    // cost 1.0/g beats +infinity ascending
    let asc = sorted(saved.items(), SortKey::Protein, SortOrder::Ascending);
    assert_eq!(asc[0].name, "Some Protein");
    assert_eq!(asc[1].name, "No Protein");

    let desc = sorted(saved.items(), SortKey::Protein, SortOrder::Descending);
    assert_eq!(desc[0].name, "No Protein");
}

#[test]
fn test_remove_addresses_snapshots_by_id() {
    let mut saved = SavedItems::new();
    let form = filled_form();

    // Commit the same rows twice: two snapshots per row, sharing name and
    // price but not ids.
    saved.commit(form.items());
    saved.commit(form.items());
    assert_eq!(saved.len(), 4);

    let target = saved.items()[2].id;
    let removed = saved.remove(target).unwrap();
    assert_eq!(removed.id, target);
    assert_eq!(saved.len(), 3);
    assert!(saved.items().iter().all(|item| item.id != target));

    // Unknown ids are a silent miss.
    assert!(saved.remove(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn test_remove_at_uses_insertion_order() {
    let mut saved = SavedItems::new();
    saved.commit(filled_form().items());

    // Positional removal follows insertion order, never a sorted view.
    let removed = saved.remove_at(0).unwrap();
    assert_eq!(removed.name, "Chicken Breast");
    assert_eq!(saved.items()[0].name, "Rice");
}

#[test]
fn test_clear_all_then_commit_again() {
    let mut saved = SavedItems::new();
    let form = filled_form();

    saved.commit(form.items());
    saved.clear_all();
    assert!(saved.is_empty());

    assert_eq!(saved.commit(form.items()), 2);
}

#[test]
fn test_form_calorie_derivation_after_every_macro_edit() {
    let mut form = FormState::new();
    let id = form.items()[0].id;

    form.update_field(id, Field::Protein, "100");
    assert!((form.get(id).unwrap().calories - 400.0).abs() < 1e-9);

    form.update_field(id, Field::Carbs, "50");
    assert!((form.get(id).unwrap().calories - 600.0).abs() < 1e-9);

    form.update_field(id, Field::Fats, "10");
    assert!((form.get(id).unwrap().calories - 690.0).abs() < 1e-9);
}

#[test]
fn test_form_never_becomes_empty() {
    let mut form = FormState::new();
    let only = form.items()[0].id;
    assert!(!form.remove_item(only));
    assert_eq!(form.len(), 1);
}
