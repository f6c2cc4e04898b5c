use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;
use uuid::Uuid;

use crate::error::Result;
use crate::models::FoodItem;
use crate::metrics::sort::{SortKey, SortOrder};
use crate::state::{Field, FormState};
use crate::units::{Currency, UnitSystem};

/// One action from the session main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowForm,
    AddItem,
    EditItem,
    RemoveItem,
    ShowAnalysis,
    SaveItems,
    ShowSaved,
    SortSaved,
    RemoveSaved,
    ClearSaved,
    ClearForm,
    ToggleUnits,
    ToggleCurrency,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 14] = [
        MenuAction::ShowForm,
        MenuAction::AddItem,
        MenuAction::EditItem,
        MenuAction::RemoveItem,
        MenuAction::ShowAnalysis,
        MenuAction::SaveItems,
        MenuAction::ShowSaved,
        MenuAction::SortSaved,
        MenuAction::RemoveSaved,
        MenuAction::ClearSaved,
        MenuAction::ClearForm,
        MenuAction::ToggleUnits,
        MenuAction::ToggleCurrency,
        MenuAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::ShowForm => "Show current items",
            MenuAction::AddItem => "Add item",
            MenuAction::EditItem => "Edit item",
            MenuAction::RemoveItem => "Remove item",
            MenuAction::ShowAnalysis => "Show cost analysis",
            MenuAction::SaveItems => "Save items",
            MenuAction::ShowSaved => "Show saved items",
            MenuAction::SortSaved => "Change saved-items sort",
            MenuAction::RemoveSaved => "Remove a saved item",
            MenuAction::ClearSaved => "Clear all saved items",
            MenuAction::ClearForm => "Clear the form",
            MenuAction::ToggleUnits => "Switch units (metric/imperial)",
            MenuAction::ToggleCurrency => "Switch currency (EUR/USD)",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Show the main menu and return the chosen action.
pub fn prompt_menu_action() -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL[selection])
}

fn prompt_raw(label: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

/// Fill in a freshly added row field by field.
///
/// Raw strings go straight into the form, which parses tolerantly; calories
/// come from the macro derivation, so they are not asked for here.
pub fn prompt_new_row(
    form: &mut FormState,
    id: Uuid,
    unit_system: UnitSystem,
    currency: Currency,
) -> Result<()> {
    let name = prompt_raw("Name")?;
    form.update_field(id, Field::Name, &name);

    let price = prompt_raw(&format!("Price ({})", currency.symbol()))?;
    form.update_field(id, Field::Price, &price);

    let weight = prompt_raw(unit_system.weight_label())?;
    form.update_weight(id, &weight, unit_system);

    let protein = prompt_raw("Proteins (g)")?;
    form.update_field(id, Field::Protein, &protein);

    let carbs = prompt_raw("Carbohydrates (g)")?;
    form.update_field(id, Field::Carbs, &carbs);

    let fats = prompt_raw("Fats (g)")?;
    form.update_field(id, Field::Fats, &fats);

    if let Some(item) = form.get(id) {
        println!("Calories: {:.0} kcal", item.calories);
    }

    Ok(())
}

/// Select one of the form's rows; `None` when cancelled.
pub fn prompt_select_row(items: &[FoodItem], prompt: &str) -> Result<Option<Uuid>> {
    let mut labels: Vec<String> = items
        .iter()
        .map(|item| {
            if item.name.is_empty() {
                "(unnamed)".to_string()
            } else {
                item.name.clone()
            }
        })
        .collect();
    labels.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(items.get(selection).map(|item| item.id))
}

/// Pick a field and enter its new value for an existing row.
pub fn prompt_edit_field(
    form: &mut FormState,
    id: Uuid,
    unit_system: UnitSystem,
    currency: Currency,
) -> Result<()> {
    let labels: Vec<String> = Field::ALL
        .iter()
        .map(|field| match field {
            Field::Price => format!("Price ({})", currency.symbol()),
            Field::Weight => unit_system.weight_label().to_string(),
            other => other.label().to_string(),
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Which field?")
        .items(&labels)
        .default(0)
        .interact()?;
    let field = Field::ALL[selection];

    let raw = prompt_raw(&labels[selection])?;
    match field {
        Field::Weight => form.update_weight(id, &raw, unit_system),
        other => form.update_field(id, other, &raw),
    }

    if let Some(item) = form.get(id) {
        println!("Calories: {:.0} kcal", item.calories);
    }

    Ok(())
}

/// Choose a sort key and direction for the saved-items view.
pub fn prompt_sort() -> Result<(SortKey, SortOrder)> {
    const KEYS: [SortKey; 6] = [
        SortKey::Name,
        SortKey::Price,
        SortKey::Protein,
        SortKey::Carbs,
        SortKey::Fats,
        SortKey::Total,
    ];

    let key_labels: Vec<&str> = KEYS.iter().map(|k| k.label()).collect();
    let key_selection = Select::new()
        .with_prompt("Sort by")
        .items(&key_labels)
        .default(0)
        .interact()?;

    let order_selection = Select::new()
        .with_prompt("Direction")
        .items(&["Ascending", "Descending"])
        .default(0)
        .interact()?;

    let order = if order_selection == 0 {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };

    Ok((KEYS[key_selection], order))
}

/// Resolve a typed name against the saved items, fuzzily.
///
/// Exact match wins; otherwise jaro-winkler candidates above 0.7 are
/// offered for confirmation or selection. `None` when nothing matched or
/// the user backed out.
pub fn prompt_resolve_saved(saved: &[FoodItem]) -> Result<Option<Uuid>> {
    let input = prompt_raw("Which item? (name, empty to cancel)")?;
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Try exact match first (case-insensitive)
    let exact = saved
        .iter()
        .find(|item| item.name.to_lowercase() == input.to_lowercase());
    if let Some(item) = exact {
        return Ok(Some(item.id));
    }

    // Fuzzy candidates
    let mut candidates: Vec<(&FoodItem, f64)> = saved
        .iter()
        .map(|item| {
            (
                item,
                jaro_winkler(&item.name.to_lowercase(), &input.to_lowercase()),
            )
        })
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No saved item matches '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let item = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(item.id));
    }

    // Multiple matches - let the user pick
    let shortlist: Vec<&FoodItem> = candidates.iter().take(5).map(|(item, _)| *item).collect();
    let mut options: Vec<String> = shortlist.iter().map(|item| item.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(shortlist.get(selection).map(|item| item.id))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
