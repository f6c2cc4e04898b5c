use clap::Parser;
use std::path::Path;

use macro_price_calc_rs::cli::{Cli, Command};
use macro_price_calc_rs::error::Result;
use macro_price_calc_rs::interface::{
    display_cost_analysis, display_form, display_saved_items, prompt_edit_field,
    prompt_menu_action, prompt_new_row, prompt_resolve_saved, prompt_select_row, prompt_sort,
    prompt_yes_no, MenuAction,
};
use macro_price_calc_rs::metrics::{analyze, sorted, SortKey, SortOrder};
use macro_price_calc_rs::state::{load_items, FormState, SavedItems};
use macro_price_calc_rs::units::{Currency, UnitSystem};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Session { file } => cmd_session(file.as_deref()),
        Command::Analyze {
            file,
            units,
            currency,
        } => cmd_analyze(&file, units, currency),
        Command::Compare {
            file,
            sort_by,
            order,
            currency,
        } => cmd_compare(&file, sort_by, order, currency),
    }
}

/// Run the interactive form session.
fn cmd_session(file: Option<&str>) -> Result<()> {
    let mut form = match file {
        Some(path) => {
            if !Path::new(path).exists() {
                eprintln!("Item file not found: {}", path);
                return Ok(());
            }
            let items = load_items(path)?;
            println!("Loaded {} items from {}", items.len(), path);
            FormState::from_items(items)
        }
        None => FormState::new(),
    };

    let mut saved = SavedItems::new();
    let mut unit_system = UnitSystem::default();
    let mut currency = Currency::default();
    let mut sort_key = SortKey::default();
    let mut sort_order = SortOrder::default();

    println!("Macronutrient Price Calculator");

    loop {
        let action = prompt_menu_action()?;

        match action {
            MenuAction::ShowForm => display_form(form.items(), unit_system, currency),

            MenuAction::AddItem => {
                let id = form.add_item();
                prompt_new_row(&mut form, id, unit_system, currency)?;
            }

            MenuAction::EditItem => {
                if let Some(id) = prompt_select_row(form.items(), "Edit which item?")? {
                    prompt_edit_field(&mut form, id, unit_system, currency)?;
                }
            }

            MenuAction::RemoveItem => {
                if let Some(id) = prompt_select_row(form.items(), "Remove which item?")? {
                    if !form.remove_item(id) {
                        println!("The last row cannot be removed; clear the form instead.");
                    }
                }
            }

            MenuAction::ShowAnalysis => match analyze(form.items()) {
                Some(analysis) => display_cost_analysis(&analysis, unit_system, currency),
                None => println!("Nothing to analyze yet - enter at least one price."),
            },

            MenuAction::SaveItems => {
                let added = saved.commit(form.items());
                if added == 0 {
                    println!("No rows qualify for saving (need a name, a price, and a nutrient).");
                } else {
                    println!("Saved {} item(s), {} in the list.", added, saved.len());
                }
            }

            MenuAction::ShowSaved => {
                let view = sorted(saved.items(), sort_key, sort_order);
                display_saved_items(&view, sort_key, sort_order, currency);
            }

            MenuAction::SortSaved => {
                let (key, order) = prompt_sort()?;
                sort_key = key;
                sort_order = order;
                let view = sorted(saved.items(), sort_key, sort_order);
                display_saved_items(&view, sort_key, sort_order, currency);
            }

            MenuAction::RemoveSaved => {
                if saved.is_empty() {
                    println!("No saved items yet.");
                } else if let Some(id) = prompt_resolve_saved(saved.items())? {
                    if let Some(item) = saved.remove(id) {
                        println!("Removed '{}'.", item.name);
                    }
                }
            }

            MenuAction::ClearSaved => {
                if !saved.is_empty() && prompt_yes_no("Clear all saved items?", false)? {
                    saved.clear_all();
                    println!("Saved items cleared.");
                }
            }

            MenuAction::ClearForm => {
                if prompt_yes_no("Discard all current edits?", false)? {
                    form.clear();
                }
            }

            MenuAction::ToggleUnits => {
                unit_system = unit_system.toggled();
                println!("Weights now shown in {}.", unit_system.unit_label());
            }

            MenuAction::ToggleCurrency => {
                currency = currency.toggled();
                println!("Prices now shown in {}.", currency.symbol());
            }

            MenuAction::Quit => break,
        }
    }

    Ok(())
}

/// One-shot aggregate analysis of a batch file.
fn cmd_analyze(path: &str, units: UnitSystem, currency: Currency) -> Result<()> {
    if !Path::new(path).exists() {
        eprintln!("Item file not found: {}", path);
        return Ok(());
    }

    let items = load_items(path)?;
    println!("Loaded {} items", items.len());

    match analyze(&items) {
        Some(analysis) => display_cost_analysis(&analysis, units, currency),
        None => println!("Nothing to analyze - the file has no priced items."),
    }

    Ok(())
}

/// One-shot sorted comparison of a batch file's savable rows.
fn cmd_compare(path: &str, sort_by: SortKey, order: SortOrder, currency: Currency) -> Result<()> {
    if !Path::new(path).exists() {
        eprintln!("Item file not found: {}", path);
        return Ok(());
    }

    let items = load_items(path)?;
    let mut saved = SavedItems::new();
    let added = saved.commit(&items);

    if added == 0 {
        println!("No comparable items (need a name, a price, and a nutrient).");
        return Ok(());
    }
    if added < items.len() {
        println!("Skipped {} incomplete item(s).", items.len() - added);
    }

    let view = sorted(saved.items(), sort_by, order);
    display_saved_items(&view, sort_by, order, currency);

    Ok(())
}
