use clap::{Parser, Subcommand};

use crate::metrics::sort::{SortKey, SortOrder};
use crate::units::{Currency, UnitSystem};

/// MacroPriceCalc — compare foods by cost per gram of macronutrient.
#[derive(Parser, Debug)]
#[command(name = "macro_price_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive calculator session.
    Session {
        /// Preload the form from a JSON or CSV item file.
        #[arg(short, long)]
        file: Option<String>,
    },

    /// One-shot cost analysis of an item file.
    Analyze {
        /// JSON or CSV item file.
        file: String,

        /// Weight display units.
        #[arg(long, value_enum, default_value = "metric")]
        units: UnitSystem,

        /// Price display currency.
        #[arg(long, value_enum, default_value = "eur")]
        currency: Currency,
    },

    /// Sort and compare the savable rows of an item file.
    Compare {
        /// JSON or CSV item file.
        file: String,

        /// Sort key for the comparison.
        #[arg(long, value_enum, default_value = "name")]
        sort_by: SortKey,

        /// Sort direction.
        #[arg(long, value_enum, default_value = "ascending")]
        order: SortOrder,

        /// Price display currency.
        #[arg(long, value_enum, default_value = "eur")]
        currency: Currency,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Session { file: None }
    }
}
