pub mod cli;
pub mod error;
pub mod interface;
pub mod metrics;
pub mod models;
pub mod state;
pub mod units;

pub use error::{CalcError, Result};
pub use models::FoodItem;
