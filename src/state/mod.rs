mod form;
mod persistence;
mod saved;

pub use form::{Field, FormState};
pub use persistence::load_items;
pub use saved::SavedItems;
