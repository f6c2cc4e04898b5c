use uuid::Uuid;

use crate::models::FoodItem;

/// The committed snapshots, independent of the editable form.
///
/// Saving copies rows out of the form; later edits to the form never touch
/// a snapshot, and snapshots are only ever removed whole.
#[derive(Default)]
pub struct SavedItems {
    items: Vec<FoodItem>,
}

impl SavedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots in insertion order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copy every savable row into the list, preserving the rows' order.
    ///
    /// Returns how many were added; zero leaves the list untouched.
    pub fn commit(&mut self, rows: &[FoodItem]) -> usize {
        let qualifying: Vec<FoodItem> = rows
            .iter()
            .filter(|row| row.is_savable())
            .cloned()
            .collect();

        let added = qualifying.len();
        self.items.extend(qualifying);
        added
    }

    /// Remove the snapshot at a position in insertion order.
    pub fn remove_at(&mut self, index: usize) -> Option<FoodItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove a snapshot by its row id.
    ///
    /// The id is the only removal key the interactive surface uses: two
    /// snapshots sharing name and price can never alias each other.
    pub fn remove(&mut self, id: Uuid) -> Option<FoodItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }
}
