use std::collections::HashMap;

use crate::engine::{UnitConverter, normalize_record};
use crate::error::{CostError, Result};
use crate::models::{MenuItemRecord, Recipe, StoreSnapshot};

/// Read-only index over a store snapshot's menu items.
pub struct MenuCatalog {
    records: Vec<MenuItemRecord>,

    /// Id → position in `records`.
    by_id: HashMap<String, usize>,

    /// Lowercase name → position in `records`.
    by_name: HashMap<String, usize>,
}

impl MenuCatalog {
    /// Create a catalog from a snapshot.
    pub fn new(snapshot: StoreSnapshot) -> Self {
        let records = snapshot.menu_items;
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();

        for (i, record) in records.iter().enumerate() {
            if let Some(id) = record.item.id.as_deref().map(str::trim) {
                by_id.insert(id.to_string(), i);
            }
            if let Some(name) = &record.item.name {
                by_name.entry(name.to_lowercase()).or_insert(i);
            }
        }

        Self {
            records,
            by_id,
            by_name,
        }
    }

    /// Find a record by exact id, then by case-insensitive name.
    pub fn get(&self, key: &str) -> Option<&MenuItemRecord> {
        let key = key.trim();
        self.by_id
            .get(key)
            .or_else(|| self.by_name.get(&key.to_lowercase()))
            .map(|&i| &self.records[i])
    }

    /// Normalize one menu item into a recipe.
    pub fn recipe_for(&self, key: &str, converter: &dyn UnitConverter) -> Result<Recipe> {
        let record = self
            .get(key)
            .ok_or_else(|| CostError::MenuItemNotFound(key.to_string()))?;
        normalize_record(record, converter)
    }

    /// Normalize every menu item, in snapshot order.
    ///
    /// Fails on the first malformed record.
    pub fn recipes(&self, converter: &dyn UnitConverter) -> Result<Vec<Recipe>> {
        self.records
            .iter()
            .map(|r| normalize_record(r, converter))
            .collect()
    }

    /// Display names of all menu items, in snapshot order.
    pub fn names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| {
                r.item
                    .name
                    .clone()
                    .or_else(|| r.item.id.clone())
                    .unwrap_or_else(|| "(unnamed)".to_string())
            })
            .collect()
    }

    /// Key usable with `get` for the record at `index`.
    pub fn key_at(&self, index: usize) -> Option<String> {
        self.records
            .get(index)
            .and_then(|r| r.item.id.clone().or_else(|| r.item.name.clone()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
