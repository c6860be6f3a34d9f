use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{MenuItemRecord, StoreSnapshot};

/// Load a store snapshot from a JSON file.
///
/// Deduplicates menu items by id (last occurrence wins). Items without an id
/// are kept so the loader can report them.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<StoreSnapshot> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let snapshot: StoreSnapshot = serde_json::from_str(&content)?;

    let total = snapshot.menu_items.len();
    let menu_items = dedupe(snapshot.menu_items);
    if menu_items.len() < total {
        warn!(
            dropped = total - menu_items.len(),
            "Duplicate menu item ids in snapshot; keeping the last of each"
        );
    }

    info!(path = %path.display(), menu_items = menu_items.len(), "Loaded snapshot");
    Ok(StoreSnapshot { menu_items })
}

/// Save a store snapshot to a JSON file.
pub fn save_snapshot<P: AsRef<Path>>(path: P, snapshot: &StoreSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

fn dedupe(records: Vec<MenuItemRecord>) -> Vec<MenuItemRecord> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<MenuItemRecord> = Vec::with_capacity(records.len());

    for record in records {
        match record.item.id.clone() {
            Some(id) => match position.get(&id) {
                Some(&i) => out[i] = record,
                None => {
                    position.insert(id, out.len());
                    out.push(record);
                }
            },
            None => out.push(record),
        }
    }
    out
}
