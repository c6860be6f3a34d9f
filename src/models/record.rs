//! Raw records as they come out of the data store.
//!
//! Every field is optional here; the loader decides what is required.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIngredient {
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub last_price: Option<f64>,

    #[serde(default)]
    pub last_ordered_at: Option<String>,
}

/// Link between a component and an ingredient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawComponentIngredient {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub ingredient: Option<RawIngredient>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawComponent {
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    /// Cost cached by the store. Informational; the engine recomputes it.
    #[serde(default)]
    pub cost: Option<f64>,

    #[serde(default)]
    pub ingredients: Vec<RawComponentIngredient>,
}

/// Legacy flat recipe line, used when a menu item has no components.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecipeLine {
    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub ingredient: Option<RawIngredient>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMenuItem {
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,
}

/// A menu item together with both of its possible recipe shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemRecord {
    #[serde(flatten)]
    pub item: RawMenuItem,

    #[serde(default)]
    pub components: Vec<RawComponent>,

    #[serde(default)]
    pub ingredients: Vec<RawRecipeLine>,
}

/// A read snapshot of the store's menu data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub menu_items: Vec<MenuItemRecord>,
}
