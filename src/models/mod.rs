pub mod breakdown;
pub mod ingredient;
pub mod recipe;
pub mod record;

pub use breakdown::{ComponentCost, CostBreakdown, LineCost, MissingPrice};
pub use ingredient::{CostBasis, Ingredient, RecipeLine};
pub use recipe::{BucketKey, Component, Recipe, RecipeBody};
pub use record::{
    MenuItemRecord, RawComponent, RawComponentIngredient, RawIngredient, RawMenuItem,
    RawRecipeLine, StoreSnapshot,
};
