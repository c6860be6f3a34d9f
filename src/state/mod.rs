mod catalog;
mod persistence;

pub use catalog::MenuCatalog;
pub use persistence::{load_snapshot, save_snapshot};
