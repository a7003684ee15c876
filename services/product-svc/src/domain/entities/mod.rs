mod inventory_log;
mod product;

pub use inventory_log::{ChangeType, InventoryLog};
pub use product::Product;
