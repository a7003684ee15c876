mod inventory_log_repository;
mod product_repository;

pub use inventory_log_repository::InventoryLogRepository;
pub use product_repository::ProductRepository;
