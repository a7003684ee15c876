mod postgres;
mod rows;

pub use postgres::{PostgresInventoryLogRepository, PostgresProductRepository};
