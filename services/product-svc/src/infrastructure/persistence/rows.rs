//! 数据库行映射
//!
//! 列白名单（含 SQL 类型）与行结构体写在一起，新增列时同步维护两处。

use chrono::{DateTime, Utc};
use medikart_adapter_postgres::listing::ListSource;
use medikart_errors::AppError;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::{ChangeType, InventoryLog, Product};

#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub requires_prescription: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListSource for ProductRow {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "uuid"),
        ("name", "text"),
        ("description", "text"),
        ("price", "double precision"),
        ("stock", "integer"),
        ("requires_prescription", "boolean"),
        ("image_url", "text"),
        ("created_at", "timestamptz"),
        ("updated_at", "timestamptz"),
    ];
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            requires_prescription: row.requires_prescription,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct InventoryLogRow {
    pub id: Uuid,
    pub product_id: Uuid,
    pub change_type: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl ListSource for InventoryLogRow {
    const TABLE: &'static str = "inventory_logs";
    const COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "uuid"),
        ("product_id", "uuid"),
        ("change_type", "text"),
        ("quantity", "integer"),
        ("created_at", "timestamptz"),
    ];
}

impl TryFrom<InventoryLogRow> for InventoryLog {
    type Error = AppError;

    fn try_from(row: InventoryLogRow) -> Result<Self, Self::Error> {
        let change_type = ChangeType::parse(&row.change_type).ok_or_else(|| {
            AppError::internal(format!(
                "Unknown change type '{}' in inventory log {}",
                row.change_type, row.id
            ))
        })?;

        Ok(Self {
            id: row.id,
            product_id: row.product_id,
            change_type,
            quantity: row.quantity,
            created_at: row.created_at,
        })
    }
}
