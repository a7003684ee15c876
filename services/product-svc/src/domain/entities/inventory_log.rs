//! 库存流水实体

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 库存变动类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    OrderPlaced,
    OrderCancelled,
    StockAdded,
}

impl ChangeType {
    /// 解析变动类型 token，大小写敏感，未知 token 返回 None
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "order_placed" => Some(Self::OrderPlaced),
            "order_cancelled" => Some(Self::OrderCancelled),
            "stock_added" => Some(Self::StockAdded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderPlaced => "order_placed",
            Self::OrderCancelled => "order_cancelled",
            Self::StockAdded => "stock_added",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 库存流水
///
/// 每次库存调整成功后追加一条，quantity 带符号。
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLog {
    pub id: Uuid,
    pub product_id: Uuid,
    pub change_type: ChangeType,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl InventoryLog {
    pub fn new(product_id: Uuid, change_type: ChangeType, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            change_type,
            quantity,
            created_at: Utc::now(),
        }
    }
}
