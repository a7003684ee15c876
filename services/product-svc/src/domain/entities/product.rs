//! 商品实体

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 商品
///
/// name 在目录内唯一；stock 不允许为负，扣减由仓储原子完成。
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
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

impl Product {
    pub fn new(
        name: String,
        description: Option<String>,
        price: f64,
        stock: i32,
        requires_prescription: bool,
        image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            stock,
            requires_prescription,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// 应用一次资料更新（不含库存）
    pub fn apply_update(
        &mut self,
        name: String,
        description: Option<String>,
        price: f64,
        image_url: Option<String>,
    ) {
        self.name = name;
        self.description = description;
        self.price = price;
        self.image_url = image_url;
        self.updated_at = Utc::now();
    }
}
