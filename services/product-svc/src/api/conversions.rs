//! proto 与领域对象的转换

use medikart_common::Filter;

use crate::domain::entities::{InventoryLog, Product};
use crate::{common, product};

pub fn product_to_proto(product: &Product) -> product::v1::Product {
    product::v1::Product {
        id: product.id.to_string(),
        name: product.name.clone(),
        description: product.description.clone().unwrap_or_default(),
        price: product.price,
        stock: product.stock,
        requires_prescription: product.requires_prescription,
        image_url: product.image_url.clone().unwrap_or_default(),
        created_at: product.created_at.to_rfc3339(),
        updated_at: product.updated_at.to_rfc3339(),
    }
}

pub fn log_to_proto(log: &InventoryLog) -> product::v1::InventoryLog {
    product::v1::InventoryLog {
        id: log.id.to_string(),
        product_id: log.product_id.to_string(),
        change_type: log.change_type.as_str().to_string(),
        quantity: log.quantity,
        created_at: log.created_at.to_rfc3339(),
    }
}

/// 缺失的 Filter 字段按零值处理，即"不过滤"
pub fn filter_from_proto(filter: Option<common::v1::Filter>) -> Filter {
    filter
        .map(|f| Filter::new(f.column, f.operator, f.value))
        .unwrap_or_default()
}

/// proto3 的空串映射为领域层的 None
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
