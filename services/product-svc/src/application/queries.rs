//! 查询定义

use medikart_common::{Filter, Pagination, SortSpec};
use uuid::Uuid;

pub struct GetProductQuery {
    pub product_id: Uuid,
}

pub struct ListProductsQuery {
    pub filter: Filter,
    pub sort: SortSpec,
    pub page: Pagination,
}

pub struct ListInventoryLogsQuery {
    pub product_id: Uuid,
    pub filter: Filter,
    pub sort: SortSpec,
    pub page: Pagination,
}
