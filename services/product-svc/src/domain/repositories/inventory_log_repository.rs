//! 库存流水仓储接口

use async_trait::async_trait;
use medikart_common::{Filter, PagedResult, Pagination, SortSpec};
use medikart_errors::AppResult;
use uuid::Uuid;

use crate::domain::entities::InventoryLog;

#[async_trait]
pub trait InventoryLogRepository: Send + Sync {
    /// 追加一条流水，流水只增不改
    async fn record(&self, log: &InventoryLog) -> AppResult<()>;

    /// 列出某商品的流水，过滤/排序/分页语义与商品列表一致
    async fn list_for_product(
        &self,
        product_id: Uuid,
        filter: Filter,
        sort: SortSpec,
        page: Pagination,
    ) -> AppResult<PagedResult<InventoryLog>>;
}
