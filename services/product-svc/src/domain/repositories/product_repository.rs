//! 商品仓储接口

use async_trait::async_trait;
use medikart_common::{Filter, PagedResult, Pagination, SortSpec};
use medikart_errors::AppResult;
use uuid::Uuid;

use crate::domain::entities::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> AppResult<()>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>>;

    /// 过滤/排序/分页列表，total 为过滤后分页前的行数
    async fn list(
        &self,
        filter: Filter,
        sort: SortSpec,
        page: Pagination,
    ) -> AppResult<PagedResult<Product>>;

    async fn update(&self, product: &Product) -> AppResult<()>;

    /// 商品不存在时返回 NotFound
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// 原子调整库存，返回调整后的库存量
    ///
    /// 扣减不得使库存为负；违反时返回 Validation，不落库。
    async fn adjust_stock(&self, id: Uuid, delta: i32) -> AppResult<i32>;
}
