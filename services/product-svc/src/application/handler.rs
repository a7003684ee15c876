//! 业务逻辑处理器

use std::sync::Arc;

use medikart_common::PagedResult;
use medikart_errors::{AppError, AppResult};
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::{ChangeType, InventoryLog, Product};
use crate::domain::repositories::{InventoryLogRepository, ProductRepository};

use super::commands::*;
use super::queries::*;

pub struct ServiceHandler {
    product_repo: Arc<dyn ProductRepository>,
    log_repo: Arc<dyn InventoryLogRepository>,
}

impl ServiceHandler {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        log_repo: Arc<dyn InventoryLogRepository>,
    ) -> Self {
        Self {
            product_repo,
            log_repo,
        }
    }

    // ========== 商品 CRUD ==========

    /// 创建商品
    pub async fn create_product(&self, cmd: CreateProductCommand) -> AppResult<Product> {
        info!("Creating product: {}", cmd.name);

        // 1. 校验命令
        cmd.validate()?;

        // 2. 名称唯一性检查
        if self.product_repo.find_by_name(&cmd.name).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Product with name '{}' already exists",
                cmd.name
            )));
        }

        // 3. 创建实体并落库
        let product = Product::new(
            cmd.name,
            cmd.description,
            cmd.price,
            cmd.stock,
            cmd.requires_prescription,
            cmd.image_url,
        );
        self.product_repo.create(&product).await?;

        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// 查询单个商品
    pub async fn get_product(&self, query: GetProductQuery) -> AppResult<Product> {
        self.product_repo
            .find_by_id(query.product_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Product with ID '{}' not found",
                    query.product_id
                ))
            })
    }

    /// 商品列表
    pub async fn list_products(&self, query: ListProductsQuery) -> AppResult<PagedResult<Product>> {
        self.product_repo
            .list(query.filter, query.sort, query.page)
            .await
    }

    /// 更新商品资料（不含库存）
    pub async fn update_product(&self, cmd: UpdateProductCommand) -> AppResult<Product> {
        info!(product_id = %cmd.product_id, "Updating product");

        // 1. 校验命令
        cmd.validate()?;

        // 2. 目标必须存在
        let mut product = self
            .product_repo
            .find_by_id(cmd.product_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Product with ID '{}' not found", cmd.product_id))
            })?;

        // 3. 新名称不得与其他商品冲突
        if let Some(existing) = self.product_repo.find_by_name(&cmd.name).await? {
            if existing.id != cmd.product_id {
                return Err(AppError::conflict(format!(
                    "Product with name '{}' already exists",
                    cmd.name
                )));
            }
        }

        // 4. 应用变更并落库
        product.apply_update(cmd.name, cmd.description, cmd.price, cmd.image_url);
        self.product_repo.update(&product).await?;

        Ok(product)
    }

    /// 删除商品
    pub async fn delete_product(&self, product_id: Uuid) -> AppResult<()> {
        info!(%product_id, "Deleting product");
        self.product_repo.delete(product_id).await
    }

    // ========== 库存 ==========

    /// 调整库存并记录流水
    ///
    /// 调整成功后追加流水；两步不在同一事务中，流水写入失败时
    /// 库存变更不回滚，以错误上抛交由调用方重试。
    pub async fn adjust_stock(&self, cmd: AdjustStockCommand) -> AppResult<i32> {
        let change_type = ChangeType::parse(&cmd.change_type).ok_or_else(|| {
            AppError::validation(format!("Invalid change type '{}'", cmd.change_type))
        })?;

        info!(
            product_id = %cmd.product_id,
            change_type = %change_type,
            quantity = cmd.quantity,
            "Adjusting stock"
        );

        let stock = self
            .product_repo
            .adjust_stock(cmd.product_id, cmd.quantity)
            .await?;

        let log = InventoryLog::new(cmd.product_id, change_type, cmd.quantity);
        self.log_repo.record(&log).await?;

        Ok(stock)
    }

    /// 商品库存流水列表
    pub async fn list_inventory_logs(
        &self,
        query: ListInventoryLogsQuery,
    ) -> AppResult<PagedResult<InventoryLog>> {
        self.log_repo
            .list_for_product(query.product_id, query.filter, query.sort, query.page)
            .await
    }
}
