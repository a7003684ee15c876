//! PostgreSQL 仓储实现

use async_trait::async_trait;
use medikart_adapter_postgres::listing::{ListQuery, PgListExecutor};
use medikart_common::{Filter, PagedResult, Pagination, SortSpec};
use medikart_errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{InventoryLog, Product};
use crate::domain::repositories::{InventoryLogRepository, ProductRepository};

use super::rows::{InventoryLogRow, ProductRow};

// ============================================================================
// ProductRepository 实现
// ============================================================================

pub struct PostgresProductRepository {
    pool: PgPool,
    executor: PgListExecutor,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        let executor = PgListExecutor::new(pool.clone());
        Self { pool, executor }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: &Product) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, description, price, stock,
                requires_prescription, image_url, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.requires_prescription)
        .bind(&product.image_url)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create product: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, stock,
                   requires_prescription, image_url, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query product: {}", e)))?;

        Ok(row.map(Product::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, stock,
                   requires_prescription, image_url, created_at, updated_at
            FROM products
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query product: {}", e)))?;

        Ok(row.map(Product::from))
    }

    async fn list(
        &self,
        filter: Filter,
        sort: SortSpec,
        page: Pagination,
    ) -> AppResult<PagedResult<Product>> {
        let rows: PagedResult<ProductRow> = ListQuery::<ProductRow>::new(filter, sort, page)
            .run(&self.executor)
            .await?;

        Ok(rows.map(Product::from))
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                image_url = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update product: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Product with ID '{}' not found",
                product.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete product: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Product with ID '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn adjust_stock(&self, id: Uuid, delta: i32) -> AppResult<i32> {
        // 条件更新保证扣减不越过 0，读-改-写竞态留给数据库裁决
        let stock = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE products
            SET stock = stock + $2, updated_at = NOW()
            WHERE id = $1 AND stock + $2 >= 0
            RETURNING stock
            "#,
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to adjust stock: {}", e)))?;

        match stock {
            Some(stock) => Ok(stock),
            None => {
                if self.find_by_id(id).await?.is_some() {
                    Err(AppError::validation(format!(
                        "Insufficient stock for product '{}'",
                        id
                    )))
                } else {
                    Err(AppError::not_found(format!(
                        "Product with ID '{}' not found",
                        id
                    )))
                }
            }
        }
    }
}

// ============================================================================
// InventoryLogRepository 实现
// ============================================================================

pub struct PostgresInventoryLogRepository {
    pool: PgPool,
    executor: PgListExecutor,
}

impl PostgresInventoryLogRepository {
    pub fn new(pool: PgPool) -> Self {
        let executor = PgListExecutor::new(pool.clone());
        Self { pool, executor }
    }
}

#[async_trait]
impl InventoryLogRepository for PostgresInventoryLogRepository {
    async fn record(&self, log: &InventoryLog) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO inventory_logs (id, product_id, change_type, quantity, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(log.id)
        .bind(log.product_id)
        .bind(log.change_type.as_str())
        .bind(log.quantity)
        .bind(log.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to record inventory log: {}", e)))?;

        Ok(())
    }

    async fn list_for_product(
        &self,
        product_id: Uuid,
        filter: Filter,
        sort: SortSpec,
        page: Pagination,
    ) -> AppResult<PagedResult<InventoryLog>> {
        let rows: PagedResult<InventoryLogRow> =
            ListQuery::<InventoryLogRow>::new(filter, sort, page)
                .with_scope("product_id", product_id.to_string())
                .run(&self.executor)
                .await?;

        let items = rows
            .items
            .into_iter()
            .map(InventoryLog::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PagedResult {
            items,
            total: rows.total,
            page: rows.page,
            limit: rows.limit,
        })
    }
}
