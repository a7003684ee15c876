//! 查询执行能力
//!
//! 引擎不直接依赖具体连接池，通过 [`ListExecutor`] 执行 count 与
//! fetch，超时/取消语义由执行方自身的配置决定。

use async_trait::async_trait;
use medikart_errors::{AppError, AppResult};
use sqlx::PgPool;
use sqlx::postgres::PgRow;

/// 列表查询的执行接口
///
/// `binds` 中的值与 SQL 里的 `$1..$n` 占位符一一对应。
#[async_trait]
pub trait ListExecutor<T>: Send + Sync {
    /// 统计满足谓词的行数
    async fn count(&self, sql: &str, binds: &[String]) -> AppResult<i64>;
    /// 取回满足谓词的行（含排序与分页）
    async fn fetch(&self, sql: &str, binds: &[String]) -> AppResult<Vec<T>>;
}

/// 基于 PgPool 的执行器
pub struct PgListExecutor {
    pool: PgPool,
}

impl PgListExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<T> ListExecutor<T> for PgListExecutor
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    async fn count(&self, sql: &str, binds: &[String]) -> AppResult<i64> {
        let mut query = sqlx::query_scalar::<_, i64>(sql);
        for value in binds {
            query = query.bind(value.as_str());
        }
        query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("List count query failed: {}", e)))
    }

    async fn fetch(&self, sql: &str, binds: &[String]) -> AppResult<Vec<T>> {
        let mut query = sqlx::query_as::<_, T>(sql);
        for value in binds {
            query = query.bind(value.as_str());
        }
        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("List fetch query failed: {}", e)))
    }
}
