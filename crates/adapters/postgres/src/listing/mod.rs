//! 通用列表查询引擎
//!
//! 把调用方传入的弱类型 filter/sort/pagination 请求转换成参数化的
//! count + fetch 两条 SQL，供所有需要列表语义的实体复用。
//!
//! 安全约定：进入 SQL 文本的只有列白名单中的列名与其声明的
//! SQL 类型（[`ListSource::COLUMNS`]）、操作符表中的固定片段
//! （[`FilterOperator::sql`]）和仓储代码以常量给出的作用域列名。
//! 调用方提供的值一律走 `$n` 绑定参数，绝不拼接进查询字符串；
//! 绑定值在协议层是 text，占位符按列类型 CAST 还原后参与比较。

mod executor;
mod filter;
mod operator;
mod query;
mod sort;

use medikart_errors::AppError;
use thiserror::Error;

pub use executor::{ListExecutor, PgListExecutor};
pub use operator::FilterOperator;
pub use query::{ListQuery, ListSource, ListStatements};

/// 列表查询的校验错误
///
/// 均属调用方输入错误，不触发任何数据库访问，不重试。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListError {
    /// 过滤或排序引用了白名单之外的列
    #[error("invalid column: {0}")]
    InvalidColumn(String),
    /// 无法识别的过滤操作符 token
    #[error("invalid filter operator: {0}")]
    InvalidOperator(String),
}

impl From<ListError> for AppError {
    fn from(err: ListError) -> Self {
        AppError::validation(err.to_string())
    }
}
