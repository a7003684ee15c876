//! 列表查询编排
//!
//! 校验 → 生成 count/fetch 两条语句 → 先 count 后取页。

use std::marker::PhantomData;

use medikart_common::{Filter, PagedResult, Pagination, SortSpec};
use medikart_errors::AppResult;

use super::executor::ListExecutor;
use super::filter::build_predicate;
use super::sort::build_order;
use super::ListError;

/// 可列表实体的元数据
///
/// 列白名单来自实体的表结构声明，与行映射结构体写在一起，
/// 进程生命周期内不变，绝不从调用方输入推导。每列同时声明
/// 其 SQL 类型，谓词用它把 text 绑定值 CAST 回列的类型域。
pub trait ListSource {
    /// 表名
    const TABLE: &'static str;
    /// 可用于过滤/排序的列白名单（列名 + SQL 类型），同时也是 SELECT 列表
    const COLUMNS: &'static [(&'static str, &'static str)];
}

/// 生成的两条语句
///
/// count 与 fetch 共享同一谓词和同一组绑定值：二者是同一个过滤
/// 视图的两次查询，保证 total 与翻页枚举到的行集一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStatements {
    pub count_sql: String,
    pub fetch_sql: String,
    pub binds: Vec<String>,
}

/// 针对实体 S 的一次列表查询
pub struct ListQuery<S: ListSource> {
    scope: Option<(&'static str, String)>,
    filter: Filter,
    sort: SortSpec,
    page: Pagination,
    _source: PhantomData<S>,
}

impl<S: ListSource> ListQuery<S> {
    pub fn new(filter: Filter, sort: SortSpec, page: Pagination) -> Self {
        Self {
            scope: None,
            filter,
            sort,
            page,
            _source: PhantomData,
        }
    }

    /// 附加固定作用域条件（如按所属实体收敛）
    ///
    /// 列名由仓储代码给出，不接受调用方输入；值始终作为 `$1` 绑定，
    /// 后续过滤谓词的占位符从 `$2` 开始。绑定值按注册表里该列的
    /// 声明类型 CAST 还原；不在注册表内的列退回文本形态等值比较
    /// （uuid 等列取其规范文本形式，仅对等值语义成立）。
    pub fn with_scope(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.scope = Some((column, value.into()));
        self
    }

    /// 校验输入并生成 count/fetch 语句
    ///
    /// 校验失败即返回，不会产生任何可执行语句。
    pub fn statements(&self) -> Result<ListStatements, ListError> {
        let mut clauses: Vec<String> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some((column, value)) = &self.scope {
            let clause = match S::COLUMNS.iter().find(|(name, _)| name == column) {
                Some((_, ty)) => format!("{} = CAST($1 AS {})", column, ty),
                None => format!("CAST({} AS text) = $1", column),
            };
            clauses.push(clause);
            binds.push(value.clone());
        }

        let predicate = build_predicate(&self.filter, S::COLUMNS, binds.len() + 1)?;
        let order = build_order(&self.sort, S::COLUMNS)?;

        if let Some(predicate) = predicate {
            clauses.push(predicate.clause);
            binds.extend(predicate.binds);
        }

        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM {}{}", S::TABLE, where_clause);

        let select_list = S::COLUMNS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        let mut fetch_sql = format!("SELECT {} FROM {}{}", select_list, S::TABLE, where_clause);
        if let Some(order) = order {
            fetch_sql.push_str(" ORDER BY ");
            fetch_sql.push_str(&order);
        }
        if !self.page.is_unbounded() {
            // limit/offset 是算出来的整数，不是调用方字符串
            fetch_sql.push_str(&format!(
                " LIMIT {} OFFSET {}",
                self.page.limit,
                self.page.offset()
            ));
        }

        Ok(ListStatements {
            count_sql,
            fetch_sql,
            binds,
        })
    }

    /// 执行查询：先 count（过滤后、分页前），再取当前页
    ///
    /// 两条语句顺序执行且不在同一事务中；并发写入下 total 相对
    /// 当前页可能略有滞后，属已知且可接受的竞态。校验错误
    /// （InvalidColumn/InvalidOperator）在任何数据库访问之前返回；
    /// 执行失败以 Database 错误上抛，本层不重试。
    pub async fn run<T, X>(&self, executor: &X) -> AppResult<PagedResult<T>>
    where
        T: Send,
        X: ListExecutor<T>,
    {
        let statements = self.statements()?;

        let total = executor.count(&statements.count_sql, &statements.binds).await?;
        let items = executor.fetch(&statements.fetch_sql, &statements.binds).await?;

        Ok(PagedResult::new(items, total, &self.page))
    }
}
