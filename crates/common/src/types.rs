//! 通用类型定义

use serde::{Deserialize, Serialize};

/// 列表过滤条件
///
/// 语义上是可选的：零值（三个字段全空）表示不过滤。
/// `column` 必须落在实体的列白名单内，`operator` 必须是已知的
/// 操作符 token，两者都在查询引擎中校验，这里不做任何检查。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub operator: String,
    pub value: String,
}

impl Filter {
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// 是否为零值（即"不过滤"）
    pub fn is_empty(&self) -> bool {
        self.column.is_empty() && self.operator.is_empty() && self.value.is_empty()
    }
}

/// 排序条件
///
/// `column` 为空表示不排序（结果顺序由存储引擎决定）。
/// `order` 大小写不敏感，除 "desc" 外的任何取值都按升序处理。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub order: String,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: order.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.column.is_empty()
    }
}

/// 分页参数
///
/// `limit <= 0` 是显式的"不分页"模式：返回过滤后的全部行。
/// 其余情况下 `offset = max((page - 1) * limit, 0)`，page 为 0 或
/// 负数时偏移量钳制到 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i32,
    pub limit: i32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl Pagination {
    pub fn new(page: i32, limit: i32) -> Self {
        Self { page, limit }
    }

    /// 不分页：返回全部匹配行
    pub fn unbounded() -> Self {
        Self { page: 1, limit: 0 }
    }

    pub fn is_unbounded(&self) -> bool {
        self.limit <= 0
    }

    /// 计算行偏移量（不分页模式下恒为 0）
    pub fn offset(&self) -> i64 {
        if self.is_unbounded() {
            return 0;
        }
        (i64::from(self.page) - 1).max(0) * i64::from(self.limit)
    }
}

/// 分页结果
///
/// `total` 是过滤后、分页前的总行数；`items` 是过滤、排序、
/// 分页共同作用后的当前页。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i32,
    pub limit: i32,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: i64, pagination: &Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            limit: pagination.limit,
        }
    }

    pub fn total_pages(&self) -> i32 {
        if self.limit <= 0 {
            return 1;
        }
        ((self.total as f64) / (self.limit as f64)).ceil() as i32
    }

    /// 逐项转换，分页元数据保持不变
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_zero_value() {
        assert!(Filter::default().is_empty());
        assert!(!Filter::new("price", "gte", "10").is_empty());
    }

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_pagination_clamps_low_page() {
        // page = 0 或负数时偏移量不得为负
        assert_eq!(Pagination::new(0, 10).offset(), 0);
        assert_eq!(Pagination::new(-5, 10).offset(), 0);
    }

    #[test]
    fn test_pagination_unbounded() {
        let p = Pagination::unbounded();
        assert!(p.is_unbounded());
        assert_eq!(p.offset(), 0);
        assert!(Pagination::new(2, -1).is_unbounded());
    }

    #[test]
    fn test_paged_result_total_pages() {
        let result = PagedResult::new(vec![1, 2], 21, &Pagination::new(1, 10));
        assert_eq!(result.total_pages(), 3);

        let unbounded = PagedResult::new(vec![1, 2, 3], 3, &Pagination::unbounded());
        assert_eq!(unbounded.total_pages(), 1);
    }

    #[test]
    fn test_paged_result_map_keeps_metadata() {
        let result = PagedResult::new(vec![1, 2], 21, &Pagination::new(2, 10)).map(|n| n * 10);
        assert_eq!(result.items, vec![10, 20]);
        assert_eq!(result.total, 21);
        assert_eq!(result.page, 2);
    }
}
