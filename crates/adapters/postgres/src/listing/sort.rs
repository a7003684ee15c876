//! 排序子句构造

use medikart_common::SortSpec;

use super::ListError;

/// 构造 ORDER BY 片段（不含 "ORDER BY" 关键字）
///
/// - 排序列为空表示不排序，由存储引擎决定返回顺序（通常是插入序，
///   但这是实现定义行为，需要稳定分页的调用方应显式传排序列）
/// - 排序列不在白名单内返回 [`ListError::InvalidColumn`]
/// - 方向大小写不敏感；除 "desc" 外的任何取值静默按升序处理
pub(crate) fn build_order(
    sort: &SortSpec,
    columns: &[(&str, &str)],
) -> Result<Option<String>, ListError> {
    if sort.is_empty() {
        return Ok(None);
    }

    if !columns.iter().any(|(name, _)| *name == sort.column) {
        return Err(ListError::InvalidColumn(sort.column.clone()));
    }

    let direction = if sort.order.eq_ignore_ascii_case("desc") {
        "DESC"
    } else {
        "ASC"
    };

    Ok(Some(format!("{} {}", sort.column, direction)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[(&str, &str)] = &[
        ("name", "text"),
        ("price", "double precision"),
        ("stock", "integer"),
    ];

    #[test]
    fn test_empty_sort_is_noop() {
        assert_eq!(build_order(&SortSpec::default(), COLUMNS).unwrap(), None);
    }

    #[test]
    fn test_asc_and_desc() {
        let order = build_order(&SortSpec::new("price", "asc"), COLUMNS).unwrap();
        assert_eq!(order, Some("price ASC".to_string()));

        let order = build_order(&SortSpec::new("price", "DESC"), COLUMNS).unwrap();
        assert_eq!(order, Some("price DESC".to_string()));
    }

    #[test]
    fn test_garbage_direction_defaults_to_asc() {
        let order = build_order(&SortSpec::new("name", "BOGUS"), COLUMNS).unwrap();
        assert_eq!(order, Some("name ASC".to_string()));

        let order = build_order(&SortSpec::new("name", ""), COLUMNS).unwrap();
        assert_eq!(order, Some("name ASC".to_string()));
    }

    #[test]
    fn test_rejects_column_outside_allowlist() {
        let err = build_order(&SortSpec::new("secret", "asc"), COLUMNS).unwrap_err();
        assert_eq!(err, ListError::InvalidColumn("secret".to_string()));
    }

    #[test]
    fn test_direction_cannot_inject() {
        // 方向永远只会是 ASC 或 DESC 两个固定片段
        let order = build_order(&SortSpec::new("name", "asc; DROP TABLE"), COLUMNS).unwrap();
        assert_eq!(order, Some("name ASC".to_string()));
    }
}
