//! 过滤谓词构造
//!
//! 对单个 Filter 做白名单与操作符校验，产出参数化谓词。

use medikart_common::Filter;

use super::operator::FilterOperator;
use super::ListError;

/// 参数化谓词：SQL 片段 + 按 `$1..$n` 顺序排列的绑定值
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Predicate {
    pub clause: String,
    pub binds: Vec<String>,
}

/// 构造过滤谓词
///
/// - 零值 Filter 表示不过滤，返回 None
/// - 列不在白名单内返回 [`ListError::InvalidColumn`]
/// - 操作符 token 未知返回 [`ListError::InvalidOperator`]
/// - `like`/`ilike` 在绑定前给值两侧补 `%`，调用方的值本身仍走参数
/// - `in` 按 `,` 切分 value，不去空格、不丢弃空段（保持既有行为）
/// - `null`/`notnull` 不产生绑定值
///
/// 绑定值在协议层一律是 text，因此每个占位符都按注册表里该列声明的
/// SQL 类型 CAST 还原，数值/时间列的比较在各自的类型域上进行；
/// `like`/`ilike` 的模式串固定按 text 处理。
///
/// `first_placeholder` 是本谓词第一个绑定值的 `$n` 序号，
/// 前面如有作用域绑定则从其后继续编号。
pub(crate) fn build_predicate(
    filter: &Filter,
    columns: &[(&str, &str)],
    first_placeholder: usize,
) -> Result<Option<Predicate>, ListError> {
    if filter.is_empty() {
        return Ok(None);
    }

    let column_type = columns
        .iter()
        .find(|(name, _)| *name == filter.column)
        .map(|(_, ty)| *ty)
        .ok_or_else(|| ListError::InvalidColumn(filter.column.clone()))?;

    let operator = FilterOperator::parse(&filter.operator)
        .ok_or_else(|| ListError::InvalidOperator(filter.operator.clone()))?;

    let n = first_placeholder;
    let predicate = match operator {
        FilterOperator::Like | FilterOperator::Ilike => Predicate {
            clause: format!("{} {} CAST(${} AS text)", filter.column, operator.sql(), n),
            binds: vec![format!("%{}%", filter.value)],
        },
        FilterOperator::In => {
            let binds: Vec<String> = filter.value.split(',').map(str::to_string).collect();
            let placeholders: Vec<String> = (n..n + binds.len())
                .map(|i| format!("CAST(${} AS {})", i, column_type))
                .collect();
            Predicate {
                clause: format!("{} IN ({})", filter.column, placeholders.join(", ")),
                binds,
            }
        }
        FilterOperator::Null | FilterOperator::NotNull => Predicate {
            clause: format!("{} {}", filter.column, operator.sql()),
            binds: Vec::new(),
        },
        _ => Predicate {
            clause: format!(
                "{} {} CAST(${} AS {})",
                filter.column,
                operator.sql(),
                n,
                column_type
            ),
            binds: vec![filter.value.clone()],
        },
    };

    Ok(Some(predicate))
}
