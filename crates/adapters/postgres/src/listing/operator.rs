//! 过滤操作符表
//!
//! token 到 SQL 片段的固定映射，运行期不可变。

/// 过滤操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    Ilike,
    In,
    Null,
    NotNull,
}

impl FilterOperator {
    /// 解析操作符 token，未知 token 返回 None
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "eq" => Some(Self::Eq),
            "neq" => Some(Self::Neq),
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "like" => Some(Self::Like),
            "ilike" => Some(Self::Ilike),
            "in" => Some(Self::In),
            "null" => Some(Self::Null),
            "notnull" => Some(Self::NotNull),
            _ => None,
        }
    }

    /// 对应的 SQL 片段
    pub fn sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Like => "LIKE",
            Self::Ilike => "ILIKE",
            Self::In => "IN",
            Self::Null => "IS NULL",
            Self::NotNull => "IS NOT NULL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(FilterOperator::parse("eq"), Some(FilterOperator::Eq));
        assert_eq!(FilterOperator::parse("gte"), Some(FilterOperator::Gte));
        assert_eq!(FilterOperator::parse("ilike"), Some(FilterOperator::Ilike));
        assert_eq!(FilterOperator::parse("notnull"), Some(FilterOperator::NotNull));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert_eq!(FilterOperator::parse("between"), None);
        assert_eq!(FilterOperator::parse("EQ"), None);
        assert_eq!(FilterOperator::parse(""), None);
        // SQL 片段不能被当作 token 直接传入
        assert_eq!(FilterOperator::parse("="), None);
        assert_eq!(FilterOperator::parse("; DROP TABLE products"), None);
    }

    #[test]
    fn test_sql_fragments() {
        assert_eq!(FilterOperator::Eq.sql(), "=");
        assert_eq!(FilterOperator::Neq.sql(), "!=");
        assert_eq!(FilterOperator::Null.sql(), "IS NULL");
        assert_eq!(FilterOperator::NotNull.sql(), "IS NOT NULL");
    }
}
