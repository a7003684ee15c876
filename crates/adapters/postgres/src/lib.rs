//! medikart-adapter-postgres - PostgreSQL 适配器
//!
//! 连接池管理，以及跨实体复用的列表查询引擎（listing 模块）

mod connection;
pub mod listing;

pub use connection::*;
