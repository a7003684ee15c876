//! medikart-common - 跨服务共享的基础类型

pub mod retry;
pub mod types;

pub use retry::{RetryConfig, is_retryable_error, with_retry};
pub use types::*;
