//! medikart-bootstrap - 统一服务启动骨架
//!
//! 所有服务复用的启动逻辑

mod health;
mod infrastructure;
mod metrics;
mod runtime;
mod starter;

pub use health::{ComponentHealth, HealthChecker, HealthServer, HealthStatus};
pub use infrastructure::Infrastructure;
pub use metrics::{MetricsRecorder, spawn_pool_collector};
pub use runtime::{init_runtime, shutdown_signal};
pub use starter::run_server;
