//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出与连接池采集

use std::time::Duration;

use metrics::gauge;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::debug;

use medikart_adapter_postgres::pool_status;

/// Metrics 记录器
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 创建新的 Metrics 记录器
    ///
    /// 进程内只能安装一次 recorder，由 starter 在启动时调用。
    pub fn new() -> Self {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("Failed to install Prometheus recorder");

        Self { handle }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// 启动连接池 metrics 采集任务
pub fn spawn_pool_collector(pool: PgPool, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let status = pool_status(&pool);
            gauge!("db_pool_connections").set(f64::from(status.size));
            gauge!("db_pool_idle_connections").set(status.idle as f64);
            debug!(size = status.size, idle = status.idle, "Pool metrics sampled");
        }
    })
}
