//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use medikart_config::AppConfig;
use medikart_errors::AppResult;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info};

use crate::health::{HealthChecker, HealthServer};
use crate::infrastructure::Infrastructure;
use crate::metrics::{MetricsRecorder, spawn_pool_collector};
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 gRPC 服务
///
/// 这是所有微服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 创建基础设施资源（数据库连接池，带重试）
/// 4. 启动健康检查 HTTP 服务器（gRPC 端口 + 1000）
/// 5. 启动连接池 metrics 采集器
/// 6. 调用用户提供的闭包构建 gRPC 服务
/// 7. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use medikart_bootstrap::run_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |infra, mut server| async move {
///         let service = MyServiceImpl::new(infra.postgres_pool());
///         Ok(server.add_service(MyServiceServer::new(service)))
///     })
///     .await
/// }
/// ```
pub async fn run_server<F, Fut>(
    config_dir: &str,
    service_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure, Server) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = Arc::new(MetricsRecorder::new());

    // 4. 创建基础设施（带重试）
    let infra = Infrastructure::from_config(config.clone()).await?;
    let pool = infra.postgres_pool();

    // 5. 启动连接池 metrics 采集器
    let pool_metrics_handle = spawn_pool_collector(pool.clone(), Duration::from_secs(15));

    // 6. 启动健康检查 HTTP 服务器（gRPC 端口 + 1000）
    let health_port = config.server.port + 1000;
    let health_checker = Arc::new(HealthChecker::new(pool));
    let health_server = HealthServer::new(health_checker, metrics.clone(), health_port);

    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve().await {
            error!("Health server error: {}", e);
        }
    });

    // 7. 构建服务地址
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // 8. 构建 gRPC 服务
    let router = service_builder(infra, Server::builder()).await?;

    info!(%addr, "gRPC server starting");

    // 9. 启动服务器
    router.serve_with_shutdown(addr, shutdown_signal()).await?;

    // 10. 清理
    health_handle.abort();
    pool_metrics_handle.abort();

    info!("Service stopped");

    Ok(())
}
