//! product-svc - 商品目录服务入口

use std::sync::Arc;

use medikart_bootstrap::{Infrastructure, run_server};
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::info;

use product_svc::FILE_DESCRIPTOR_SET;
use product_svc::api::ProductServiceImpl;
use product_svc::application::ServiceHandler;
use product_svc::infrastructure::persistence::{
    PostgresInventoryLogRepository, PostgresProductRepository,
};
use product_svc::product::v1::product_service_server::ProductServiceServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |infra: Infrastructure, mut server| async move {
        info!("Initializing product-svc...");

        let pool = infra.postgres_pool();
        let product_repo = Arc::new(PostgresProductRepository::new(pool.clone()));
        let log_repo = Arc::new(PostgresInventoryLogRepository::new(pool));
        info!("Repositories initialized");

        let handler = Arc::new(ServiceHandler::new(product_repo, log_repo));
        let service = ProductServiceImpl::new(handler);

        let reflection_service = ReflectionBuilder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()
            .unwrap();

        Ok(server
            .add_service(ProductServiceServer::new(service))
            .add_service(reflection_service))
    })
    .await
}
