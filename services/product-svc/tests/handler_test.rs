//! ServiceHandler 业务规则测试，仓储用内存假实现

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use medikart_common::{Filter, PagedResult, Pagination, SortSpec};
use medikart_errors::{AppError, AppResult};
use uuid::Uuid;

use product_svc::application::commands::{
    AdjustStockCommand, CreateProductCommand, UpdateProductCommand,
};
use product_svc::application::queries::{GetProductQuery, ListInventoryLogsQuery, ListProductsQuery};
use product_svc::application::ServiceHandler;
use product_svc::domain::entities::{ChangeType, InventoryLog, Product};
use product_svc::domain::repositories::{InventoryLogRepository, ProductRepository};

#[derive(Default)]
struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> AppResult<()> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn list(
        &self,
        _filter: Filter,
        _sort: SortSpec,
        page: Pagination,
    ) -> AppResult<PagedResult<Product>> {
        let products = self.products.lock().unwrap().clone();
        let total = products.len() as i64;
        Ok(PagedResult::new(products, total, &page))
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "Product with ID '{}' not found",
                product.id
            ))),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(AppError::not_found(format!(
                "Product with ID '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn adjust_stock(&self, id: Uuid, delta: i32) -> AppResult<i32> {
        let mut products = self.products.lock().unwrap();
        let product = products.iter_mut().find(|p| p.id == id).ok_or_else(|| {
            AppError::not_found(format!("Product with ID '{}' not found", id))
        })?;

        if product.stock + delta < 0 {
            return Err(AppError::validation(format!(
                "Insufficient stock for product '{}'",
                id
            )));
        }

        product.stock += delta;
        Ok(product.stock)
    }
}

#[derive(Default)]
struct InMemoryInventoryLogRepository {
    logs: Mutex<Vec<InventoryLog>>,
}

#[async_trait]
impl InventoryLogRepository for InMemoryInventoryLogRepository {
    async fn record(&self, log: &InventoryLog) -> AppResult<()> {
        self.logs.lock().unwrap().push(log.clone());
        Ok(())
    }

    async fn list_for_product(
        &self,
        product_id: Uuid,
        _filter: Filter,
        _sort: SortSpec,
        page: Pagination,
    ) -> AppResult<PagedResult<InventoryLog>> {
        let logs: Vec<InventoryLog> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.product_id == product_id)
            .cloned()
            .collect();
        let total = logs.len() as i64;
        Ok(PagedResult::new(logs, total, &page))
    }
}

fn sample_product(name: &str, stock: i32) -> Product {
    Product::new(
        name.to_string(),
        Some("Pain relief".to_string()),
        9.99,
        stock,
        false,
        None,
    )
}

fn handler_with(
    products: Vec<Product>,
) -> (
    ServiceHandler,
    Arc<InMemoryProductRepository>,
    Arc<InMemoryInventoryLogRepository>,
) {
    let product_repo = Arc::new(InMemoryProductRepository::with_products(products));
    let log_repo = Arc::new(InMemoryInventoryLogRepository::default());
    let handler = ServiceHandler::new(product_repo.clone(), log_repo.clone());
    (handler, product_repo, log_repo)
}

fn valid_create(name: &str) -> CreateProductCommand {
    CreateProductCommand {
        name: name.to_string(),
        description: Some("Pain relief".to_string()),
        price: 9.99,
        stock: 100,
        requires_prescription: false,
        image_url: None,
    }
}

#[tokio::test]
async fn test_create_product_persists_entity() {
    let (handler, product_repo, _) = handler_with(vec![]);

    let product = handler.create_product(valid_create("Aspirin")).await.unwrap();

    assert_eq!(product.name, "Aspirin");
    let stored = product_repo.find_by_id(product.id).await.unwrap();
    assert_eq!(stored, Some(product));
}

#[tokio::test]
async fn test_create_product_rejects_duplicate_name() {
    let (handler, _, _) = handler_with(vec![sample_product("Aspirin", 10)]);

    let err = handler
        .create_product(valid_create("Aspirin"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert!(err.to_string().contains("Aspirin"));
}

#[tokio::test]
async fn test_create_product_validation_precedes_persistence() {
    let (handler, product_repo, _) = handler_with(vec![]);

    let mut cmd = valid_create("");
    cmd.price = -1.0;
    let err = handler.create_product(cmd).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(product_repo.products.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_product_not_found() {
    let (handler, _, _) = handler_with(vec![]);

    let err = handler
        .get_product(GetProductQuery {
            product_id: Uuid::new_v4(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_list_products_returns_page_metadata() {
    let (handler, _, _) = handler_with(vec![
        sample_product("Aspirin", 10),
        sample_product("Ibuprofen", 5),
    ]);

    let result = handler
        .list_products(ListProductsQuery {
            filter: Filter::default(),
            sort: SortSpec::default(),
            page: Pagination::new(1, 20),
        })
        .await
        .unwrap();

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.total, 2);
    assert_eq!(result.page, 1);
    assert_eq!(result.limit, 20);
}

#[tokio::test]
async fn test_update_product_rejects_name_of_other_product() {
    let first = sample_product("Aspirin", 10);
    let second = sample_product("Ibuprofen", 5);
    let second_id = second.id;
    let (handler, _, _) = handler_with(vec![first, second]);

    let err = handler
        .update_product(UpdateProductCommand {
            product_id: second_id,
            name: "Aspirin".to_string(),
            description: Some("Pain relief".to_string()),
            price: 12.0,
            image_url: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_update_product_keeps_own_name() {
    let product = sample_product("Aspirin", 10);
    let id = product.id;
    let (handler, _, _) = handler_with(vec![product]);

    let updated = handler
        .update_product(UpdateProductCommand {
            product_id: id,
            name: "Aspirin".to_string(),
            description: Some("Stronger pain relief".to_string()),
            price: 12.0,
            image_url: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.price, 12.0);
    assert_eq!(updated.stock, 10);
}

#[tokio::test]
async fn test_adjust_stock_records_inventory_log() {
    let product = sample_product("Aspirin", 10);
    let id = product.id;
    let (handler, _, log_repo) = handler_with(vec![product]);

    let stock = handler
        .adjust_stock(AdjustStockCommand {
            product_id: id,
            change_type: "order_placed".to_string(),
            quantity: -3,
        })
        .await
        .unwrap();

    assert_eq!(stock, 7);

    let logs = log_repo.logs.lock().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].product_id, id);
    assert_eq!(logs[0].change_type, ChangeType::OrderPlaced);
    assert_eq!(logs[0].quantity, -3);
}

#[tokio::test]
async fn test_adjust_stock_rejects_unknown_change_type() {
    let product = sample_product("Aspirin", 10);
    let id = product.id;
    let (handler, product_repo, log_repo) = handler_with(vec![product]);

    let err = handler
        .adjust_stock(AdjustStockCommand {
            product_id: id,
            change_type: "restock".to_string(),
            quantity: 5,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    // 库存与流水都不应被触碰
    assert_eq!(product_repo.find_by_id(id).await.unwrap().unwrap().stock, 10);
    assert!(log_repo.logs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_adjust_stock_cannot_go_negative() {
    let product = sample_product("Aspirin", 2);
    let id = product.id;
    let (handler, _, log_repo) = handler_with(vec![product]);

    let err = handler
        .adjust_stock(AdjustStockCommand {
            product_id: id,
            change_type: "order_placed".to_string(),
            quantity: -5,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(log_repo.logs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_product_not_found() {
    let (handler, _, _) = handler_with(vec![]);

    let err = handler.delete_product(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_list_inventory_logs_scopes_to_product() {
    let product = sample_product("Aspirin", 10);
    let id = product.id;
    let (handler, _, log_repo) = handler_with(vec![product]);

    log_repo
        .record(&InventoryLog::new(id, ChangeType::StockAdded, 10))
        .await
        .unwrap();
    log_repo
        .record(&InventoryLog::new(Uuid::new_v4(), ChangeType::StockAdded, 4))
        .await
        .unwrap();

    let result = handler
        .list_inventory_logs(ListInventoryLogsQuery {
            product_id: id,
            filter: Filter::default(),
            sort: SortSpec::default(),
            page: Pagination::new(1, 20),
        })
        .await
        .unwrap();

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].product_id, id);
}
