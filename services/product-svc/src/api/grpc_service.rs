//! gRPC 服务实现
//!
//! 请求解析与 proto 转换在这里完成，业务规则在 ServiceHandler。
//! AppError 经 From 转为对应的 gRPC 状态码。

use std::sync::Arc;

use medikart_common::{Pagination, SortSpec};
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::application::ServiceHandler;
use crate::application::commands::*;
use crate::application::queries::*;
use crate::product::v1::product_service_server::ProductService;
use crate::product::v1::*;

use super::conversions::*;

pub struct ProductServiceImpl {
    handler: Arc<ServiceHandler>,
}

impl ProductServiceImpl {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

fn parse_product_id(raw: &str) -> Result<Uuid, Status> {
    Uuid::parse_str(raw)
        .map_err(|_| Status::invalid_argument(format!("Invalid product ID '{}'", raw)))
}

#[tonic::async_trait]
impl ProductService for ProductServiceImpl {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        let req = request.into_inner();

        let cmd = CreateProductCommand {
            name: req.name,
            description: non_empty(req.description),
            price: req.price,
            stock: req.stock,
            requires_prescription: req.requires_prescription,
            image_url: non_empty(req.image_url),
        };

        let product = self.handler.create_product(cmd).await?;

        Ok(Response::new(CreateProductResponse {
            product: Some(product_to_proto(&product)),
        }))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<GetProductResponse>, Status> {
        let req = request.into_inner();

        let query = GetProductQuery {
            product_id: parse_product_id(&req.product_id)?,
        };
        let product = self.handler.get_product(query).await?;

        Ok(Response::new(GetProductResponse {
            product: Some(product_to_proto(&product)),
        }))
    }

    async fn list_products(
        &self,
        request: Request<ListProductsRequest>,
    ) -> Result<Response<ListProductsResponse>, Status> {
        let req = request.into_inner();

        let query = ListProductsQuery {
            filter: filter_from_proto(req.filter),
            sort: SortSpec::new(req.sort_by, req.sort_order),
            page: Pagination::new(req.page, req.limit),
        };
        let result = self.handler.list_products(query).await?;

        Ok(Response::new(ListProductsResponse {
            products: result.items.iter().map(product_to_proto).collect(),
            total: result.total,
            page: result.page,
            limit: result.limit,
        }))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<UpdateProductResponse>, Status> {
        let req = request.into_inner();

        let cmd = UpdateProductCommand {
            product_id: parse_product_id(&req.product_id)?,
            name: req.name,
            description: non_empty(req.description),
            price: req.price,
            image_url: non_empty(req.image_url),
        };
        let product = self.handler.update_product(cmd).await?;

        Ok(Response::new(UpdateProductResponse {
            product: Some(product_to_proto(&product)),
        }))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductResponse>, Status> {
        let req = request.into_inner();

        let product_id = parse_product_id(&req.product_id)?;
        self.handler.delete_product(product_id).await?;

        Ok(Response::new(DeleteProductResponse {}))
    }

    async fn adjust_stock(
        &self,
        request: Request<AdjustStockRequest>,
    ) -> Result<Response<AdjustStockResponse>, Status> {
        let req = request.into_inner();

        let cmd = AdjustStockCommand {
            product_id: parse_product_id(&req.product_id)?,
            change_type: req.change_type,
            quantity: req.quantity,
        };
        let stock = self.handler.adjust_stock(cmd).await?;

        Ok(Response::new(AdjustStockResponse { stock }))
    }

    async fn list_inventory_logs(
        &self,
        request: Request<ListInventoryLogsRequest>,
    ) -> Result<Response<ListInventoryLogsResponse>, Status> {
        let req = request.into_inner();

        let query = ListInventoryLogsQuery {
            product_id: parse_product_id(&req.product_id)?,
            filter: filter_from_proto(req.filter),
            sort: SortSpec::new(req.sort_by, req.sort_order),
            page: Pagination::new(req.page, req.limit),
        };
        let result = self.handler.list_inventory_logs(query).await?;

        Ok(Response::new(ListInventoryLogsResponse {
            logs: result.items.iter().map(log_to_proto).collect(),
            total: result.total,
            page: result.page,
            limit: result.limit,
        }))
    }
}
