//! product-svc - 商品目录服务

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

// 引入生成的 proto 代码
pub mod common {
    pub mod v1 {
        tonic::include_proto!("common.v1");
    }
}

pub mod product {
    pub mod v1 {
        tonic::include_proto!("product.v1");
    }
}

pub use product::v1 as proto;

pub const FILE_DESCRIPTOR_SET: &[u8] =
    tonic::include_file_descriptor_set!("product_svc_descriptor");
