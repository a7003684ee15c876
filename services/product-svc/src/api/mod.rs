mod conversions;
mod grpc_service;

pub use grpc_service::ProductServiceImpl;
