//! Order 服务 API

pub mod grpc;
