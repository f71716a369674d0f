//! gRPC API 实现

mod order_service_impl;

pub use order_service_impl::*;

use std::sync::Arc;

use oms_errors::AppResult;

use crate::service::OrderService;
use crate::store::InMemoryOrderStore;

/// 创建订单服务
///
/// 组装 store -> service -> handler
pub async fn create_order_service() -> AppResult<OrderServiceImpl> {
    let store = Arc::new(InMemoryOrderStore::new());
    let service = Arc::new(OrderService::new(store));
    Ok(OrderServiceImpl::new(service))
}
