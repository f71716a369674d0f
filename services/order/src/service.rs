//! 订单服务层
//!
//! 处于 gRPC handler 和存储之间，负责校验和订单构造

use std::sync::Arc;

use chrono::Utc;
use oms_errors::{AppError, AppResult};
use tracing::info;
use uuid::Uuid;

use crate::store::{Order, OrderItem, OrderStatus, OrderStore};

/// 订单服务
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// 创建订单
    ///
    /// 校验通过后分配订单 ID 并写入存储，新订单状态为 pending
    pub async fn create_order(
        &self,
        customer_id: String,
        items: Vec<OrderItem>,
    ) -> AppResult<Order> {
        if customer_id.is_empty() {
            return Err(AppError::validation("customer_id must not be empty"));
        }
        if items.is_empty() {
            return Err(AppError::validation("order must contain at least one item"));
        }
        if items.iter().any(|item| item.quantity == 0) {
            return Err(AppError::validation("item quantity must be greater than zero"));
        }

        let order = Order {
            id: Uuid::new_v4(),
            customer_id,
            items,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        self.store.insert(order.clone()).await?;

        info!(order_id = %order.id, customer_id = %order.customer_id, "Order created");

        Ok(order)
    }

    /// 查询订单
    pub async fn get_order(&self, id: &str) -> AppResult<Order> {
        let id = Uuid::parse_str(id)
            .map_err(|_| AppError::validation(format!("invalid order id: {id}")))?;

        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("order {id}")))
    }
}
