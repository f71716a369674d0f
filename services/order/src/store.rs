//! 订单存储
//!
//! 引导阶段只有内存实现，持久化存储不在当前范围内

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use oms_errors::{AppError, AppResult};
use tokio::sync::RwLock;
use uuid::Uuid;

/// 订单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

/// 订单行项目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub item_id: String,
    pub quantity: u32,
}

/// 订单
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// 订单存储接口
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(&self, order: Order) -> AppResult<()>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Order>>;
}

/// 内存订单存储
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: Order) -> AppResult<()> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            return Err(AppError::conflict(format!("order {} already exists", order.id)));
        }
        orders.insert(order.id, order);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order {
            id: Uuid::new_v4(),
            customer_id: "customer_001".to_string(),
            items: vec![OrderItem {
                item_id: "item_001".to_string(),
                quantity: 2,
            }],
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = InMemoryOrderStore::new();
        let order = sample_order();
        let id = order.id;

        store.insert(order).await.unwrap();

        let found = store.get(id).await.unwrap().expect("order exists");
        assert_eq!(found.id, id);
        assert_eq!(found.customer_id, "customer_001");
        assert_eq!(found.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = InMemoryOrderStore::new();
        let found = store.get(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let store = InMemoryOrderStore::new();
        let order = sample_order();

        store.insert(order.clone()).await.unwrap();
        let result = store.insert(order).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
