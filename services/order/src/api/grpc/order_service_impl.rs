//! OrderService gRPC 实现

#[allow(clippy::all)]
mod proto {
    tonic::include_proto!("oms.order.v1");
}

pub use proto::order_service_server::{OrderService, OrderServiceServer};
pub use proto::*;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tonic::{Request, Response, Status};

use crate::service;
use crate::store;

/// OrderService 实现
pub struct OrderServiceImpl {
    service: Arc<service::OrderService>,
}

impl OrderServiceImpl {
    pub fn new(service: Arc<service::OrderService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl OrderService for OrderServiceImpl {
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<CreateOrderResponse>, Status> {
        let req = request.into_inner();
        tracing::info!(
            customer_id = %req.customer_id,
            item_count = req.items.len(),
            "CreateOrder request"
        );

        let items = req
            .items
            .into_iter()
            .map(|item| store::OrderItem {
                item_id: item.item_id,
                quantity: item.quantity,
            })
            .collect();

        let order = self.service.create_order(req.customer_id, items).await?;

        Ok(Response::new(CreateOrderResponse {
            order: Some(to_proto_order(order)),
        }))
    }

    async fn get_order(
        &self,
        request: Request<GetOrderRequest>,
    ) -> Result<Response<GetOrderResponse>, Status> {
        let req = request.into_inner();
        tracing::info!(order_id = %req.id, "GetOrder request");

        let order = self.service.get_order(&req.id).await?;

        Ok(Response::new(GetOrderResponse {
            order: Some(to_proto_order(order)),
        }))
    }
}

fn to_proto_order(order: store::Order) -> Order {
    Order {
        id: order.id.to_string(),
        customer_id: order.customer_id,
        items: order
            .items
            .into_iter()
            .map(|item| OrderItem {
                item_id: item.item_id,
                quantity: item.quantity,
            })
            .collect(),
        status: order.status.as_str().to_string(),
        created_at: Some(to_proto_timestamp(order.created_at)),
    }
}

fn to_proto_timestamp(dt: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}
