//! Order Service

mod api;
mod service;
mod store;

use api::grpc::{create_order_service, OrderServiceServer};
use oms_bootstrap::init_runtime;
use oms_config::AppConfig;
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化运行时
    init_runtime(&config);

    info!("Starting Order Service");

    // 组装 store -> service -> handler
    let order_service = create_order_service().await?;

    let addr = config.server.addr().parse()?;

    info!(%addr, "gRPC server starting");

    // 启动 gRPC 服务器，启动失败直接退出进程
    Server::builder()
        .add_service(OrderServiceServer::new(order_service))
        .serve(addr)
        .await?;

    Ok(())
}
