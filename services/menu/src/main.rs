//! Menu Service

mod api;

use oms_bootstrap::{init_runtime, HttpServer};
use oms_config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化运行时
    init_runtime(&config);

    info!("Starting Menu Service");

    // 注册路由并启动服务器
    let mut server = HttpServer::new(config.server.addr());
    server.add_routes(api::menu_routes()?);

    server.serve().await?;

    Ok(())
}
