//! 通用 HTTP 服务器
//!
//! 持有路由表和监听地址，各服务在启动监听前注册自己的路由。
//! 路由表独立于监听器构造，可以不起端口直接测试分发。

use axum::handler::Handler;
use axum::routing::{on, MethodFilter};
use axum::Router;
use http::Method;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(Method),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// 路由表
///
/// (method, path) -> handler 的显式注册接口
#[derive(Default)]
pub struct RouteTable {
    router: Router,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// 注册一条路由
    ///
    /// axum 无法路由的方法（如 CONNECT）返回 `ServerError::UnsupportedMethod`
    pub fn register<H, T>(mut self, method: Method, path: &str, handler: H) -> Result<Self, ServerError>
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        let filter = MethodFilter::try_from(method.clone())
            .map_err(|_| ServerError::UnsupportedMethod(method))?;
        self.router = self.router.route(path, on(filter, handler));
        Ok(self)
    }

    /// 转换为 axum Router
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// 通用 HTTP 服务器
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    /// 构造服务器，路由表为空
    ///
    /// 不校验地址格式，非法地址在 `serve` 时才会暴露
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            router: Router::new(),
        }
    }

    /// 合并一个路由表
    ///
    /// 可多次调用，注册会累积
    pub fn add_routes(&mut self, routes: RouteTable) {
        self.router = std::mem::take(&mut self.router).merge(routes.into_router());
    }

    /// 监听地址
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// 当前已累积的路由（不起监听器即可测试分发）
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// 绑定监听器并阻塞服务
    ///
    /// 监听失败（端口被占用、地址非法）不可恢复，直接返回错误，
    /// 由调用方退出进程，不做重试
    pub async fn serve(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(&self.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.addr.clone(),
                source,
            })?;

        info!(addr = %self.addr, "HTTP server listening");

        let app = self.router.layer(TraceLayer::new_for_http());
        axum::serve(listener, app).await?;

        Ok(())
    }
}
