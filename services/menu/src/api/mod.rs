//! Menu 服务路由

use http::Method;
use oms_bootstrap::{RouteTable, ServerError};

/// Menu 服务的路由表
pub fn menu_routes() -> Result<RouteTable, ServerError> {
    RouteTable::new().register(Method::GET, "/health", health)
}

/// 健康检查
async fn health() -> &'static str {
    "Menu service is up!"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_returns_fixed_body() {
        let router = menu_routes().expect("build routes").into_router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Menu service is up!");
    }

    #[tokio::test]
    async fn test_health_rejects_post() {
        let router = menu_routes().expect("build routes").into_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
