//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::AppState};

/// 创建应用路由
///
/// 只读商品查询与登录为公开端点；变更类方法（POST/PUT/DELETE）
/// 在方法级应用 JWT 认证中间件。
pub fn create_router(state: Arc<AppState>) -> Router {
    let jwt_auth = axum::middleware::from_fn_with_state(
        state.jwt_service.clone(),
        crate::auth::middleware::jwt_auth_middleware,
    );

    Router::new()
        // 健康检查
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // 认证
        .route("/login", post(handlers::auth::login))
        // 商品：读公开，写需认证
        .route(
            "/products",
            get(handlers::product::list_products).merge(
                post(handlers::product::create_product).route_layer(jwt_auth.clone()),
            ),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product).merge(
                put(handlers::product::update_product)
                    .delete(handlers::product::delete_product)
                    .route_layer(jwt_auth),
            ),
        )
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .with_state(state)
}
