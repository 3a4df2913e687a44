//! 路由注册

use axum::{handler::HandlerWithoutStateExt, middleware, routing::any, Router};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::app::{
    system::handler::{health_check, not_found, usage},
    user::handler::{create_user, get_user, get_users},
    AppState,
};
use crate::core::middleware::request_logging_middleware;

/// 构建完整路由
///
/// 业务路由均为精确匹配且不限制方法，`/user/create` 在处理器内校验 POST。
/// 日志中间件只包裹已匹配的业务路由，`/static` 与兜底 404 不记录；
/// 静态资源缺失时与兜底路由返回相同的 404 文本。
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", any(usage))
        .route("/health", any(health_check))
        .route("/users", any(get_users))
        .route("/user", any(get_user))
        .route("/user/create", any(create_user))
        .route_layer(middleware::from_fn(request_logging_middleware))
        .nest_service(
            "/static",
            ServeDir::new(static_dir.as_ref()).not_found_service(not_found.into_service()),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
