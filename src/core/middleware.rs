//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// 请求日志中间件
///
/// 处理前记录方法和路径，处理后记录状态码与耗时，不修改响应。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!("Started {} {}", method, path);

    let response = next.run(req).await;

    info!(
        "Completed {} {} - {} in {:?}",
        method,
        path,
        response.status(),
        start.elapsed()
    );

    response
}
