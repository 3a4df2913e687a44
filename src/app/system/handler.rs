//! 系统处理器：健康检查、使用说明、兜底 404

use axum::{http::header, response::IntoResponse, response::Json};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::core::{error::CoreError, response::ApiResponse};

/// 对外公布的 API 版本
pub const API_VERSION: &str = "1.0.0";

const USAGE_BANNER: &str = "Welcome to the User API server\n\
Available endpoints:\n\
GET /health - Health check\n\
GET /users - Get all users\n\
GET /user?id=1 - Get user by ID\n\
POST /user/create - Create new user\n";

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub timestamp: String,
    pub version: &'static str,
}

pub async fn health_check() -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::success(
        "Server is running",
        HealthData {
            timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            version: API_VERSION,
        },
    ))
}

/// 根路径纯文本使用说明
pub async fn usage() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        USAGE_BANNER,
    )
}

pub async fn not_found() -> CoreError {
    CoreError::NotFound("404 page not found".to_string())
}
