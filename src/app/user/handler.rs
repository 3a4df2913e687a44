//! 用户处理器

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode},
    response::Json,
};
use tracing::info;

use super::model::{CreateUserRequest, User};
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

pub async fn get_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::success(
        "Users retrieved successfully",
        state.user_store.list(),
    ))
}

/// 通过查询参数 `id` 获取用户，重复参数取第一个
pub async fn get_user(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<ApiResponse<User>>, CoreError> {
    let id = query
        .and_then(|Query(params)| params.into_iter().find(|(key, _)| key == "id"))
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| CoreError::BadRequest("User ID is required".to_string()))?;

    let user = state.user_store.get(&id)?;
    Ok(Json(ApiResponse::success("User found", user)))
}

/// 创建用户，仅接受 POST；不检查 Content-Type
pub async fn create_user(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<User>>), CoreError> {
    if method != Method::POST {
        return Err(CoreError::MethodNotAllowed);
    }

    let request = CreateUserRequest::from_json(&body)
        .map_err(|_| CoreError::BadRequest("Invalid JSON".to_string()))?;

    let user = state.user_store.create(request);
    info!("已创建用户 id={}，当前共 {} 个用户", user.id, state.user_store.len());

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created successfully", user)),
    ))
}
