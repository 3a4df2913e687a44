//! # 用户数据 HTTP API
//!
//! 基于 Axum 的内存用户服务，分层结构：
//! - `app`: 业务处理器、模型与内存存储
//! - `core`: 错误处理、响应信封、请求日志中间件
//! - `infrastructure`: 配置与日志初始化
//! - `router`: 路由注册

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use app::{user::service::UserStore, AppState};
pub use router::create_router;
