//! 用户管理

pub mod handler;
pub mod model;
pub mod service;
