//! 核心层：错误处理、响应信封、中间件

pub mod error;
pub mod middleware;
pub mod response;
