//! 应用层

pub mod system;
pub mod user;

use user::service::UserStore;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStore,
}

impl AppState {
    pub fn new(user_store: UserStore) -> Self {
        Self { user_store }
    }
}
