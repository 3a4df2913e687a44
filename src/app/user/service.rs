//! 用户存储服务

use super::model::{CreateUserRequest, User};
use crate::core::error::CoreError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 进程内用户存储，按插入顺序保存
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带初始示例数据的存储
    pub fn seeded() -> Self {
        let seed = [
            ("John Doe", "john@example.com", 28, "admin", "2024-01-15T10:00:00Z"),
            ("Jane Smith", "jane@example.com", 32, "user", "2024-02-20T14:30:00Z"),
            ("Bob Johnson", "bob@example.com", 25, "moderator", "2024-03-10T09:15:00Z"),
            ("Alice Brown", "alice@example.com", 29, "user", "2024-04-05T16:45:00Z"),
            ("Charlie Wilson", "charlie@example.com", 35, "admin", "2024-05-12T11:20:00Z"),
            ("Diana Lee", "diana@example.com", 27, "user", "2024-06-01T08:30:00Z"),
        ];

        let store = Self::new();
        for (name, email, age, role, created_at) in seed {
            store.create(CreateUserRequest {
                id: None,
                name: name.to_string(),
                email: email.to_string(),
                age,
                role: role.to_string(),
                created_at: created_at.to_string(),
            });
        }
        store
    }

    // 记录均为独立值，锁中毒时直接取回数据
    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<User> {
        self.lock().clone()
    }

    /// 按文本形式的 id 线性查找
    pub fn get(&self, id: &str) -> Result<User, CoreError> {
        self.lock()
            .iter()
            .find(|user| user.id.to_string() == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound("User not found".to_string()))
    }

    /// 新 id 为当前记录数加一，计数与追加在同一次加锁内完成
    pub fn create(&self, request: CreateUserRequest) -> User {
        let mut users = self.lock();
        let user = User {
            id: users.len() as u64 + 1,
            name: request.name,
            email: request.email,
            age: request.age,
            role: request.role,
            created_at: request.created_at,
        };
        users.push(user.clone());
        user
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
