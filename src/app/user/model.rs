//! 用户数据模型

use serde::{de, Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub role: String,
    pub created_at: String,
}

/// 创建用户请求
///
/// 所有字段可缺省，缺省值为空字符串或 0。`id` 只做类型检查，之后由存储重新分配；
/// 未知字段会被忽略。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub role: String,
    pub created_at: String,
}

const FIELDS: [&str; 6] = ["id", "name", "email", "age", "role", "created_at"];

impl CreateUserRequest {
    /// 从请求体解析
    ///
    /// 只读取第一个 JSON 值，其后的内容忽略；字段名不区分大小写，同名字段后者覆盖前者；
    /// 值为 `null` 的字段与顶层 `null` 都按缺省处理。
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
            .unwrap_or_else(|| Err(de::Error::custom("empty request body")))?;

        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            other => {
                return Err(de::Error::custom(format!(
                    "expected a JSON object, found {}",
                    other
                )))
            }
        };

        let mut fields = Map::new();
        for (key, value) in object {
            if value.is_null() {
                continue;
            }
            let folded = key.to_lowercase();
            if let Some(field) = FIELDS.iter().find(|field| **field == folded) {
                fields.insert(field.to_string(), value);
            }
        }

        serde_json::from_value(Value::Object(fields))
    }
}
