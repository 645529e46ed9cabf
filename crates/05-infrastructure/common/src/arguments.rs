//! 具名参数集合

use crate::errors::{ConfigError, ConfigResult};
use crate::value::Value;

/// 调用方提供的具名参数
///
/// 保持插入顺序：按类型扫描匹配时，先插入的值优先。
/// 名称区分大小写，按精确匹配查找。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedArguments {
    entries: Vec<(String, Value)>,
}

impl NamedArguments {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个参数（链式）
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// 插入参数，同名参数原位替换并返回旧值
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// 按插入顺序遍历值
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 从 JSON 对象构建
    ///
    /// 仅支持标量与数组；嵌套对象无法映射为运行时值。
    pub fn from_json(json: serde_json::Value) -> ConfigResult<Self> {
        let map = match json {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(ConfigError::TypeConversionError {
                    message: format!("具名参数必须是 JSON 对象, 实际为: {other}"),
                })
            }
        };

        map.into_iter()
            .map(|(name, value)| json_to_value(value).map(|value| (name, value)))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for NamedArguments
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Self::new();
        for (name, value) in iter {
            arguments.insert(name, value);
        }
        arguments
    }
}

fn json_to_value(json: serde_json::Value) -> ConfigResult<Value> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(value) => Value::Bool(value),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(value) => Value::Int(value),
            None => Value::Float(number.as_f64().ok_or_else(|| {
                ConfigError::TypeConversionError {
                    message: format!("无法表示的数值: {number}"),
                }
            })?),
        },
        serde_json::Value::String(value) => Value::String(value),
        serde_json::Value::Array(values) => Value::Array(
            values
                .into_iter()
                .map(json_to_value)
                .collect::<ConfigResult<Vec<_>>>()?,
        ),
        serde_json::Value::Object(_) => {
            return Err(ConfigError::TypeConversionError {
                message: "不支持嵌套 JSON 对象".to_string(),
            })
        }
    })
}
