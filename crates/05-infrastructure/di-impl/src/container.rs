//! 内存注册表实现

use di_abstractions::Container;
use infrastructure_common::{ContainerError, Value};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// 内存注册表
///
/// 以键保存预先构造好的值（通常是单例实例）。
/// 解析器只读访问，写入由调用方在解析前完成。
#[derive(Debug, Default)]
pub struct InMemoryContainer {
    items: RwLock<HashMap<String, Value>>,
}

impl InMemoryContainer {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册条目（链式）
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// 注册条目，返回被替换的旧值
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        debug!("注册表写入: {}", key);
        self.items.write().insert(key, value.into())
    }

    /// 移除条目
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.items.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl Container for InMemoryContainer {
    fn has(&self, key: &str) -> bool {
        self.items.read().contains_key(key)
    }

    fn get(&self, key: &str) -> Result<Value, ContainerError> {
        self.items
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| ContainerError::NotFound {
                key: key.to_string(),
            })
    }
}
