//! 注册表抽象接口
//!
//! 解析器只读地访问外部注册表，键为类名/接口名，
//! 或（内置类型、未声明类型的参数）参数名。

use infrastructure_common::{ContainerError, Value};

/// 注册表 trait
///
/// 解析器只会在 `has` 返回 `true` 后调用 `get`。
pub trait Container: Send + Sync {
    /// 是否存在指定键
    fn has(&self, key: &str) -> bool;

    /// 读取指定键的值
    fn get(&self, key: &str) -> Result<Value, ContainerError>;
}

/// 空注册表
///
/// 未提供注册表时使用，不包含任何条目。
#[derive(Debug, Default, Clone, Copy)]
pub struct NullContainer;

impl Container for NullContainer {
    fn has(&self, _key: &str) -> bool {
        false
    }

    fn get(&self, key: &str) -> Result<Value, ContainerError> {
        Err(ContainerError::NotFound {
            key: key.to_string(),
        })
    }
}
