//! 类型目录抽象接口
//!
//! 提供类与函数的元数据查询，解析器通过它获取形参签名与构造方式。

use crate::class::{ClassDefinition, FunctionDefinition};
use std::collections::HashSet;
use std::sync::Arc;

/// 类型目录 trait
pub trait TypeCatalog: Send + Sync {
    /// 按名称查找类定义
    fn class(&self, name: &str) -> Option<Arc<ClassDefinition>>;

    /// 按名称查找自由函数定义
    fn function(&self, name: &str) -> Option<Arc<FunctionDefinition>>;

    /// 判断 `class_name` 的实例是否也是 `target` 的实例
    ///
    /// 沿父类与接口传递查找；继承环不会导致死循环。
    fn is_instance_of(&self, class_name: &str, target: &str) -> bool {
        let mut pending = vec![class_name.to_string()];
        let mut visited = HashSet::new();

        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(definition) = self.class(&current) {
                pending.extend(definition.parents().iter().cloned());
            }
        }

        false
    }
}
