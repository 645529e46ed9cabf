//! 内存类型目录实现

use di_abstractions::{ClassDefinition, FunctionDefinition, TypeCatalog};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// 内存类型目录
///
/// 构建后只读，可在多个解析器之间共享。
#[derive(Debug, Default)]
pub struct Catalog {
    classes: HashMap<String, Arc<ClassDefinition>>,
    functions: HashMap<String, Arc<FunctionDefinition>>,
}

impl Catalog {
    /// 创建目录构建器
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// 已注册的类名
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// 已注册的函数名
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl TypeCatalog for Catalog {
    fn class(&self, name: &str) -> Option<Arc<ClassDefinition>> {
        self.classes.get(name).cloned()
    }

    fn function(&self, name: &str) -> Option<Arc<FunctionDefinition>> {
        self.functions.get(name).cloned()
    }
}

/// 目录构建器
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    classes: HashMap<String, Arc<ClassDefinition>>,
    functions: HashMap<String, Arc<FunctionDefinition>>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册类，同名类后注册者覆盖先注册者
    pub fn register_class(mut self, definition: ClassDefinition) -> Self {
        let name = definition.name().to_string();
        if self
            .classes
            .insert(name.clone(), Arc::new(definition))
            .is_some()
        {
            warn!("类定义被覆盖: {}", name);
        }
        self
    }

    /// 注册自由函数，同名函数后注册者覆盖先注册者
    pub fn register_function(mut self, definition: FunctionDefinition) -> Self {
        let name = definition.name().to_string();
        if self
            .functions
            .insert(name.clone(), Arc::new(definition))
            .is_some()
        {
            warn!("函数定义被覆盖: {}", name);
        }
        self
    }

    /// 构建目录
    pub fn build(self) -> Catalog {
        info!(
            "构建类型目录完成，注册了 {} 个类、{} 个函数",
            self.classes.len(),
            self.functions.len()
        );
        Catalog {
            classes: self.classes,
            functions: self.functions,
        }
    }
}
