//! # 自动装配解析器实现
//!
//! 提供内存类型目录、内存注册表以及 [`Resolver`]：
//! 按参数名称、注册表、类型扫描、递归实例化、默认值与可空性
//! 依次为形参寻找实参，然后构造实例或发起调用。

mod extractor;
mod invoker;
mod maker;
mod materializer;
mod parameters;

pub mod catalog;
pub mod container;

pub use catalog::{Catalog, CatalogBuilder};
pub use container::InMemoryContainer;

use di_abstractions::{
    Autowire, CallTarget, CallableSpec, Container, NullContainer, ResolveContext, ResolveOptions,
    TypeCatalog,
};
use infrastructure_common::{
    NamedArguments, ParameterDescriptor, ResolveResult, ResolverConfig, Value,
};
use std::sync::Arc;
use tracing::info;

/// 自动装配解析器
///
/// 除共享的类型目录与注册表外不持有可变状态；
/// 注册表可并发读取时，同一解析器可以被多个线程同时使用。
#[derive(Clone)]
pub struct Resolver {
    catalog: Arc<dyn TypeCatalog>,
    container: Arc<dyn Container>,
    config: ResolverConfig,
}

impl Resolver {
    /// 创建不带注册表的解析器
    pub fn new(catalog: Arc<dyn TypeCatalog>) -> Self {
        Self {
            catalog,
            container: Arc::new(NullContainer),
            config: ResolverConfig::default(),
        }
    }

    /// 设置注册表
    pub fn with_container(mut self, container: Arc<dyn Container>) -> Self {
        self.container = container;
        self
    }

    /// 设置解析配置
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<dyn TypeCatalog> {
        &self.catalog
    }

    /// 创建一次解析使用的上下文
    pub fn new_context(&self) -> ResolveContext {
        ResolveContext::new(ResolveOptions::from(&self.config))
    }

    /// 获取可调用对象的形参列表
    pub fn parameters_for(&self, callable: &CallableSpec) -> ResolveResult<Vec<ParameterDescriptor>> {
        extractor::entry_point(self.catalog.as_ref(), callable)
            .map(|entry| entry.parameters().to_vec())
    }

    /// 将形参列表解析为位置参数
    pub fn resolve_parameters(
        &self,
        parameters: &[ParameterDescriptor],
        arguments: &NamedArguments,
    ) -> ResolveResult<Vec<Value>> {
        let mut context = self.new_context();
        self.resolve_parameters_in(parameters, arguments, &mut context)
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Autowire for Resolver {
    fn call(
        &self,
        target: impl Into<CallTarget>,
        arguments: &NamedArguments,
    ) -> ResolveResult<Value> {
        self.invoke(target.into(), arguments)
    }

    fn make(&self, class_name: &str, arguments: &NamedArguments) -> ResolveResult<Value> {
        info!("构造: {}", class_name);
        let mut context = self.new_context();
        self.make_in(class_name, arguments, &mut context)
    }

    fn make_callable(&self, target: impl Into<CallTarget>) -> ResolveResult<CallableSpec> {
        self.materialize(target.into()).map(|(callable, _)| callable)
    }
}
