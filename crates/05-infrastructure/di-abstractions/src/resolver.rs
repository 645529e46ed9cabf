//! 自动装配解析器抽象接口
//!
//! 提供调用、实例化与可调用对象转换的能力

use crate::callable::{CallTarget, CallableSpec};
use infrastructure_common::{NamedArguments, ResolveError, ResolveResult, ResolverConfig, Value};
use tracing::trace;

/// 自动装配 trait
pub trait Autowire {
    /// 解析目标的全部参数并调用
    fn call(&self, target: impl Into<CallTarget>, arguments: &NamedArguments)
        -> ResolveResult<Value>;

    /// 解析构造参数并创建实例；注册表中已有的实例直接返回
    fn make(&self, class_name: &str, arguments: &NamedArguments) -> ResolveResult<Value>;

    /// 将字符串或可调用对象转换为可调用对象
    fn make_callable(&self, target: impl Into<CallTarget>) -> ResolveResult<CallableSpec>;
}

/// 解析上下文
///
/// 贯穿一次 `call`/`make` 的递归构造过程。
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// 当前解析链，用于检测循环依赖
    pub resolution_chain: Vec<String>,
    /// 解析选项
    pub options: ResolveOptions,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            resolution_chain: Vec::new(),
            options,
        }
    }

    /// 添加类到解析链
    pub fn push_class(&mut self, class_name: &str) -> ResolveResult<()> {
        if self.options.detect_circular_dependencies
            && self.resolution_chain.iter().any(|name| name == class_name)
        {
            return Err(ResolveError::class(
                class_name,
                format!(
                    "检测到循环依赖: {} -> {}",
                    self.resolution_chain.join(" -> "),
                    class_name
                ),
            ));
        }

        if self.resolution_chain.len() >= self.options.max_depth {
            return Err(ResolveError::class(
                class_name,
                format!("超过最大解析深度: {}", self.options.max_depth),
            ));
        }

        trace!("进入解析链: {} (深度 {})", class_name, self.depth() + 1);
        self.resolution_chain.push(class_name.to_string());
        Ok(())
    }

    /// 从解析链中移除类
    pub fn pop_class(&mut self) {
        self.resolution_chain.pop();
    }

    /// 当前深度
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self::new(ResolveOptions::default())
    }
}

/// 解析选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// 是否检测循环依赖
    pub detect_circular_dependencies: bool,
    /// 最大递归深度
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::from(&ResolverConfig::default())
    }
}

impl From<&ResolverConfig> for ResolveOptions {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            detect_circular_dependencies: config.enable_circular_dependency_detection,
            max_depth: config.max_resolution_depth,
        }
    }
}
