//! 可调用对象形式

use crate::class::FunctionDefinition;
use infrastructure_common::ObjectRef;
use std::fmt;
use std::sync::Arc;

/// 自由函数引用
#[derive(Debug, Clone)]
pub enum FunctionRef {
    /// 按名称在类型目录中查找
    Name(String),
    /// 直接持有的函数定义（闭包）
    Definition(Arc<FunctionDefinition>),
}

impl PartialEq for FunctionRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Name(left), Self::Name(right)) => left == right,
            (Self::Definition(left), Self::Definition(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

/// 可调用对象
///
/// 封闭的几种形式，每种形式恰好对应一个入口。
#[derive(Debug, Clone, PartialEq)]
pub enum CallableSpec {
    /// 实例方法 `[$object, "method"]`
    BoundMethod { instance: ObjectRef, method: String },
    /// 静态方法 `[Class::class, "method"]`
    StaticMethod { class_name: String, method: String },
    /// 声明了调用入口的对象
    Invokable(ObjectRef),
    /// 自由函数
    FreeFunction(FunctionRef),
}

impl CallableSpec {
    pub fn bound(instance: ObjectRef, method: impl Into<String>) -> Self {
        Self::BoundMethod {
            instance,
            method: method.into(),
        }
    }

    pub fn static_method(class_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::StaticMethod {
            class_name: class_name.into(),
            method: method.into(),
        }
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::FreeFunction(FunctionRef::Name(name.into()))
    }

    pub fn closure(definition: FunctionDefinition) -> Self {
        Self::FreeFunction(FunctionRef::Definition(Arc::new(definition)))
    }
}

impl fmt::Display for CallableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundMethod { instance, method } => {
                write!(f, "{}->{}", instance.class_name(), method)
            }
            Self::StaticMethod { class_name, method } => write!(f, "{class_name}::{method}"),
            Self::Invokable(instance) => write!(f, "{}::__invoke", instance.class_name()),
            Self::FreeFunction(FunctionRef::Name(name)) => f.write_str(name),
            Self::FreeFunction(FunctionRef::Definition(definition)) => {
                f.write_str(definition.name())
            }
        }
    }
}

/// 调用目标
///
/// 已构造好的可调用对象，或待转换的字符串形式：
/// 函数名、`Class@method`、`Class::method`、可调用类名。
#[derive(Debug, Clone, PartialEq)]
pub enum CallTarget {
    Callable(CallableSpec),
    Named(String),
}

impl From<CallableSpec> for CallTarget {
    fn from(callable: CallableSpec) -> Self {
        Self::Callable(callable)
    }
}

impl From<&str> for CallTarget {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for CallTarget {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl fmt::Display for CallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(callable) => write!(f, "{callable}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}
