//! 运行时值定义
//!
//! 解析过程中流转的所有参数值、注册表条目与调用返回值都以 [`Value`] 表示。

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 对象引用
///
/// 保存类名与类型擦除后的共享实例。克隆只增加引用计数，
/// 相等性按实例身份比较。
#[derive(Clone)]
pub struct ObjectRef {
    class_name: Arc<str>,
    instance: Arc<dyn Any + Send + Sync>,
}

impl ObjectRef {
    /// 包装一个新实例
    pub fn new<T>(class_name: impl Into<String>, instance: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::from_arc(class_name, Arc::new(instance))
    }

    /// 包装一个已共享的实例
    pub fn from_arc(class_name: impl Into<String>, instance: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            class_name: Arc::from(class_name.into()),
            instance,
        }
    }

    /// 运行时类名
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// 以具体类型借用实例
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.instance.downcast_ref::<T>()
    }

    /// 以具体类型共享实例
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.instance.clone().downcast::<T>().ok()
    }

    /// 是否指向同一实例
    pub fn ptr_eq(&self, other: &Self) -> bool {
        // 只比较数据指针，忽略 vtable
        std::ptr::eq(
            Arc::as_ptr(&self.instance).cast::<()>(),
            Arc::as_ptr(&other.instance).cast::<()>(),
        )
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("class_name", &self.class_name)
            .field("instance", &Arc::as_ptr(&self.instance).cast::<()>())
            .finish()
    }
}

/// 运行时值
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// 空值
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(ObjectRef),
}

impl Value {
    /// 运行时类型名称，对象返回其类名
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(object) => object.class_name(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(values)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
