//! 类与函数定义
//!
//! 以显式注册的元数据代替运行时反射：类的种类、继承关系、
//! 构造函数签名与工厂、方法以及唯一的调用入口。

use infrastructure_common::{ObjectRef, ParameterDescriptor, Value};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// 实例工厂函数类型，接收按声明顺序排列的构造参数
pub type ConstructFn =
    Arc<dyn Fn(Vec<Value>) -> anyhow::Result<Arc<dyn Any + Send + Sync>> + Send + Sync>;

/// 实例方法函数类型
pub type MethodFn = Arc<dyn Fn(&ObjectRef, Vec<Value>) -> anyhow::Result<Value> + Send + Sync>;

/// 静态方法与自由函数的函数类型
pub type FunctionFn = Arc<dyn Fn(Vec<Value>) -> anyhow::Result<Value> + Send + Sync>;

/// 方法体
#[derive(Clone)]
pub enum MethodBody {
    /// 需要接收者的实例方法
    Instance(MethodFn),
    /// 静态方法
    Static(FunctionFn),
}

/// 方法定义
#[derive(Clone)]
pub struct MethodDefinition {
    name: String,
    parameters: Vec<ParameterDescriptor>,
    body: MethodBody,
}

impl MethodDefinition {
    /// 定义实例方法
    pub fn instance<F>(name: impl Into<String>, parameters: Vec<ParameterDescriptor>, body: F) -> Self
    where
        F: Fn(&ObjectRef, Vec<Value>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parameters,
            body: MethodBody::Instance(Arc::new(body)),
        }
    }

    /// 定义静态方法
    pub fn static_method<F>(
        name: impl Into<String>,
        parameters: Vec<ParameterDescriptor>,
        body: F,
    ) -> Self
    where
        F: Fn(Vec<Value>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parameters,
            body: MethodBody::Static(Arc::new(body)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn body(&self) -> &MethodBody {
        &self.body
    }

    pub fn is_static(&self) -> bool {
        matches!(self.body, MethodBody::Static(_))
    }
}

impl fmt::Debug for MethodDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDefinition")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("static", &self.is_static())
            .field("body", &"<function>")
            .finish()
    }
}

/// 自由函数定义
#[derive(Clone)]
pub struct FunctionDefinition {
    name: String,
    parameters: Vec<ParameterDescriptor>,
    body: FunctionFn,
}

impl FunctionDefinition {
    pub fn new<F>(name: impl Into<String>, parameters: Vec<ParameterDescriptor>, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parameters,
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn body(&self) -> &FunctionFn {
        &self.body
    }
}

impl fmt::Debug for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDefinition")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("body", &"<function>")
            .finish()
    }
}

/// 类的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// 可实例化的具体类
    Concrete,
    /// 接口
    Interface,
    /// 抽象类
    Abstract,
}

/// 类定义
#[derive(Clone)]
pub struct ClassDefinition {
    name: String,
    kind: ClassKind,
    parents: Vec<String>,
    constructor: Option<Vec<ParameterDescriptor>>,
    factory: Option<ConstructFn>,
    methods: HashMap<String, MethodDefinition>,
    invoke: Option<MethodDefinition>,
}

impl ClassDefinition {
    /// 定义可实例化的具体类
    ///
    /// 未调用 [`with_constructor`](Self::with_constructor) 时视为没有构造函数，
    /// 工厂以空参数列表调用。
    pub fn concrete<T, F>(name: impl Into<String>, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(Vec<Value>) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        let factory: ConstructFn = Arc::new(move |arguments| {
            factory(arguments).map(|instance| Arc::new(instance) as Arc<dyn Any + Send + Sync>)
        });
        Self::with_kind(name, ClassKind::Concrete, Some(factory))
    }

    /// 定义接口
    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_kind(name, ClassKind::Interface, None)
    }

    /// 定义抽象类
    pub fn abstract_class(name: impl Into<String>) -> Self {
        Self::with_kind(name, ClassKind::Abstract, None)
    }

    fn with_kind(name: impl Into<String>, kind: ClassKind, factory: Option<ConstructFn>) -> Self {
        Self {
            name: name.into(),
            kind,
            parents: Vec::new(),
            constructor: None,
            factory,
            methods: HashMap::new(),
            invoke: None,
        }
    }

    /// 声明构造函数签名
    pub fn with_constructor(mut self, parameters: Vec<ParameterDescriptor>) -> Self {
        self.constructor = Some(parameters);
        self
    }

    /// 声明父类
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    /// 声明实现的接口
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.parents.push(interface.into());
        self
    }

    /// 添加方法
    pub fn with_method(mut self, method: MethodDefinition) -> Self {
        self.methods.insert(method.name.clone(), method);
        self
    }

    /// 声明调用入口，使实例可被直接调用
    pub fn invokable<F>(mut self, parameters: Vec<ParameterDescriptor>, body: F) -> Self
    where
        F: Fn(&ObjectRef, Vec<Value>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.invoke = Some(MethodDefinition::instance("__invoke", parameters, body));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// 直接父类与接口
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// 构造函数签名，`None` 表示没有声明构造函数
    pub fn constructor(&self) -> Option<&[ParameterDescriptor]> {
        self.constructor.as_deref()
    }

    pub fn factory(&self) -> Option<&ConstructFn> {
        self.factory.as_ref()
    }

    pub fn method(&self, name: &str) -> Option<&MethodDefinition> {
        self.methods.get(name)
    }

    /// 调用入口
    pub fn invoke_entry(&self) -> Option<&MethodDefinition> {
        self.invoke.as_ref()
    }

    pub fn is_instantiable(&self) -> bool {
        self.kind == ClassKind::Concrete && self.factory.is_some()
    }

    pub fn is_invokable(&self) -> bool {
        self.invoke.is_some()
    }
}

impl fmt::Debug for ClassDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        methods.sort_unstable();
        f.debug_struct("ClassDefinition")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("parents", &self.parents)
            .field("constructor", &self.constructor)
            .field("methods", &methods)
            .field("invokable", &self.is_invokable())
            .finish()
    }
}
