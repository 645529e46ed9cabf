//! 形参描述符提取
//!
//! 将每种可调用形式映射到唯一的入口，取得入口的形参列表，
//! 并在参数解析完成后通过同一入口发起调用。

use di_abstractions::{
    CallableSpec, FunctionFn, FunctionRef, MethodBody, MethodDefinition, MethodFn, TypeCatalog,
};
use infrastructure_common::{ObjectRef, ParameterDescriptor, ResolveError, ResolveResult, Value};

/// 可调用对象的入口
pub(crate) struct EntryPoint {
    label: String,
    parameters: Vec<ParameterDescriptor>,
    target: EntryTarget,
}

enum EntryTarget {
    Method { receiver: ObjectRef, body: MethodFn },
    Function(FunctionFn),
}

impl EntryPoint {
    pub(crate) fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    /// 以已解析的位置参数调用入口
    pub(crate) fn invoke(&self, arguments: Vec<Value>) -> ResolveResult<Value> {
        let result = match &self.target {
            EntryTarget::Method { receiver, body } => body(receiver, arguments),
            EntryTarget::Function(body) => body(arguments),
        };
        result.map_err(|source| ResolveError::InvocationFailed {
            target: self.label.clone(),
            source,
        })
    }
}

/// 查找可调用对象的入口
///
/// 只检查声明的签名，不检查任何参数值。
pub(crate) fn entry_point(
    catalog: &dyn TypeCatalog,
    callable: &CallableSpec,
) -> ResolveResult<EntryPoint> {
    let label = callable.to_string();
    let unsupported =
        |reason: &str| ResolveError::parameter(&label, format!("不支持的可调用形式: {reason}"));

    let (method, receiver) = match callable {
        CallableSpec::BoundMethod { instance, method } => {
            let class = catalog
                .class(instance.class_name())
                .ok_or_else(|| unsupported("对象的类未注册"))?;
            let definition = class
                .method(method)
                .cloned()
                .ok_or_else(|| unsupported("方法不存在"))?;
            (definition, Some(instance.clone()))
        }
        CallableSpec::StaticMethod { class_name, method } => {
            let class = catalog
                .class(class_name)
                .ok_or_else(|| unsupported("类不存在"))?;
            let definition = class
                .method(method)
                .cloned()
                .ok_or_else(|| unsupported("方法不存在"))?;
            (definition, None)
        }
        CallableSpec::Invokable(instance) => {
            let class = catalog
                .class(instance.class_name())
                .ok_or_else(|| unsupported("对象的类未注册"))?;
            let definition = class
                .invoke_entry()
                .cloned()
                .ok_or_else(|| unsupported("对象没有调用入口"))?;
            (definition, Some(instance.clone()))
        }
        CallableSpec::FreeFunction(function) => {
            let definition = match function {
                FunctionRef::Name(name) => catalog
                    .function(name)
                    .ok_or_else(|| unsupported("函数不存在"))?,
                FunctionRef::Definition(definition) => definition.clone(),
            };
            return Ok(EntryPoint {
                label,
                parameters: definition.parameters().to_vec(),
                target: EntryTarget::Function(definition.body().clone()),
            });
        }
    };

    let target = method_target(&method, receiver)
        .ok_or_else(|| unsupported("非静态方法不能以静态方式调用"))?;

    Ok(EntryPoint {
        target,
        parameters: method.parameters().to_vec(),
        label,
    })
}

fn method_target(method: &MethodDefinition, receiver: Option<ObjectRef>) -> Option<EntryTarget> {
    match (method.body(), receiver) {
        (MethodBody::Instance(body), Some(receiver)) => Some(EntryTarget::Method {
            receiver,
            body: body.clone(),
        }),
        // 静态方法也可以通过实例调用
        (MethodBody::Static(body), _) => Some(EntryTarget::Function(body.clone())),
        (MethodBody::Instance(_), None) => None,
    }
}
