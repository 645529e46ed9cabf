//! 实例构造

use crate::Resolver;
use di_abstractions::{ClassKind, ResolveContext};
use infrastructure_common::{NamedArguments, ObjectRef, ResolveError, ResolveResult, Value};
use tracing::debug;

impl Resolver {
    /// 在给定上下文中构造类的实例
    ///
    /// 注册表中已有同名条目时原样返回，不检查其类型。
    pub(crate) fn make_in(
        &self,
        class_name: &str,
        arguments: &NamedArguments,
        context: &mut ResolveContext,
    ) -> ResolveResult<Value> {
        if let Some(value) = self.lookup_container(class_name)? {
            debug!("类 {} 由注册表提供", class_name);
            return Ok(value);
        }

        let class = self
            .catalog
            .class(class_name)
            .ok_or_else(|| ResolveError::class(class_name, "类不存在"))?;

        match class.kind() {
            ClassKind::Interface => return Err(ResolveError::class(class_name, "接口不能实例化")),
            ClassKind::Abstract => {
                return Err(ResolveError::class(class_name, "抽象类不能实例化"))
            }
            ClassKind::Concrete => {}
        }
        let factory = class
            .factory()
            .ok_or_else(|| ResolveError::class(class_name, "类没有可用的构造工厂"))?;

        context.push_class(class_name)?;
        let constructed = match class.constructor() {
            None => Ok(Vec::new()),
            Some(parameters) => self.resolve_parameters_in(parameters, arguments, context),
        }
        .and_then(|values| {
            factory(values).map_err(|source| ResolveError::InvocationFailed {
                target: format!("{class_name}::__construct"),
                source,
            })
        });
        context.pop_class();

        let instance = constructed?;
        debug!("构造实例: {}", class_name);
        Ok(Value::Object(ObjectRef::from_arc(class_name, instance)))
    }
}
