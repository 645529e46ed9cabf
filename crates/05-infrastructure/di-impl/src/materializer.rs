//! 可调用对象转换
//!
//! 字符串形式按以下顺序识别：
//!
//! - 已注册的函数名
//! - `Class@method`：构造类的实例并绑定方法
//! - `Class::method`：静态方法
//! - 声明了调用入口的类名：构造实例本身
//!
//! 无论哪种形式，最后都要确认结果确实可以调用。

use crate::extractor::{entry_point, EntryPoint};
use crate::Resolver;
use di_abstractions::{CallTarget, CallableSpec};
use infrastructure_common::{NamedArguments, ObjectRef, ResolveError, ResolveResult, Value};
use tracing::debug;

impl Resolver {
    /// 转换为可调用对象，同时返回其入口
    pub(crate) fn materialize(
        &self,
        target: CallTarget,
    ) -> ResolveResult<(CallableSpec, EntryPoint)> {
        let label = target.to_string();
        let callable = match target {
            CallTarget::Callable(callable) => callable,
            CallTarget::Named(name) => self.materialize_string(&name)?,
        };
        let entry = self.ensure_invocable(&label, &callable)?;
        Ok((callable, entry))
    }

    fn materialize_string(&self, name: &str) -> ResolveResult<CallableSpec> {
        if self.catalog.function(name).is_some() {
            debug!("{} 识别为函数", name);
            return Ok(CallableSpec::function(name));
        }

        if let Some((class_name, method)) = split_class_method(name, "@") {
            if self.catalog.class(class_name).is_some() {
                debug!("{} 识别为实例方法", name);
                let instance = self.make_object(name, class_name)?;
                return Ok(CallableSpec::bound(instance, method));
            }
        }

        if let Some((class_name, method)) = split_class_method(name, "::") {
            if self.catalog.class(class_name).is_some() {
                debug!("{} 识别为静态方法", name);
                return Ok(CallableSpec::static_method(class_name, method));
            }
        }

        if self
            .catalog
            .class(name)
            .is_some_and(|class| class.is_invokable())
        {
            debug!("{} 识别为可调用类", name);
            let instance = self.make_object(name, name)?;
            return Ok(CallableSpec::Invokable(instance));
        }

        Err(ResolveError::callable(name, "无法转换为可调用对象"))
    }

    fn make_object(&self, target: &str, class_name: &str) -> ResolveResult<ObjectRef> {
        let mut context = self.new_context();
        match self.make_in(class_name, &NamedArguments::new(), &mut context)? {
            Value::Object(instance) => Ok(instance),
            other => Err(ResolveError::callable(
                target,
                format!("{} 解析结果不是对象: {}", class_name, other.type_name()),
            )),
        }
    }

    /// 确认可调用对象存在入口，错误以原始输入命名
    fn ensure_invocable(&self, label: &str, callable: &CallableSpec) -> ResolveResult<EntryPoint> {
        entry_point(self.catalog.as_ref(), callable)
            .map_err(|error| ResolveError::callable(label, error.to_string()))
    }
}

/// 拆分 `Class<separator>method`，两侧都不能为空
fn split_class_method<'a>(name: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let (class_name, method) = name.rsplit_once(separator)?;
    if class_name.is_empty() || method.is_empty() {
        return None;
    }
    Some((class_name, method))
}
