//! 形参解析
//!
//! 单个形参按以下顺序尝试，首个成功者即为结果：
//!
//! 1. 具名参数中同名且（具体类时）运行时类型完全一致的值
//! 2. 以参数名查询注册表（内置类型或未声明类型）
//! 3. 以类名查询注册表（具体类）
//! 4. 按类型扫描全部具名参数，取第一个实例（具体类）
//! 5. 递归实例化（具体类），失败被吞掉
//! 6. 声明的默认值
//! 7. 可空参数取空值
//!
//! 联合类型按阶段横向展开：先对所有备选类型执行 1–4，
//! 再对所有备选类型执行 5，最后执行一次 6–7。

use crate::Resolver;
use di_abstractions::ResolveContext;
use infrastructure_common::{
    NamedArguments, ParameterDescriptor, ResolveError, ResolveResult, TypeSpec, Value,
};
use tracing::debug;

impl Resolver {
    /// 按声明顺序解析形参列表为位置参数
    pub(crate) fn resolve_parameters_in(
        &self,
        parameters: &[ParameterDescriptor],
        arguments: &NamedArguments,
        context: &mut ResolveContext,
    ) -> ResolveResult<Vec<Value>> {
        parameters
            .iter()
            .map(|parameter| self.resolve_parameter(parameter, arguments, context))
            .collect()
    }

    fn resolve_parameter(
        &self,
        parameter: &ParameterDescriptor,
        arguments: &NamedArguments,
        context: &mut ResolveContext,
    ) -> ResolveResult<Value> {
        match &parameter.declared_type {
            None => self.resolve_single(parameter, None, arguments, context),
            Some(declared @ (TypeSpec::Builtin(_) | TypeSpec::Named(_))) => {
                self.resolve_single(parameter, Some(declared), arguments, context)
            }
            Some(TypeSpec::Union(alternatives)) => {
                self.resolve_union(parameter, alternatives, arguments, context)
            }
            Some(TypeSpec::Intersection(_)) => Err(ResolveError::parameter(
                &parameter.name,
                "无法解析交叉类型",
            )),
        }
    }

    fn resolve_single(
        &self,
        parameter: &ParameterDescriptor,
        declared: Option<&TypeSpec>,
        arguments: &NamedArguments,
        context: &mut ResolveContext,
    ) -> ResolveResult<Value> {
        if let Some(value) = self.match_alternative(parameter, declared, arguments)? {
            return Ok(value);
        }

        if let Some(TypeSpec::Named(class_name)) = declared {
            if let Some(value) =
                self.instantiate_alternative(parameter, class_name, arguments, context)?
            {
                return Ok(value);
            }
        }

        fallback(parameter)
    }

    fn resolve_union(
        &self,
        parameter: &ParameterDescriptor,
        alternatives: &[TypeSpec],
        arguments: &NamedArguments,
        context: &mut ResolveContext,
    ) -> ResolveResult<Value> {
        if let Some(invalid) = alternatives
            .iter()
            .find(|alternative| !matches!(alternative, TypeSpec::Builtin(_) | TypeSpec::Named(_)))
        {
            return Err(ResolveError::parameter(
                &parameter.name,
                format!("联合类型中包含无法解析的成员: {invalid}"),
            ));
        }

        for alternative in alternatives {
            if let Some(value) = self.match_alternative(parameter, Some(alternative), arguments)? {
                return Ok(value);
            }
        }

        for alternative in alternatives {
            if let TypeSpec::Named(class_name) = alternative {
                if let Some(value) =
                    self.instantiate_alternative(parameter, class_name, arguments, context)?
                {
                    return Ok(value);
                }
            }
        }

        fallback(parameter)
    }

    /// 步骤 1–4：具名参数、注册表与按类型扫描
    fn match_alternative(
        &self,
        parameter: &ParameterDescriptor,
        declared: Option<&TypeSpec>,
        arguments: &NamedArguments,
    ) -> ResolveResult<Option<Value>> {
        let Some(TypeSpec::Named(class_name)) = declared else {
            if let Some(value) = arguments.get(&parameter.name) {
                debug!("参数 {} 按名称匹配", parameter.name);
                return Ok(Some(value.clone()));
            }
            return self.lookup_container(&parameter.name);
        };

        match arguments.get(&parameter.name) {
            Some(Value::Object(object)) if object.class_name() == class_name => {
                debug!("参数 {} 按名称与类型匹配", parameter.name);
                return Ok(Some(Value::Object(object.clone())));
            }
            Some(Value::Null) if parameter.nullable => {
                debug!("参数 {} 按名称显式传入空值", parameter.name);
                return Ok(Some(Value::Null));
            }
            Some(value) => debug!(
                "参数 {} 同名值类型为 {}, 与声明类型 {} 不一致, 继续按类型查找",
                parameter.name,
                value.type_name(),
                class_name
            ),
            None => {}
        }

        if let Some(value) = self.lookup_container(class_name)? {
            debug!("参数 {} 由注册表按类型 {} 提供", parameter.name, class_name);
            return Ok(Some(value));
        }

        let structural = arguments.iter().find_map(|(name, value)| match value {
            Value::Object(object) if self.catalog.is_instance_of(object.class_name(), class_name) => {
                debug!("参数 {} 按类型匹配到具名参数 {}", parameter.name, name);
                Some(value.clone())
            }
            _ => None,
        });
        Ok(structural)
    }

    /// 步骤 5：递归实例化
    ///
    /// 解析失败视为此策略未命中；注册表违反 `has`/`get` 约定的错误原样传播。
    fn instantiate_alternative(
        &self,
        parameter: &ParameterDescriptor,
        class_name: &str,
        arguments: &NamedArguments,
        context: &mut ResolveContext,
    ) -> ResolveResult<Option<Value>> {
        match self.make_in(class_name, arguments, context) {
            Ok(value) => Ok(Some(value)),
            Err(error @ ResolveError::Container { .. }) => Err(error),
            Err(error) => {
                debug!(
                    "参数 {} 递归实例化 {} 失败, 回退到默认值: {}",
                    parameter.name, class_name, error
                );
                Ok(None)
            }
        }
    }

    /// 查询注册表；只有 `has` 为真时才调用 `get`
    pub(crate) fn lookup_container(&self, key: &str) -> ResolveResult<Option<Value>> {
        if !self.container.has(key) {
            return Ok(None);
        }
        self.container
            .get(key)
            .map(Some)
            .map_err(|source| ResolveError::Container {
                key: key.to_string(),
                source,
            })
    }
}

/// 步骤 6–7：默认值，其次空值
fn fallback(parameter: &ParameterDescriptor) -> ResolveResult<Value> {
    if let Some(default) = &parameter.default_value {
        return Ok(default.clone());
    }
    if parameter.nullable {
        return Ok(Value::Null);
    }
    Err(ResolveError::parameter(
        &parameter.name,
        format!("无法解析参数 \"{}\"", parameter.name),
    ))
}
