//! 元数据定义
//!
//! 提供形参的声明类型与描述符

use crate::value::Value;
use std::fmt;

/// 内置类型名称
pub const BUILTIN_TYPES: &[&str] = &[
    "string", "int", "float", "bool", "array", "callable", "iterable", "object", "mixed", "null",
    "false", "true",
];

/// 声明类型
///
/// 联合类型内部的声明顺序即各解析阶段的优先顺序。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSpec {
    /// 内置类型（标量、数组、可调用等）
    Builtin(String),
    /// 具体类或接口
    Named(String),
    /// 联合类型
    Union(Vec<TypeSpec>),
    /// 交叉类型，无法解析，仅用于描述并快速失败
    Intersection(Vec<TypeSpec>),
}

impl TypeSpec {
    pub fn builtin(name: impl Into<String>) -> Self {
        Self::Builtin(name.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// 解析类型声明
    ///
    /// 支持 `T`、`?T`、`A|B`、`A&B` 以及 `(A&B)|C`。
    /// 前导 `?` 只影响可空性，由 [`ParameterDescriptor::typed`] 处理。
    pub fn parse(declaration: &str) -> Self {
        let declaration = declaration.trim();
        let declaration = declaration.strip_prefix('?').unwrap_or(declaration);

        let members: Vec<&str> = declaration.split('|').map(str::trim).collect();
        if members.len() > 1 {
            return Self::Union(members.into_iter().map(Self::parse_member).collect());
        }
        Self::parse_member(declaration)
    }

    fn parse_member(member: &str) -> Self {
        let member = member
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim();

        if member.contains('&') {
            return Self::Intersection(member.split('&').map(Self::parse_member).collect());
        }

        let lowered = member.to_ascii_lowercase();
        if BUILTIN_TYPES.contains(&lowered.as_str()) {
            Self::Builtin(lowered)
        } else {
            Self::Named(member.trim_start_matches('\\').to_string())
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    /// 类型本身是否接受空值
    pub fn allows_null(&self) -> bool {
        match self {
            Self::Builtin(name) => name == "null" || name == "mixed",
            Self::Named(_) | Self::Intersection(_) => false,
            Self::Union(members) => members.iter().any(Self::allows_null),
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(name) | Self::Named(name) => f.write_str(name),
            Self::Union(members) => write_joined(f, members, "|"),
            Self::Intersection(members) => {
                f.write_str("(")?;
                write_joined(f, members, "&")?;
                f.write_str(")")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, members: &[TypeSpec], separator: &str) -> fmt::Result {
    for (index, member) in members.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{member}")?;
    }
    Ok(())
}

/// 形参描述符
///
/// `default_value` 为 `Some` 即声明了默认值，`Some(Value::Null)` 表示默认值为空。
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    /// 参数名称
    pub name: String,
    /// 声明类型，未声明时为 `None`
    pub declared_type: Option<TypeSpec>,
    /// 默认值
    pub default_value: Option<Value>,
    /// 是否可空
    pub nullable: bool,
}

impl ParameterDescriptor {
    /// 创建未声明类型的参数（未声明类型的参数可空）
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            default_value: None,
            nullable: true,
        }
    }

    /// 按类型声明创建参数
    pub fn typed(name: impl Into<String>, declaration: &str) -> Self {
        let declared_type = TypeSpec::parse(declaration);
        let nullable = declaration.trim_start().starts_with('?') || declared_type.allows_null();
        Self {
            name: name.into(),
            declared_type: Some(declared_type),
            default_value: None,
            nullable,
        }
    }

    /// 设置声明类型
    pub fn with_type(mut self, declared_type: TypeSpec) -> Self {
        self.nullable = declared_type.allows_null();
        self.declared_type = Some(declared_type);
        self
    }

    /// 设置默认值
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// 标记为可空
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }
}
