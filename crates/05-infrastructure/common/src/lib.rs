//! # Infrastructure Common
//!
//! 自动装配解析器的公共基础：运行时值、具名参数、形参元数据、错误类型与配置。
//!
//! ## 核心类型
//!
//! - [`Value`] / [`ObjectRef`] - 解析过程中流转的运行时值
//! - [`NamedArguments`] - 调用方提供的具名参数
//! - [`TypeSpec`] / [`ParameterDescriptor`] - 形参的静态描述
//! - [`ResolveError`] - 参数、类、可调用对象三类解析错误
//! - [`ResolverConfig`] - 循环检测与递归深度配置

pub mod arguments;
pub mod configuration;
pub mod errors;
pub mod logging;
pub mod metadata;
pub mod value;

pub use arguments::*;
pub use configuration::*;
pub use errors::*;
pub use logging::*;
pub use metadata::*;
pub use value::*;
