//! # Dependency Injection Abstractions
//!
//! 自动装配抽象层，定义解析器消费的外部能力与对外提供的接口。
//!
//! ## 核心接口
//!
//! - [`Container`] - 只读注册表接口
//! - [`TypeCatalog`] - 类与函数元数据接口
//! - [`CallableSpec`] - 可调用对象的封闭形式
//! - [`Autowire`] - 调用、实例化与可调用对象转换

pub mod callable;
pub mod catalog;
pub mod class;
pub mod container;
pub mod resolver;

pub use callable::*;
pub use catalog::*;
pub use class::*;
pub use container::*;
pub use resolver::*;
