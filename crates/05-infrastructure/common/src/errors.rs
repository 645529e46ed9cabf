//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },

    #[error("配置类型转换失败: {message}")]
    TypeConversionError { message: String },
}

/// 注册表访问错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("注册表中不存在条目: {key}")]
    NotFound { key: String },
}

/// 依赖解析错误类型
///
/// 前三种对应参数、类与可调用对象三类解析失败；
/// 其余两种是外部协作方（注册表、被调用代码）抛出的错误，原样向上传播。
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("参数解析失败: {name}, 原因: {reason}")]
    ParameterResolution { name: String, reason: String },

    #[error("类解析失败: {class_name}, 原因: {reason}")]
    ClassResolution { class_name: String, reason: String },

    #[error("可调用对象解析失败: {target}, 原因: {reason}")]
    CallableResolution { target: String, reason: String },

    #[error("注册表读取失败: {key}, 原因: {source}")]
    Container {
        key: String,
        #[source]
        source: ContainerError,
    },

    #[error("调用失败: {target}, 原因: {source}")]
    InvocationFailed {
        target: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ResolveError {
    /// 创建参数解析错误
    pub fn parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParameterResolution {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// 创建类解析错误
    pub fn class(class_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ClassResolution {
            class_name: class_name.into(),
            reason: reason.into(),
        }
    }

    /// 创建可调用对象解析错误
    pub fn callable(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CallableResolution {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// 是否为参数解析错误
    pub fn is_parameter_resolution(&self) -> bool {
        matches!(self, Self::ParameterResolution { .. })
    }

    /// 是否为类解析错误
    pub fn is_class_resolution(&self) -> bool {
        matches!(self, Self::ClassResolution { .. })
    }

    /// 是否为可调用对象解析错误
    pub fn is_callable_resolution(&self) -> bool {
        matches!(self, Self::CallableResolution { .. })
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖解析错误: {source}")]
    ResolveError {
        #[from]
        source: ResolveError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ResolveResult<T> = Result<T, ResolveError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
