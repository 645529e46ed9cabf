//! 集成测试共享的测试夹具
#![allow(dead_code)]

use di_abstractions::{ClassDefinition, FunctionDefinition, MethodDefinition};
use di_impl::{Catalog, Resolver};
use infrastructure_common::{init_logging, LoggingConfig, ParameterDescriptor, Value};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// 初始化测试日志，多个测试共享同一个全局订阅者
pub fn init_test_logging() {
    INIT.call_once(|| {
        init_logging(&LoggingConfig::development()).ok();
    });
}

/// 日期时间
#[derive(Debug, PartialEq)]
pub struct DateTime(pub String);

/// 不可变日期时间
#[derive(Debug, PartialEq)]
pub struct DateTimeImmutable(pub String);

/// 带构造函数的事件
#[derive(Debug)]
pub struct ConstructorClass {
    pub name: String,
    pub start_at: Value,
}

pub struct NonConstructorClass;

pub struct InvokableClass;

fn event_parameters() -> Vec<ParameterDescriptor> {
    vec![
        ParameterDescriptor::typed("name", "string"),
        ParameterDescriptor::typed("start_at", "DateTime"),
    ]
}

fn event(arguments: Vec<Value>) -> anyhow::Result<Value> {
    Ok(Value::Array(arguments))
}

/// 与 PHP 测试夹具对应的类型目录
pub fn catalog() -> Catalog {
    Catalog::builder()
        .register_class(ClassDefinition::interface("DateTimeInterface"))
        .register_class(
            ClassDefinition::concrete("DateTime", |_| Ok(DateTime("now".to_string())))
                .implements("DateTimeInterface"),
        )
        .register_class(
            ClassDefinition::concrete("DateTimeImmutable", |_| {
                Ok(DateTimeImmutable("now".to_string()))
            })
            .implements("DateTimeInterface"),
        )
        .register_class(
            ClassDefinition::concrete("ConstructorClass", |arguments| {
                let mut arguments = arguments.into_iter();
                let name = arguments
                    .next()
                    .and_then(|value| value.as_str().map(str::to_string))
                    .ok_or_else(|| anyhow::anyhow!("缺少 name"))?;
                let start_at = arguments.next().unwrap_or_default();
                Ok(ConstructorClass { name, start_at })
            })
            .with_constructor(event_parameters())
            .with_method(MethodDefinition::instance("getEvent", Vec::new(), |receiver, _| {
                let this = receiver
                    .downcast_ref::<ConstructorClass>()
                    .ok_or_else(|| anyhow::anyhow!("接收者不是 ConstructorClass"))?;
                Ok(Value::Array(vec![
                    Value::from(this.name.clone()),
                    this.start_at.clone(),
                ]))
            })),
        )
        .register_class(
            ClassDefinition::concrete("NonConstructorClass", |_| Ok(NonConstructorClass))
                .with_method(MethodDefinition::instance("getEvent", event_parameters(), |_, args| {
                    event(args)
                }))
                .with_method(MethodDefinition::static_method(
                    "getStaticEvent",
                    event_parameters(),
                    event,
                )),
        )
        .register_class(
            ClassDefinition::abstract_class("StaticMethodClass").with_method(
                MethodDefinition::static_method("getEvent", event_parameters(), event),
            ),
        )
        .register_class(
            ClassDefinition::concrete("InvokableClass", |_| Ok(InvokableClass))
                .invokable(event_parameters(), |_, args| event(args)),
        )
        .register_class(ClassDefinition::interface("TestInterface"))
        .register_class(ClassDefinition::abstract_class("TestAbstract"))
        .register_function(FunctionDefinition::new(
            "strtolower",
            vec![ParameterDescriptor::typed("string", "string")],
            |arguments| {
                let input = arguments
                    .first()
                    .and_then(Value::as_str)
                    .ok_or_else(|| anyhow::anyhow!("参数必须是字符串"))?;
                Ok(Value::from(input.to_lowercase()))
            },
        ))
        .build()
}

/// 不带注册表的解析器
pub fn resolver() -> Resolver {
    init_test_logging();
    Resolver::new(Arc::new(catalog()))
}

/// 测试用的日期时间对象
pub fn date_time(label: &str) -> infrastructure_common::ObjectRef {
    infrastructure_common::ObjectRef::new("DateTime", DateTime(label.to_string()))
}
