//! make 与参数解析的集成测试
mod common;

use common::{date_time, resolver, ConstructorClass, DateTime, DateTimeImmutable};
use di_abstractions::{Autowire, ClassDefinition};
use di_impl::{Catalog, InMemoryContainer, Resolver};
use infrastructure_common::{
    NamedArguments, ObjectRef, ParameterDescriptor, ResolveError, ResolverConfig, Value,
};
use std::sync::Arc;

#[test]
fn test_make_with_no_constructor() {
    let instance = resolver()
        .make("NonConstructorClass", &NamedArguments::new())
        .unwrap();
    assert_eq!(instance.as_object().unwrap().class_name(), "NonConstructorClass");
}

#[test]
fn test_make_with_constructor() {
    let start_at = date_time("now");
    let arguments = NamedArguments::new()
        .with("name", "Foo")
        .with("start_at", start_at.clone());

    let instance = resolver().make("ConstructorClass", &arguments).unwrap();
    let object = instance.as_object().unwrap();
    let constructed = object.downcast_ref::<ConstructorClass>().unwrap();
    assert_eq!(constructed.name, "Foo");
    assert_eq!(constructed.start_at, Value::Object(start_at));
}

#[test]
fn test_make_checks_container_for_match() {
    let instance = ObjectRef::new(
        "ConstructorClass",
        ConstructorClass {
            name: "Foo".to_string(),
            start_at: Value::Null,
        },
    );
    let container = InMemoryContainer::new().with("ConstructorClass", instance.clone());
    let resolver = resolver().with_container(Arc::new(container));

    let resolved = resolver.make("ConstructorClass", &NamedArguments::new()).unwrap();
    assert!(resolved.as_object().unwrap().ptr_eq(&instance));
}

#[test]
fn test_make_non_instantiable_is_class_resolution_error() {
    let resolver = resolver();
    for class_name in ["TestInterface", "TestAbstract", "NonExistentClass"] {
        let error = resolver.make(class_name, &NamedArguments::new()).unwrap_err();
        assert!(error.is_class_resolution(), "{class_name}: {error}");
    }
}

#[test]
fn test_resolve_primitives_from_named_arguments() {
    let parameters = [
        ParameterDescriptor::typed("firstname", "string"),
        ParameterDescriptor::typed("lastname", "string"),
    ];
    let arguments = NamedArguments::new()
        .with("firstname", "Nimbly")
        .with("lastname", "Limber");

    let values = resolver().resolve_parameters(&parameters, &arguments).unwrap();
    assert_eq!(values, vec![Value::from("Nimbly"), Value::from("Limber")]);
}

#[test]
fn test_resolve_primitive_using_default_value() {
    let parameters = [
        ParameterDescriptor::typed("firstname", "string"),
        ParameterDescriptor::typed("lastname", "string").with_default("Limber"),
    ];
    let arguments = NamedArguments::new().with("firstname", "Nimbly");

    let values = resolver().resolve_parameters(&parameters, &arguments).unwrap();
    assert_eq!(values, vec![Value::from("Nimbly"), Value::from("Limber")]);
}

#[test]
fn test_resolve_primitive_allowing_null() {
    let parameters = [
        ParameterDescriptor::typed("firstname", "string"),
        ParameterDescriptor::typed("lastname", "?string"),
    ];
    let arguments = NamedArguments::new().with("firstname", "Nimbly");

    let values = resolver().resolve_parameters(&parameters, &arguments).unwrap();
    assert_eq!(values, vec![Value::from("Nimbly"), Value::Null]);
}

#[test]
fn test_resolve_default_values_without_arguments() {
    let parameters = [
        ParameterDescriptor::typed("option", "string").with_default("opt1"),
        ParameterDescriptor::typed("option2", "?string").with_default(Value::Null),
    ];

    let values = resolver()
        .resolve_parameters(&parameters, &NamedArguments::new())
        .unwrap();
    assert_eq!(values, vec![Value::from("opt1"), Value::Null]);
}

#[test]
fn test_resolve_class_using_container() {
    let application = ObjectRef::new(
        "ConstructorClass",
        ConstructorClass {
            name: "Nimbly".to_string(),
            start_at: Value::Null,
        },
    );
    let container = InMemoryContainer::new().with("ConstructorClass", application.clone());
    let resolver = resolver().with_container(Arc::new(container));

    let parameters = [ParameterDescriptor::typed("application", "ConstructorClass")];
    let values = resolver
        .resolve_parameters(&parameters, &NamedArguments::new())
        .unwrap();
    assert!(values[0].as_object().unwrap().ptr_eq(&application));
}

#[test]
fn test_resolve_by_making_class_with_constructor() {
    // start_at 不在具名参数中，按类型匹配到 date
    let date = date_time("now");
    let parameters = [ParameterDescriptor::typed("class", "ConstructorClass")];
    let arguments = NamedArguments::new()
        .with("name", ":name:")
        .with("date", date.clone());

    let values = resolver().resolve_parameters(&parameters, &arguments).unwrap();
    let constructed = values[0]
        .as_object()
        .unwrap()
        .downcast_ref::<ConstructorClass>()
        .unwrap();
    assert_eq!(constructed.name, ":name:");
    assert_eq!(constructed.start_at, Value::Object(date));
}

#[test]
fn test_resolve_union_type() {
    let date_time = ObjectRef::new(
        "DateTimeImmutable",
        DateTimeImmutable("2020-01-28T12:00:01-08:00".to_string()),
    );
    let parameters = [ParameterDescriptor::typed("dateTime", "DateTime|DateTimeImmutable")];
    let arguments = NamedArguments::new().with("dateTime", date_time.clone());

    let values = resolver().resolve_parameters(&parameters, &arguments).unwrap();
    assert!(values[0].as_object().unwrap().ptr_eq(&date_time));
}

#[test]
fn test_resolve_union_type_constructs_first_alternative() {
    let parameters = [ParameterDescriptor::typed("dateTime", "DateTime|DateTimeImmutable")];

    let values = resolver()
        .resolve_parameters(&parameters, &NamedArguments::new())
        .unwrap();
    let made = values[0].as_object().unwrap();
    assert_eq!(made.downcast_ref::<DateTime>(), Some(&DateTime("now".to_string())));
}

#[test]
fn test_resolve_unmakeable_is_parameter_resolution_error() {
    let parameters = [ParameterDescriptor::typed("request", "ConstructorClass")];
    let error = resolver()
        .resolve_parameters(&parameters, &NamedArguments::new())
        .unwrap_err();
    assert!(matches!(error, ResolveError::ParameterResolution { ref name, .. } if name == "request"));
}

#[test]
fn test_resolve_unresolvable_is_parameter_resolution_error() {
    let parameters = [ParameterDescriptor::typed("dateTime", "string")];
    let error = resolver()
        .resolve_parameters(&parameters, &NamedArguments::new())
        .unwrap_err();
    assert!(error.is_parameter_resolution());
}

#[test]
fn test_cyclic_constructors_fail_cleanly() {
    let catalog = Catalog::builder()
        .register_class(
            ClassDefinition::concrete("Chicken", |_| Ok(()))
                .with_constructor(vec![ParameterDescriptor::typed("egg", "Egg")]),
        )
        .register_class(
            ClassDefinition::concrete("Egg", |_| Ok(()))
                .with_constructor(vec![ParameterDescriptor::typed("chicken", "?Chicken")]),
        )
        .build();
    let resolver = Resolver::new(Arc::new(catalog));

    // Egg 内部再次请求 Chicken 时被识别为循环并回退为空值
    let chicken = resolver.make("Chicken", &NamedArguments::new()).unwrap();
    assert_eq!(chicken.as_object().unwrap().class_name(), "Chicken");
}

#[test]
fn test_cycles_without_detection_are_bounded_by_depth() {
    let catalog = Catalog::builder()
        .register_class(
            ClassDefinition::concrete("Node", |_| Ok(()))
                .with_constructor(vec![ParameterDescriptor::typed("next", "?Node")]),
        )
        .build();
    let resolver = Resolver::new(Arc::new(catalog)).with_config(ResolverConfig {
        enable_circular_dependency_detection: false,
        max_resolution_depth: 4,
    });

    let node = resolver.make("Node", &NamedArguments::new()).unwrap();
    assert_eq!(node.as_object().unwrap().class_name(), "Node");
}
