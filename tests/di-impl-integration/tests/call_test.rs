//! call 与 make_callable 的集成测试
mod common;

use common::{date_time, resolver, DateTime, NonConstructorClass};
use di_abstractions::{Autowire, CallableSpec};
use di_impl::InMemoryContainer;
use infrastructure_common::{NamedArguments, ObjectRef, ResolveError, Value};
use std::sync::Arc;

fn event_arguments(start_at: &ObjectRef) -> NamedArguments {
    NamedArguments::new()
        .with("name", "My Event")
        .with("start_at", start_at.clone())
}

fn assert_event(result: Value, start_at: &ObjectRef) {
    let items = result.as_array().expect("事件应为数组");
    assert_eq!(items[0], Value::from("My Event"));
    assert!(items[1].as_object().unwrap().ptr_eq(start_at));
}

#[test]
fn test_call_on_bound_method() {
    let start_at = date_time("Jan 1, 2020");
    let callable = CallableSpec::bound(ObjectRef::new("NonConstructorClass", NonConstructorClass), "getEvent");

    let result = resolver().call(callable, &event_arguments(&start_at)).unwrap();
    assert_event(result, &start_at);
}

#[test]
fn test_call_on_invokable_object() {
    let start_at = date_time("Jan 1, 2020");
    let callable = CallableSpec::Invokable(ObjectRef::new("InvokableClass", common::InvokableClass));

    let result = resolver().call(callable, &event_arguments(&start_at)).unwrap();
    assert_event(result, &start_at);
}

#[test]
fn test_call_on_static_method() {
    let start_at = date_time("Jan 1, 2020");
    let callable = CallableSpec::static_method("StaticMethodClass", "getEvent");

    let result = resolver().call(callable, &event_arguments(&start_at)).unwrap();
    assert_event(result, &start_at);
}

#[test]
fn test_call_on_string_targets() {
    let start_at = date_time("Jan 1, 2020");
    let resolver = resolver();

    for target in [
        "NonConstructorClass@getEvent",
        "NonConstructorClass::getStaticEvent",
        "StaticMethodClass::getEvent",
        "InvokableClass",
    ] {
        let result = resolver.call(target, &event_arguments(&start_at)).unwrap();
        assert_event(result, &start_at);
    }
}

#[test]
fn test_call_on_function() {
    let arguments = NamedArguments::new()
        .with("str", "PLUMB")
        .with("string", "RESOLVE");

    let value = resolver().call("strtolower", &arguments).unwrap();
    assert_eq!(value, Value::from("resolve"));
}

#[test]
fn test_call_constructs_missing_dependency() {
    let result = resolver()
        .call("InvokableClass", &NamedArguments::new().with("name", "Launch"))
        .unwrap();

    let items = result.as_array().unwrap();
    assert_eq!(items[0], Value::from("Launch"));
    let start_at = items[1].as_object().unwrap();
    assert_eq!(start_at.downcast_ref::<DateTime>(), Some(&DateTime("now".to_string())));
}

#[test]
fn test_call_prefers_registry_dependency() {
    let registered = date_time("registered");
    let container = InMemoryContainer::new().with("DateTime", registered.clone());
    let resolver = resolver().with_container(Arc::new(container));

    let result = resolver
        .call("NonConstructorClass@getEvent", &NamedArguments::new().with("name", "My Event"))
        .unwrap();
    assert_event(result, &registered);
}

#[test]
fn test_call_fails_before_invocation() {
    let error = resolver()
        .call("strtolower", &NamedArguments::new())
        .unwrap_err();
    assert!(matches!(error, ResolveError::ParameterResolution { ref name, .. } if name == "string"));
}

#[test]
fn test_make_callable_invokable() {
    let callable = resolver().make_callable("InvokableClass").unwrap();
    assert!(matches!(callable, CallableSpec::Invokable(_)));
}

#[test]
fn test_make_callable_instance_method() {
    let callable = resolver().make_callable("NonConstructorClass@getEvent").unwrap();
    assert!(matches!(callable, CallableSpec::BoundMethod { ref method, .. } if method == "getEvent"));
}

#[test]
fn test_non_callable_string_is_callable_resolution_error() {
    let error = resolver()
        .make_callable("NonConstructorClass@notAMethod")
        .unwrap_err();
    assert!(error.is_callable_resolution());
    assert!(error.to_string().contains("NonConstructorClass@notAMethod"));
}

#[test]
fn test_callable_passes_through() {
    let input = CallableSpec::bound(ObjectRef::new("NonConstructorClass", NonConstructorClass), "getEvent");

    let callable = resolver().make_callable(input.clone()).unwrap();
    assert_eq!(callable, input);
}

#[test]
fn test_parameters_for_callable_shapes() {
    let resolver = resolver();
    let shapes = [
        CallableSpec::bound(ObjectRef::new("NonConstructorClass", NonConstructorClass), "getEvent"),
        CallableSpec::Invokable(ObjectRef::new("InvokableClass", common::InvokableClass)),
        CallableSpec::static_method("StaticMethodClass", "getEvent"),
    ];

    for callable in shapes {
        let parameters = resolver.parameters_for(&callable).unwrap();
        let names: Vec<_> = parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["name", "start_at"]);
        assert_eq!(parameters[1].declared_type.as_ref().unwrap().to_string(), "DateTime");
    }
}
