//! Host-style invocation through the registry.
//!
//! These tests drive builtins the way a forward-chaining engine would: look
//! the builtin up by name, resolve arguments against a binding environment
//! that earlier rule atoms have filled in, and keep only the environments in
//! which the call succeeded.

use std::sync::Arc;
use std::thread;

use rule_date_builtins::{
    AddDays, AddDaysOptions, BindingEnvironment, Bindings, Builtin, BuiltinError,
    BuiltinRegistry, Datatype, InputPolicy, Literal, Node,
};

fn env_with(pairs: &[(&str, Literal)]) -> Bindings {
    let mut env = Bindings::new();
    for (name, lit) in pairs {
        assert!(env.bind(&Node::variable(*name), lit.clone().into()));
    }
    env
}

#[test]
fn filters_candidate_bindings() {
    let registry = BuiltinRegistry::with_date_builtins();
    let add_days = registry.get("add_days").unwrap();

    // Rule body: task(?t, ?start), grace(?t, ?n), add_days(?start, ?n, ?due)
    let candidates = vec![
        env_with(&[
            ("start", Literal::new("2020-02-28", Datatype::Date)),
            ("n", Literal::integer(1)),
        ]),
        env_with(&[
            ("start", Literal::new("2021-02-28T09:00:00Z", Datatype::DateTime)),
            ("n", Literal::integer(1)),
        ]),
        env_with(&[
            ("start", Literal::string("next tuesday")),
            ("n", Literal::integer(1)),
        ]),
        env_with(&[
            ("start", Literal::new("2020-01-01", Datatype::Date)),
            ("n", Literal::new("0.5", Datatype::Decimal)),
        ]),
    ];

    let args = [
        Node::variable("start"),
        Node::variable("n"),
        Node::variable("due"),
    ];
    let fired: Vec<String> = candidates
        .into_iter()
        .filter_map(|mut env| {
            let ok = add_days.body_call(&args, &mut env).unwrap();
            ok.then(|| env.get("due").unwrap().to_string())
        })
        .collect();

    assert_eq!(
        fired,
        vec![
            "\"2020-02-29\"^^xsd:date".to_string(),
            "\"2021-03-01Z\"^^xsd:date".to_string(),
        ]
    );
}

#[test]
fn lookup_by_uri_and_name_agree() {
    let registry = BuiltinRegistry::with_date_builtins();
    let by_name = registry.get(AddDays::NAME).unwrap();
    let by_uri = registry.get_by_uri(&by_name.uri()).unwrap();
    assert_eq!(by_uri.name(), "add_days");
    assert!(registry.get_by_uri("urn:unknown").is_none());
}

#[test]
fn strict_policy_replaces_default() {
    let mut registry = BuiltinRegistry::with_date_builtins();
    registry.register(Arc::new(AddDays::with_options(AddDaysOptions {
        input_policy: InputPolicy::DateTimeOnly,
    })));
    let add_days = registry.get("add_days").unwrap();

    let mut env = Bindings::new();
    let args = [
        Node::from(Literal::new("2020-02-28", Datatype::Date)),
        Node::from(Literal::integer(1)),
        Node::variable("due"),
    ];
    assert!(!add_days.body_call(&args, &mut env).unwrap());
}

#[test]
fn arity_errors_surface_to_host() {
    let registry = BuiltinRegistry::with_date_builtins();
    let add_days = registry.get("add_days").unwrap();
    let mut env = Bindings::new();
    let err = add_days
        .body_call(&[Node::variable("a")], &mut env)
        .unwrap_err();
    assert!(matches!(err, BuiltinError::ArityMismatch { actual: 1, .. }));
}

#[test]
fn shared_across_threads() {
    let registry = Arc::new(BuiltinRegistry::with_date_builtins());

    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let add_days = registry.get("add_days").unwrap();
                let mut env = Bindings::new();
                let args = [
                    Node::from(Literal::new("2020-02-27", Datatype::Date)),
                    Node::from(Literal::integer(i)),
                    Node::variable("out"),
                ];
                assert!(add_days.body_call(&args, &mut env).unwrap());
                env.get("out")
                    .and_then(Node::as_literal)
                    .map(|lit| lit.lexical().to_string())
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec!["2020-02-27", "2020-02-28", "2020-02-29", "2020-03-01"]
    );
}
