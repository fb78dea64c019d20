//! Property-based tests for walking and flattening

use crate::{
    ClimberConfig, HandlerInfo, Method, MethodSet, PathPattern, Router, flatten, structure,
};
use proptest::prelude::*;

/// Declarative shape of a generated router.
#[derive(Debug, Clone)]
enum Decl {
    Use(String, bool),
    Route(String, Vec<Method>, bool, Vec<(String, bool)>),
    Mount(String, Vec<Decl>),
}

fn arb_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z]{1,6}",
        1 => "[a-z]{1,4}".prop_map(|name| format!(":{}", name)),
    ]
}

fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..4).prop_map(|segments| format!("/{}", segments.join("/")))
}

fn arb_method() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::ALL.to_vec())
}

fn arb_handler() -> impl Strategy<Value = (String, bool)> {
    ("[a-zA-Z]{1,8}", prop::bool::weighted(0.2))
}

fn arb_decl() -> impl Strategy<Value = Decl> {
    let leaf = prop_oneof![
        ("[a-zA-Z]{1,8}", prop::bool::weighted(0.2)).prop_map(|(name, hidden)| Decl::Use(name, hidden)),
        (
            arb_path(),
            prop::collection::vec(arb_method(), 1..3),
            prop::bool::weighted(0.1),
            prop::collection::vec(arb_handler(), 1..4),
        )
            .prop_map(|(path, methods, all, stack)| Decl::Route(path, methods, all, stack)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        (arb_path(), prop::collection::vec(inner, 0..4))
            .prop_map(|(path, decls)| Decl::Mount(path, decls))
    })
}

fn handler((name, hidden): &(String, bool)) -> HandlerInfo {
    let info = HandlerInfo::named(name.as_str());
    if *hidden { info.hidden() } else { info }
}

fn build(decls: &[Decl]) -> Router {
    decls.iter().fold(Router::new(), |router, decl| match decl {
        Decl::Use(name, hidden) => router.use_middleware(handler(&(name.clone(), *hidden))),
        Decl::Route(path, methods, all, stack) => {
            let set = if *all {
                MethodSet::all()
            } else {
                methods.iter().copied().collect()
            };
            router.route(path, set, stack.iter().map(handler))
        }
        Decl::Mount(path, children) => router.mount(path, build(children)),
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The array form has exactly one record per terminal (URL, method) pair.
    #[test]
    fn prop_flatten_emits_one_record_per_terminal(decls in prop::collection::vec(arb_decl(), 0..6)) {
        let config = ClimberConfig::default();
        let table = structure(&build(&decls), &config);
        let records = flatten(&table, &config);
        prop_assert_eq!(records.len(), table.terminal_count());
        for record in &records {
            let entry = table.get(&record.url, record.method).expect("record comes from table");
            prop_assert_eq!(&record.handler, &entry.handler);
            // own middleware is always the tail of the resolved chain
            prop_assert!(record.middlewares.ends_with(&entry.middlewares));
        }
    }

    /// Flattening is pure: repeated calls agree and the table is untouched.
    #[test]
    fn prop_flatten_is_idempotent(decls in prop::collection::vec(arb_decl(), 0..6)) {
        let config = ClimberConfig::default();
        let table = structure(&build(&decls), &config);
        let snapshot = table.clone();
        prop_assert_eq!(flatten(&table, &config), flatten(&table, &config));
        prop_assert_eq!(table, snapshot);
    }

    /// Hidden handlers never show up in any output.
    #[test]
    fn prop_hidden_handlers_never_emitted(decls in prop::collection::vec(arb_decl(), 0..6)) {
        let config = ClimberConfig::default();
        let router = build(&mark_visibility(&decls));
        let table = structure(&router, &config);
        for (_, methods) in table.iter() {
            for entry in methods.values() {
                for descriptor in entry.middlewares.iter().chain(entry.handler.iter()) {
                    prop_assert!(descriptor.name.starts_with("v_"), "leaked {}", descriptor.name);
                }
            }
        }
        for record in flatten(&table, &config) {
            prop_assert!(record.middlewares.iter().all(|m| m.name.starts_with("v_")));
        }
    }

    /// Literal paths decode to themselves; parameters come back by name.
    #[test]
    fn prop_route_pattern_round_trip(path in arb_path()) {
        prop_assert_eq!(PathPattern::route(&path).decode(), path.clone());
        prop_assert_eq!(PathPattern::mount(&path).decode(), path);
    }
}

fn mark_visibility(decls: &[Decl]) -> Vec<Decl> {
    let mark = |name: &String, hidden: bool| {
        if hidden { format!("h_{}", name) } else { format!("v_{}", name) }
    };
    decls
        .iter()
        .map(|decl| match decl {
            Decl::Use(name, hidden) => Decl::Use(mark(name, *hidden), *hidden),
            Decl::Route(path, methods, all, stack) => Decl::Route(
                path.clone(),
                methods.clone(),
                *all,
                stack.iter().map(|(n, h)| (mark(n, *h), *h)).collect(),
            ),
            Decl::Mount(path, children) => Decl::Mount(path.clone(), mark_visibility(children)),
        })
        .collect()
}

#[test]
fn test_all_marker_overrides_explicit_methods() {
    let mut set = MethodSet::only(Method::Get);
    set.all = true;
    assert_eq!(set.expand(), Method::ALL.to_vec());
}
