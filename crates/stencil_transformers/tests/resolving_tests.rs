//! Resolver transform tests.
//!
//! Builds templates with `TemplateBuilder`, runs the transform produced by
//! `TransformFactory`, and checks which names reached the resolver and what
//! landed in the dependency map.

use std::cell::RefCell;
use std::rc::Rc;
use stencil_ast::TemplateVisitor;
use stencil_core::text::TextRange;
use stencil_core::TemplateArena;
use stencil_nodebuilder::TemplateBuilder;
use stencil_resolver::{ModuleRef, ReferenceKind, ResolveError, ResolveResult, Resolution, Resolver};
use stencil_transformers::{
    AstTransform, AstTransformFactory, DependencyMap, TransformEnv, TransformError, TransformFactory,
};

/// Resolves every name it knows, fails on names listed in `failing`, and
/// remembers every call.
#[derive(Default)]
struct RecordingResolver {
    known: Vec<&'static str>,
    failing: Vec<&'static str>,
    calls: RefCell<Vec<(ReferenceKind, String, String)>>,
}

impl RecordingResolver {
    fn knowing(known: &[&'static str]) -> Self {
        Self {
            known: known.to_vec(),
            ..Self::default()
        }
    }

    fn answer(&self, kind: ReferenceKind, name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        self.calls
            .borrow_mut()
            .push((kind, name.to_string(), from.to_string()));
        if self.failing.iter().any(|f| *f == name) {
            return Err(ResolveError::Other {
                message: format!("cannot look up {}", name),
            });
        }
        if self.known.iter().any(|k| *k == name) {
            return Ok(Some(Resolution::single(
                format!("{}:{}", kind, name),
                format!("app/{}", name),
            )));
        }
        Ok(None)
    }

    fn called_names(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, name, _)| name.clone()).collect()
    }
}

impl Resolver for RecordingResolver {
    fn resolve_sub_expression(&self, name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        self.answer(ReferenceKind::SubExpression, name, from)
    }

    fn resolve_mustache(&self, name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        self.answer(ReferenceKind::Mustache, name, from)
    }

    fn resolve_element(&self, tag_name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        self.answer(ReferenceKind::Element, tag_name, from)
    }
}

fn setup(resolver: RecordingResolver) -> (Rc<RecordingResolver>, TransformFactory, DependencyMap) {
    let resolver = Rc::new(resolver);
    let dependencies = DependencyMap::new();
    let factory = TransformFactory::new(resolver.clone(), dependencies.clone());
    (resolver, factory, dependencies)
}

fn runtime_names(deps: &[Resolution]) -> Vec<String> {
    deps.iter()
        .flat_map(|r| r.modules.iter().map(|m| m.runtime_name.clone()))
        .collect()
}

// ============================================================================
// Free vs bound references
// ============================================================================

#[test]
fn test_block_param_is_never_resolved() {
    let (resolver, factory, _deps) = setup(RecordingResolver::knowing(&["item"]));
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    // {{#each items as |item|}}{{item}}{{/each}}{{item}}
    let template = b.template(vec![
        b.block_statement(
            b.path("each"),
            vec![b.path("items")],
            b.block(&["item"], vec![b.mustache(b.path("item"), vec![], vec![])]),
            None,
        ),
        b.mustache(b.path("item"), vec![], vec![]),
    ]);

    let module = ModuleRef::from("app/templates/list");
    let mut visitor = factory.create_visitor(&TransformEnv { module_name: &module });
    visitor.transform(&template).unwrap();

    // Only the sibling outside the block is free.
    assert_eq!(resolver.called_names(), vec!["item"]);
    assert_eq!(
        resolver.calls.borrow()[0],
        (ReferenceKind::Mustache, "item".to_string(), "app/templates/list".to_string())
    );
    assert!(visitor.scopes().is_empty());
}

#[test]
fn test_dotted_path_on_block_param_reaches_resolver() {
    let (resolver, factory, deps) = setup(RecordingResolver::knowing(&["ui.title", "ui.Card"]));
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    // {{#let (hash) as |ui|}}{{ui}}{{ui.title}}<ui.Card />{{/let}}
    let template = b.template(vec![b.block_statement(
        b.path("let"),
        vec![b.sub_expr(b.path("hash"), vec![], vec![])],
        b.block(
            &["ui"],
            vec![
                b.mustache(b.path("ui"), vec![], vec![]),
                b.mustache(b.path("ui.title"), vec![], vec![]),
                b.element("ui.Card", vec![]),
            ],
        ),
        None,
    )]);

    let module = ModuleRef::from("m");
    factory
        .create_visitor(&TransformEnv { module_name: &module })
        .transform(&template)
        .unwrap();

    // Only the exact parameter name is bound.
    assert_eq!(resolver.called_names(), vec!["hash", "ui.title", "ui.Card"]);
    assert_eq!(
        runtime_names(&deps.lookup("m").unwrap()),
        vec!["mustache:ui.title", "element:ui.Card"]
    );
}

#[test]
fn test_nested_scopes_and_shadowing() {
    let (resolver, factory, _deps) = setup(RecordingResolver::default());
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    // {{#each rows as |row|}}{{#each row.cells as |cell|}}{{cell}}{{row}}{{/each}}{{cell}}{{/each}}
    let inner = b.block_statement(
        b.path("each"),
        vec![b.path("row.cells")],
        b.block(
            &["cell"],
            vec![
                b.mustache(b.path("cell"), vec![], vec![]),
                b.mustache(b.path("row"), vec![], vec![]),
            ],
        ),
        None,
    );
    let template = b.template(vec![b.block_statement(
        b.path("each"),
        vec![b.path("rows")],
        b.block(&["row"], vec![inner, b.mustache(b.path("cell"), vec![], vec![])]),
        None,
    )]);

    let module = ModuleRef::from("m");
    let mut visitor = factory.create_visitor(&TransformEnv { module_name: &module });
    visitor.transform(&template).unwrap();

    // `cell` after the inner block has left its scope.
    assert_eq!(resolver.called_names(), vec!["cell"]);
    assert!(visitor.scopes().is_empty());
}

#[test]
fn test_element_block_params_open_no_scope() {
    let (resolver, factory, _deps) = setup(RecordingResolver::default());
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    // <Tabs as |Tab|><Tab /></Tabs><Tab />
    let template = b.template(vec![
        b.element_with_params("Tabs", &["Tab"], vec![b.element("Tab", vec![])]),
        b.element("Tab", vec![]),
    ]);

    let module = ModuleRef::from("m");
    let mut visitor = factory.create_visitor(&TransformEnv { module_name: &module });
    visitor.transform(&template).unwrap();

    assert_eq!(resolver.called_names(), vec!["Tabs", "Tab", "Tab"]);
    assert!(visitor.scopes().is_empty());
}

#[test]
fn test_enclosing_block_param_binds_inside_element_body() {
    let (resolver, factory, _deps) = setup(RecordingResolver::default());
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    // {{#each rows as |row|}}<Row as |cell|>{{row}}{{cell}}</Row>{{/each}}
    let template = b.template(vec![b.block_statement(
        b.path("each"),
        vec![b.path("rows")],
        b.block(
            &["row"],
            vec![b.element_with_params(
                "Row",
                &["cell"],
                vec![
                    b.mustache(b.path("row"), vec![], vec![]),
                    b.mustache(b.path("cell"), vec![], vec![]),
                ],
            )],
        ),
        None,
    )]);

    let module = ModuleRef::from("m");
    factory
        .create_visitor(&TransformEnv { module_name: &module })
        .transform(&template)
        .unwrap();

    assert_eq!(resolver.called_names(), vec!["Row", "cell"]);
}

#[test]
fn test_element_param_does_not_bind_its_own_tag() {
    let (resolver, factory, _deps) = setup(RecordingResolver::default());
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    // <Foo as |Foo|></Foo>
    let template = b.template(vec![b.element_with_params("Foo", &["Foo"], vec![])]);

    let module = ModuleRef::from("m");
    factory
        .create_visitor(&TransformEnv { module_name: &module })
        .transform(&template)
        .unwrap();

    assert_eq!(resolver.called_names(), vec!["Foo"]);
}

#[test]
fn test_literal_callees_are_skipped() {
    let (resolver, factory, _deps) = setup(RecordingResolver::default());
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = b.template(vec![
        b.mustache(b.string("plain"), vec![], vec![]),
        b.mustache(b.number(1.0), vec![], vec![]),
        b.mustache(b.null(), vec![], vec![]),
        b.mustache(b.undefined(), vec![], vec![]),
    ]);

    let module = ModuleRef::from("m");
    factory
        .create_visitor(&TransformEnv { module_name: &module })
        .transform(&template)
        .unwrap();

    assert!(resolver.called_names().is_empty());
}

#[test]
fn test_every_reference_kind_reaches_its_method() {
    let (resolver, factory, _deps) = setup(RecordingResolver::default());
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    // <Card title={{t "x"}}>{{format (upper name)}}</Card>
    let template = b.template(vec![b.element_with(
        "Card",
        vec![b.attr("title", b.attr_mustache(b.path("t"), vec![b.string("x")]))],
        vec![],
        &[],
        vec![b.mustache(
            b.path("format"),
            vec![b.sub_expr(b.path("upper"), vec![b.path("name")], vec![])],
            vec![],
        )],
    )]);

    let module = ModuleRef::from("m");
    factory
        .create_visitor(&TransformEnv { module_name: &module })
        .transform(&template)
        .unwrap();

    let kinds: Vec<_> = resolver
        .calls
        .borrow()
        .iter()
        .map(|(kind, name, _)| (*kind, name.clone()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (ReferenceKind::Element, "Card".to_string()),
            (ReferenceKind::Mustache, "t".to_string()),
            (ReferenceKind::Mustache, "format".to_string()),
            (ReferenceKind::SubExpression, "upper".to_string()),
        ]
    );
}

// ============================================================================
// Collection
// ============================================================================

#[test]
fn test_records_in_visit_order_without_dedup() {
    let (_resolver, factory, deps) = setup(RecordingResolver::knowing(&["t", "Card"]));
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = b.template(vec![
        b.mustache(b.path("t"), vec![], vec![]),
        b.element("Card", vec![]),
        b.mustache(b.path("unknown"), vec![], vec![]),
        b.mustache(b.path("t"), vec![], vec![]),
    ]);

    let module = ModuleRef::from("m");
    factory
        .create_visitor(&TransformEnv { module_name: &module })
        .transform(&template)
        .unwrap();

    let recorded = deps.lookup("m").unwrap();
    assert_eq!(runtime_names(&recorded), vec!["mustache:t", "element:Card", "mustache:t"]);
    assert_eq!(recorded[0], recorded[2]);
}

#[test]
fn test_module_without_free_references_has_empty_entry() {
    let (_resolver, factory, deps) = setup(RecordingResolver::default());
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = b.template(vec![b.text("static"), b.comment("nothing here")]);

    let module = ModuleRef::from("m");
    factory
        .create_visitor(&TransformEnv { module_name: &module })
        .transform(&template)
        .unwrap();

    assert_eq!(deps.lookup("m"), Some(vec![]));
    assert_eq!(deps.lookup("other"), None);
}

#[test]
fn test_factory_creates_fresh_visitor_per_module() {
    let (_resolver, factory, deps) = setup(RecordingResolver::knowing(&["t", "x"]));
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let first = b.template(vec![b.mustache(b.path("t"), vec![], vec![])]);
    let second = b.template(vec![b.mustache(b.path("x"), vec![], vec![])]);

    let a = ModuleRef::from("a");
    let mut transform = factory.create(&TransformEnv { module_name: &a });
    assert_eq!(transform.name(), TransformFactory::NAME);
    transform.transform(&first).unwrap();

    let other = ModuleRef::from("b");
    factory.create(&TransformEnv { module_name: &other }).transform(&second).unwrap();

    assert_eq!(runtime_names(&deps.lookup("a").unwrap()), vec!["mustache:t"]);
    assert_eq!(runtime_names(&deps.lookup("b").unwrap()), vec!["mustache:x"]);

    // Re-running module `a` with a different template replaces its entry.
    factory.create(&TransformEnv { module_name: &a }).transform(&second).unwrap();
    assert_eq!(runtime_names(&deps.lookup("a").unwrap()), vec!["mustache:x"]);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_resolver_error_propagates_and_stops_traversal() {
    let (resolver, factory, deps) = setup(RecordingResolver {
        known: vec!["ok"],
        failing: vec!["Broken"],
        ..RecordingResolver::default()
    });
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = b.template(vec![b.block_statement(
        b.path("each"),
        vec![b.path("xs")],
        b.block(
            &["x"],
            vec![
                b.mustache(b.path("ok"), vec![], vec![]),
                b.at(30, 40).element("Broken", vec![]),
                b.mustache(b.path("after"), vec![], vec![]),
            ],
        ),
        None,
    )]);

    let module = ModuleRef::from("m");
    let mut visitor = factory.create_visitor(&TransformEnv { module_name: &module });
    let err = visitor.transform(&template).unwrap_err();

    match &err {
        TransformError::Resolve { name, range, source } => {
            assert_eq!(name, "Broken");
            assert_eq!(*range, TextRange::new(30, 40));
            assert!(matches!(source, ResolveError::Other { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.range(), Some(TextRange::new(30, 40)));
    assert_eq!(err.to_string(), "while resolving `Broken`: resolver failed: cannot look up Broken");

    // Nothing after the failure was looked at, and no scope leaked.
    assert_eq!(resolver.called_names(), vec!["ok", "Broken"]);
    assert!(visitor.scopes().is_empty());
    assert_eq!(runtime_names(&deps.lookup("m").unwrap()), vec!["mustache:ok"]);
}

#[test]
fn test_visit_template_directly_leaves_no_scopes() {
    let (_resolver, factory, _deps) = setup(RecordingResolver::default());
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = b.template(vec![b.element_with_params(
        "List",
        &["a", "b"],
        vec![b.block_statement(b.path("if"), vec![b.path("a")], b.block(&["c"], vec![]), None)],
    )]);

    let module = ModuleRef::from("m");
    let mut visitor = factory.create_visitor(&TransformEnv { module_name: &module });
    assert!(visitor.scopes().is_empty());
    visitor.visit_template(&template).unwrap();
    assert!(visitor.scopes().is_empty());
    assert_eq!(visitor.module_name().as_str(), "m");
}
