//! Shared fixtures for compiler tests.

#![allow(dead_code)]

use std::cell::RefCell;
use stencil_ast::node::{Statement, Template};
use stencil_compiler::{CompileError, CompileResult, ParseOptions, TemplateParser};
use stencil_core::arena::TemplateArena;
use stencil_nodebuilder::TemplateBuilder;
use stencil_resolver::{
    ModuleImportSpec, ModuleRef, ReferenceKind, Resolution, ResolveError, ResolveResult, Resolver,
    StaticResolver,
};

/// A whitespace-separated token parser.
///
/// `{{name}}` is a mustache, `<Name>` an empty element, anything else text.
pub struct WordParser;

impl TemplateParser for WordParser {
    fn parse<'a>(
        &self,
        arena: &'a TemplateArena,
        source: &str,
        options: &ParseOptions<'_>,
    ) -> CompileResult<Template<'a>> {
        let b = TemplateBuilder::new(arena);
        let mut statements = Vec::new();
        let mut start = None;
        let bounds = source.char_indices().chain(std::iter::once((source.len(), ' ')));
        for (i, c) in bounds {
            if !c.is_whitespace() {
                start.get_or_insert(i);
                continue;
            }
            if let Some(s) = start.take() {
                let word = &source[s..i];
                statements.push(word_statement(b.at(s as u32, i as u32), word, options)?);
            }
        }
        Ok(b.template(statements))
    }
}

fn word_statement<'a>(
    b: TemplateBuilder<'a>,
    word: &str,
    options: &ParseOptions<'_>,
) -> CompileResult<Statement<'a>> {
    if let Some(inner) = word.strip_prefix("{{").and_then(|w| w.strip_suffix("}}")) {
        if inner.is_empty() {
            return Err(CompileError::parse(options.module_name, "empty mustache"));
        }
        return Ok(b.mustache(b.path(inner), vec![], vec![]));
    }
    if let Some(tag) = word.strip_prefix('<').and_then(|w| w.strip_suffix('>')) {
        return Ok(b.element(tag.trim_end_matches('/'), vec![]));
    }
    Ok(b.text(word))
}

/// Ignores the source and builds a fixed tree.
pub struct FixedParser(pub for<'a> fn(TemplateBuilder<'a>) -> Template<'a>);

impl TemplateParser for FixedParser {
    fn parse<'a>(
        &self,
        arena: &'a TemplateArena,
        _source: &str,
        _options: &ParseOptions<'_>,
    ) -> CompileResult<Template<'a>> {
        Ok((self.0)(TemplateBuilder::new(arena)))
    }
}

/// Delegates to a `StaticResolver`, logging every call and failing on
/// names listed in `failing`.
pub struct RecordingResolver {
    inner: StaticResolver,
    failing: Vec<&'static str>,
    pub calls: RefCell<Vec<(ReferenceKind, String, String)>>,
}

impl RecordingResolver {
    pub fn new(inner: StaticResolver) -> Self {
        Self {
            inner,
            failing: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, name: &'static str) -> Self {
        self.failing.push(name);
        self
    }

    pub fn called_names(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, name, _)| name.clone()).collect()
    }

    fn call(
        &self,
        kind: ReferenceKind,
        name: &str,
        from: &ModuleRef,
    ) -> ResolveResult<Option<Resolution>> {
        self.calls
            .borrow_mut()
            .push((kind, name.to_string(), from.to_string()));
        if self.failing.iter().any(|f| *f == name) {
            return Err(ResolveError::Other {
                message: format!("{name} is broken"),
            });
        }
        self.inner.resolve(kind, name, from)
    }
}

impl Resolver for RecordingResolver {
    fn resolve_sub_expression(&self, name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        self.call(ReferenceKind::SubExpression, name, from)
    }

    fn resolve_mustache(&self, name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        self.call(ReferenceKind::Mustache, name, from)
    }

    fn resolve_element(&self, tag_name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        self.call(ReferenceKind::Element, tag_name, from)
    }
}

/// Helpers `t` and `format-date`, component `x-foo` with class and template.
pub fn app_resolver() -> StaticResolver {
    StaticResolver::new()
        .helper("t", "helper:t", "app/helpers/t")
        .helper("format-date", "helper:format-date", "app/helpers/format-date")
        .component(
            "x-foo",
            vec![
                ModuleImportSpec::new("component:x-foo", "app/components/x-foo"),
                ModuleImportSpec::new("template:components/x-foo", "app/templates/components/x-foo"),
            ],
        )
}
