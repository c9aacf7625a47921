//! The build-time resolver transform.
//!
//! Walks one template, tracking the block parameters of block statements,
//! and hands every free sub-expression callee, mustache callee and element
//! tag to the resolver. A name is bound when it equals a block parameter in
//! scope; bound names never reach the resolver. Each occurrence is
//! resolved on its own; nothing is cached within a traversal.

use crate::collector::ResolutionCollector;
use crate::error::{TransformError, TransformResult};
use crate::factory::TransformFactory;
use crate::AstTransform;
use log::{debug, trace};
use std::rc::Rc;
use stencil_ast::node::*;
use stencil_ast::visitor::{walk_block, walk_mustache, walk_sub_expression};
use stencil_ast::TemplateVisitor;
use stencil_binder::ScopeTracker;
use stencil_core::text::TextRange;
use stencil_resolver::{ModuleRef, ReferenceKind, Resolver};

pub struct ResolvingVisitor {
    resolver: Rc<dyn Resolver>,
    collector: ResolutionCollector,
    /// Shared with the scope guards held across `walk_block`.
    scopes: Rc<ScopeTracker>,
}

impl ResolvingVisitor {
    /// Create a visitor recording into `collector`, with an empty scope stack.
    pub fn new(resolver: Rc<dyn Resolver>, collector: ResolutionCollector) -> Self {
        Self {
            resolver,
            collector,
            scopes: Rc::new(ScopeTracker::new()),
        }
    }

    /// The module being traversed.
    pub fn module_name(&self) -> &ModuleRef {
        self.collector.module()
    }

    /// The scope stack, empty outside a traversal.
    pub fn scopes(&self) -> &ScopeTracker {
        &self.scopes
    }

    /// Resolve `name` unless it is a block parameter in scope.
    fn resolve_reference(&self, kind: ReferenceKind, name: &str, range: TextRange) -> TransformResult<()> {
        if self.scopes.is_bound(name) {
            trace!("`{}` is bound locally, skipping", name);
            return Ok(());
        }

        let module = self.collector.module();
        let resolution = self
            .resolver
            .resolve(kind, name, module)
            .map_err(|source| TransformError::Resolve {
                name: name.to_string(),
                range,
                source,
            })?;

        if let Some(resolution) = resolution {
            debug!(
                "{} `{}` in {} resolved to {} module(s)",
                kind,
                name,
                module,
                resolution.modules.len()
            );
            self.collector.record(resolution);
        }
        Ok(())
    }
}

impl<'a> TemplateVisitor<'a> for ResolvingVisitor {
    type Error = TransformError;

    fn visit_block(&mut self, node: &Block<'a>) -> TransformResult<()> {
        let scopes = Rc::clone(&self.scopes);
        let _scope = scopes.enter_scope(node.block_params);
        walk_block(self, node)
    }

    fn visit_mustache(&mut self, node: &MustacheStatement<'a>) -> TransformResult<()> {
        if let Some(name) = node.path.callee_name() {
            self.resolve_reference(ReferenceKind::Mustache, name, node.path.range())?;
        }
        walk_mustache(self, node)
    }

    fn visit_sub_expression(&mut self, node: &SubExpression<'a>) -> TransformResult<()> {
        if let Some(name) = node.path.callee_name() {
            self.resolve_reference(ReferenceKind::SubExpression, name, node.path.range())?;
        }
        walk_sub_expression(self, node)
    }

    /// Element block params open no scope; only block statements and the
    /// template root do.
    fn visit_element(&mut self, node: &ElementNode<'a>) -> TransformResult<()> {
        self.resolve_reference(ReferenceKind::Element, node.tag, node.range)?;
        for attr in node.attributes.iter() {
            self.visit_attribute(attr)?;
        }
        for modifier in node.modifiers.iter() {
            self.visit_modifier(modifier)?;
        }
        walk_block(self, &node.body)
    }
}

impl AstTransform for ResolvingVisitor {
    fn name(&self) -> &str {
        TransformFactory::NAME
    }

    fn transform(&mut self, template: &Template<'_>) -> TransformResult<()> {
        let result = self.visit_template(template);
        debug_assert!(self.scopes.is_empty(), "scope stack leaked past traversal");
        result
    }
}
