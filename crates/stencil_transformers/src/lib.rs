//! stencil_transformers: AST transforms run by the host template compiler.
//!
//! The host registers transform factories; for every module it compiles it
//! asks each factory for a fresh transform and runs it over the parsed
//! template. The build-time resolver transform lives here:
//! - `TransformFactory` binds a resolver and a `DependencyMap`
//! - `ResolvingVisitor` walks one template and records free references
//! - `DependencyMap` / `ResolutionCollector` hold the results per module

mod collector;
mod error;
mod factory;
mod resolving;

pub use collector::{DependencyMap, ResolutionCollector};
pub use error::{TransformError, TransformResult};
pub use factory::TransformFactory;
pub use resolving::ResolvingVisitor;

use stencil_ast::node::Template;
use stencil_resolver::ModuleRef;

/// Per-module context handed to transform factories.
#[derive(Debug, Clone, Copy)]
pub struct TransformEnv<'e> {
    /// The module whose template is being compiled.
    pub module_name: &'e ModuleRef,
}

/// A transform instance, used for exactly one template.
pub trait AstTransform {
    fn name(&self) -> &str;

    /// Run over a parsed template. An error aborts the compile.
    fn transform(&mut self, template: &Template<'_>) -> TransformResult<()>;
}

/// Produces a fresh [`AstTransform`] for every module compiled.
pub trait AstTransformFactory {
    fn name(&self) -> &str;

    fn create(&self, env: &TransformEnv<'_>) -> Box<dyn AstTransform>;
}
