//! Binds a resolver and a dependency map into a transform factory.

use crate::collector::DependencyMap;
use crate::resolving::ResolvingVisitor;
use crate::{AstTransform, AstTransformFactory, TransformEnv};
use std::rc::Rc;
use stencil_resolver::Resolver;

/// Produces one [`ResolvingVisitor`] per compiled module.
///
/// Every visitor shares the factory's resolver and writes into a freshly
/// reset entry of the factory's [`DependencyMap`].
#[derive(Clone)]
pub struct TransformFactory {
    resolver: Rc<dyn Resolver>,
    dependencies: DependencyMap,
}

impl TransformFactory {
    /// Plugin name reported to the host compiler.
    pub const NAME: &'static str = "stencil-build-time-resolver";

    /// Bind `resolver` and `dependencies` into a factory.
    pub fn new(resolver: Rc<dyn Resolver>, dependencies: DependencyMap) -> Self {
        Self {
            resolver,
            dependencies,
        }
    }

    /// The map every visitor from this factory writes to.
    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    /// Begin collection for `env.module_name` and return its visitor.
    pub fn create_visitor(&self, env: &TransformEnv<'_>) -> ResolvingVisitor {
        let collector = self.dependencies.begin_module(env.module_name);
        ResolvingVisitor::new(Rc::clone(&self.resolver), collector)
    }
}

impl AstTransformFactory for TransformFactory {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn create(&self, env: &TransformEnv<'_>) -> Box<dyn AstTransform> {
        Box::new(self.create_visitor(env))
    }
}
