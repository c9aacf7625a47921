//! The resolver capability.

use crate::error::ResolveResult;
use crate::resolution::{ModuleRef, ReferenceKind, Resolution};

/// Turns free template references into module dependencies.
///
/// Each method receives the referenced name and the module that owns the
/// template. `Ok(None)` means "no static dependency", leaving the reference
/// to default runtime lookup. `Err` aborts the compile of that module.
pub trait Resolver {
    fn resolve_sub_expression(&self, name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>>;

    fn resolve_mustache(&self, name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>>;

    fn resolve_element(&self, tag_name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>>;

    /// Dispatch on the kind of node the reference came from.
    fn resolve(
        &self,
        kind: ReferenceKind,
        name: &str,
        from: &ModuleRef,
    ) -> ResolveResult<Option<Resolution>> {
        match kind {
            ReferenceKind::SubExpression => self.resolve_sub_expression(name, from),
            ReferenceKind::Mustache => self.resolve_mustache(name, from),
            ReferenceKind::Element => self.resolve_element(name, from),
        }
    }
}
