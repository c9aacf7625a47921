//! stencil_resolver: The resolver capability and resolution data.
//!
//! A resolver decides what a free template reference maps to. The
//! transform pass only calls it; this crate defines the contract, the
//! data it returns, and a table-driven implementation for hosts that know
//! their helpers and components up front.

mod error;
mod resolution;
mod resolver;
mod static_resolver;

pub use error::{ResolveError, ResolveResult};
pub use resolution::{ModuleImportSpec, ModuleRef, ReferenceKind, Resolution};
pub use resolver::Resolver;
pub use static_resolver::{looks_like_component, MissingPolicy, ResolverConfig, StaticResolver};
