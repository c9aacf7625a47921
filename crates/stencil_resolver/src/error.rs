//! Resolver errors.

use crate::resolution::{ModuleRef, ReferenceKind};
use miette::Diagnostic;
use thiserror::Error;

pub type ResolveResult<T> = Result<T, ResolveError>;

/// A resolver could not produce an answer for a free reference.
///
/// This is distinct from "no resolution" (`Ok(None)`), which leaves the
/// reference to default runtime lookup.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("unable to resolve {kind} `{name}` referenced from {module}")]
    #[diagnostic(code(stencil::resolve::unresolved))]
    Unresolved {
        kind: ReferenceKind,
        name: String,
        module: ModuleRef,
    },

    #[error("resolver failed: {message}")]
    #[diagnostic(code(stencil::resolve::other))]
    Other { message: String },
}
