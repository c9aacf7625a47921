//! stencil_binder: Lexical scope analysis for template traversals.
//!
//! Tracks the block parameters introduced by enclosing blocks so a
//! traversal can tell locally bound names from free references.

mod scope;

pub use scope::{Scope, ScopeGuard, ScopeTracker};
