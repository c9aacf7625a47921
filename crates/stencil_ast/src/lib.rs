//! stencil_ast: Abstract Syntax Tree definitions for templates.
//!
//! The host template compiler parses source text into these nodes and
//! drives traversal through the `TemplateVisitor` trait. Plugins observe
//! the tree through visitor callbacks; they never parse.

pub mod node;
pub mod visitor;

// Re-export key types
pub use node::*;
pub use visitor::TemplateVisitor;
