//! stencil_core: Core utilities for the stencil template dependency resolver.
//!
//! Provides the template arena, text ranges and line maps, and the
//! Fx-hashed collections used by the other crates.

pub mod arena;
pub mod collections;
pub mod text;

// Re-export commonly used types
pub use arena::TemplateArena;
pub use collections::FxIndexMap;
pub use text::{strip_bom, LineAndColumn, LineMap, TextRange};
