//! stencil_compiler: Template compiler orchestration.
//!
//! Wires the build-time resolver into a host template compiler:
//! - `PluginSet` / `Plugin` describe what gets registered with the host
//! - `TemplateCompiler` is the host service contract
//! - `WirePrecompiler` is a reference host that delegates parsing to a
//!   `TemplateParser` and emits the tree as JSON
//! - `setup` returns a `TemplateCompilerSetup` exposing `compile` and
//!   `dependencies_of`

mod error;
mod plugin;
mod precompiler;
mod setup;

pub use error::{CompileError, CompileResult};
pub use plugin::{Plugin, PluginKind, PluginSet, SyntaxExtension};
pub use precompiler::{ParseOptions, TemplateParser, WirePrecompiler};
pub use setup::{setup, setup_from_config, TemplateCompilerSetup};

use stencil_options::EnvironmentConfig;

/// Per-call options for [`TemplateCompiler::precompile`].
#[derive(Debug, Clone, Copy)]
pub struct PrecompileOptions<'s> {
    /// The source as it was read, before byte-order-mark stripping.
    pub contents: &'s str,
    pub module_name: &'s str,
}

/// The host template compiler.
///
/// Parses template text, applies every registered AST transform and returns
/// compiled template code. The code is opaque to callers.
pub trait TemplateCompiler {
    fn register_plugin(&mut self, plugin: Plugin);

    fn environment(&self) -> &EnvironmentConfig;

    fn set_environment(&mut self, env: EnvironmentConfig);

    fn precompile(&self, source: &str, options: &PrecompileOptions<'_>) -> CompileResult<String>;
}
