//! Compiler setup: registers the build-time resolver with a host compiler.

use crate::error::CompileResult;
use crate::plugin::{Plugin, PluginSet};
use crate::{PrecompileOptions, TemplateCompiler};
use log::debug;
use serde_json::Value;
use std::rc::Rc;
use stencil_core::text::strip_bom;
use stencil_emitter::{CompiledOutput, OutputAssembler};
use stencil_options::{merge_environment, EmitOptions, StencilConfig};
use stencil_resolver::{Resolution, Resolver, StaticResolver};
use stencil_transformers::{DependencyMap, TransformFactory};

/// A host compiler with the resolver transform registered.
///
/// Owns the one [`DependencyMap`] its transform writes to, so separate
/// setups never share entries.
pub struct TemplateCompilerSetup<C> {
    compiler: C,
    dependencies: DependencyMap,
    assembler: OutputAssembler,
}

/// Register `plugins` and the resolver transform with `compiler`, then merge
/// `env` into its environment.
///
/// User plugins go first, kind by kind, so the resolver sees the tree after
/// every user transform has run.
pub fn setup<C: TemplateCompiler>(
    mut compiler: C,
    resolver: Rc<dyn Resolver>,
    env: &Value,
    plugins: PluginSet,
) -> TemplateCompilerSetup<C> {
    let dependencies = DependencyMap::new();

    for plugin in plugins {
        compiler.register_plugin(plugin);
    }
    let factory = TransformFactory::new(resolver, dependencies.clone());
    compiler.register_plugin(Plugin::AstTransform(Rc::new(factory)));

    let merged = merge_environment(compiler.environment(), env);
    compiler.set_environment(merged);

    TemplateCompilerSetup {
        compiler,
        dependencies,
        assembler: OutputAssembler::new(),
    }
}

/// [`setup`] with a [`StaticResolver`], environment and emit options taken
/// from a configuration file.
pub fn setup_from_config<C: TemplateCompiler>(
    compiler: C,
    config: &StencilConfig,
    plugins: PluginSet,
) -> TemplateCompilerSetup<C> {
    let resolver = StaticResolver::from_config(config.resolver.clone());
    setup(compiler, Rc::new(resolver), &config.env, plugins).with_emit_options(config.emit.clone())
}

impl<C: TemplateCompiler> TemplateCompilerSetup<C> {
    /// Replace the emit options used by `compile`.
    pub fn with_emit_options(mut self, options: EmitOptions) -> Self {
        self.assembler = OutputAssembler::with_options(options);
        self
    }

    /// Compile `contents` as `module_name` and splice in its dependencies.
    ///
    /// A leading byte-order mark is dropped before the host sees the text.
    /// Resolver failures surface here and abort this module.
    pub fn compile(&self, module_name: &str, contents: &str) -> CompileResult<String> {
        let options = PrecompileOptions {
            contents,
            module_name,
        };
        let code = self.compiler.precompile(strip_bom(contents), &options)?;

        let compiled = CompiledOutput {
            module_name: module_name.to_string(),
            code,
        };
        let output = self
            .dependencies
            .with_dependencies(module_name, |deps| self.assembler.assemble(&compiled, deps));
        debug!("compiled {}", module_name);
        Ok(output)
    }

    /// The resolutions recorded by the last compile of `module_name`.
    ///
    /// `None` when the module was never compiled by this setup.
    pub fn dependencies_of(&self, module_name: &str) -> Option<Vec<Resolution>> {
        self.dependencies.lookup(module_name)
    }

    /// The configured host compiler.
    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// The map `compile` reads dependencies from.
    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    /// The emit options used by `compile`.
    pub fn emit_options(&self) -> &EmitOptions {
        self.assembler.options()
    }
}
