//! A reference host compiler.
//!
//! `WirePrecompiler` owns the plugin registrations and the environment, and
//! leaves the text-to-AST step to a [`TemplateParser`]. Its compiled code is
//! the transformed tree serialized as JSON.

use crate::error::{CompileError, CompileResult};
use crate::plugin::{Plugin, SyntaxExtension};
use crate::{PrecompileOptions, TemplateCompiler};
use log::{debug, trace};
use serde::Serialize;
use std::rc::Rc;
use stencil_ast::node::{Block, Template};
use stencil_core::arena::TemplateArena;
use stencil_core::text::{LineAndColumn, LineMap};
use stencil_options::EnvironmentConfig;
use stencil_resolver::ModuleRef;
use stencil_transformers::{AstTransformFactory, TransformEnv, TransformError};

/// What a parser gets to see besides the source.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions<'p> {
    pub module_name: &'p str,
    pub syntax_extensions: &'p [SyntaxExtension],
    pub environment: &'p EnvironmentConfig,
}

impl ParseOptions<'_> {
    /// Whether any registered syntax extension claims `keyword`.
    pub fn is_extension_keyword(&self, keyword: &str) -> bool {
        self.syntax_extensions.iter().any(|ext| ext.has_keyword(keyword))
    }
}

/// Turns template text into an arena-allocated AST.
pub trait TemplateParser {
    fn parse<'a>(
        &self,
        arena: &'a TemplateArena,
        source: &str,
        options: &ParseOptions<'_>,
    ) -> CompileResult<Template<'a>>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTemplate<'t, 'a> {
    module_name: &'t str,
    block: &'t Block<'a>,
}

pub struct WirePrecompiler<P> {
    parser: P,
    transforms: Vec<Rc<dyn AstTransformFactory>>,
    syntax_extensions: Vec<SyntaxExtension>,
    environment: EnvironmentConfig,
}

impl<P: TemplateParser> WirePrecompiler<P> {
    /// Create a precompiler with no plugins and an empty environment.
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            transforms: Vec::new(),
            syntax_extensions: Vec::new(),
            environment: EnvironmentConfig::default(),
        }
    }

    /// The parser templates are handed to.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Names of the registered AST transforms, in the order they run.
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|factory| factory.name()).collect()
    }

    /// Registered syntax extensions, in registration order.
    pub fn syntax_extensions(&self) -> &[SyntaxExtension] {
        &self.syntax_extensions
    }

    fn transform_failed(&self, module_name: &str, source: &str, error: TransformError) -> CompileError {
        let position = error
            .range()
            .map(|range| LineMap::new(source).line_and_column_of(range.pos))
            .unwrap_or(LineAndColumn::new(0, 0));
        CompileError::Transform {
            module_name: module_name.to_string(),
            position,
            source: error,
        }
    }
}

impl<P: TemplateParser> TemplateCompiler for WirePrecompiler<P> {
    fn register_plugin(&mut self, plugin: Plugin) {
        debug!("registering {} plugin `{}`", plugin.kind(), plugin.name());
        match plugin {
            Plugin::AstTransform(factory) => self.transforms.push(factory),
            Plugin::SyntaxExtension(ext) => self.syntax_extensions.push(ext),
        }
    }

    fn environment(&self) -> &EnvironmentConfig {
        &self.environment
    }

    fn set_environment(&mut self, env: EnvironmentConfig) {
        self.environment = env;
    }

    fn precompile(&self, source: &str, options: &PrecompileOptions<'_>) -> CompileResult<String> {
        let arena = TemplateArena::new();
        let parse_options = ParseOptions {
            module_name: options.module_name,
            syntax_extensions: &self.syntax_extensions,
            environment: &self.environment,
        };
        let template = self.parser.parse(&arena, source, &parse_options)?;

        let module_ref = ModuleRef::from(options.module_name);
        let env = TransformEnv {
            module_name: &module_ref,
        };
        for factory in &self.transforms {
            trace!("running `{}` over {}", factory.name(), module_ref);
            let mut transform = factory.create(&env);
            transform
                .transform(&template)
                .map_err(|error| self.transform_failed(options.module_name, source, error))?;
        }

        let wire = WireTemplate {
            module_name: options.module_name,
            block: &template.body,
        };
        let code = serde_json::to_string(&wire)?;
        debug!(
            "precompiled {} ({} arena bytes)",
            options.module_name,
            arena.allocated_bytes()
        );
        Ok(code)
    }
}
