//! stencil_emitter: Final module text for a compiled template.
//!
//! Splices the dependencies collected for a module ahead of its compiled
//! template:
//! 1. one `import` plus one runtime registration per module import
//! 2. a single `export default` wrapping the compiled template
//!
//! Identical imports are not merged; each gets its own local binding.

use log::debug;
use stencil_options::EmitOptions;
use stencil_resolver::{ModuleImportSpec, Resolution};

/// The compiler's output for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledOutput {
    pub module_name: String,
    /// The compiled template expression, opaque to the assembler.
    pub code: String,
}

/// Builds the final module text.
#[derive(Debug, Clone, Default)]
pub struct OutputAssembler {
    options: EmitOptions,
}

impl OutputAssembler {
    /// An assembler with the default emit options.
    pub fn new() -> Self {
        Self::default()
    }

    /// An assembler with custom emit options.
    pub fn with_options(options: EmitOptions) -> Self {
        Self { options }
    }

    /// The emit options in use.
    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Assemble `compiled` with the resolutions recorded for its module.
    ///
    /// `deps` is `None` when the module was never traversed; that emits the
    /// same text as an empty list.
    pub fn assemble(&self, compiled: &CompiledOutput, deps: Option<&[Resolution]>) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut counter = 0usize;

        for resolution in deps.unwrap_or_default() {
            for spec in &resolution.modules {
                let binding = format!("{}{}", self.options.binding_prefix, counter);
                counter += 1;
                lines.push(self.import_line(&binding, spec));
                lines.push(self.registration_line(&binding, spec));
            }
        }
        lines.push(format!(
            "export default {}({});",
            self.options.template_factory, compiled.code
        ));

        debug!(
            "assembled {} with {} import(s)",
            compiled.module_name, counter
        );
        lines.join("\n")
    }

    fn import_line(&self, binding: &str, spec: &ModuleImportSpec) -> String {
        format!("import {} from {};", binding, double_quoted(&spec.path))
    }

    fn registration_line(&self, binding: &str, spec: &ModuleImportSpec) -> String {
        format!(
            "{}('{}', function(){{ return {}}});",
            self.options.registry_callee,
            escape_single_quoted(&spec.runtime_name),
            binding
        )
    }
}

/// A JavaScript string literal in double quotes.
fn double_quoted(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Escape the contents of a single-quoted JavaScript string literal.
fn escape_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
