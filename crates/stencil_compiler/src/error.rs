//! Compile errors.

use miette::Diagnostic;
use stencil_core::text::LineAndColumn;
use stencil_transformers::TransformError;
use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    /// The parser rejected the source.
    #[error("{module_name}: parse error: {message}")]
    #[diagnostic(code(stencil::compile::parse))]
    Parse {
        module_name: String,
        message: String,
    },

    /// An AST transform failed. `position` is where in the stripped source
    /// the failure happened, or the start of the template when unknown.
    #[error("{module_name}:{position}: {source}")]
    #[diagnostic(code(stencil::compile::transform))]
    Transform {
        module_name: String,
        position: LineAndColumn,
        source: TransformError,
    },

    #[error("failed to serialize compiled template: {0}")]
    #[diagnostic(code(stencil::compile::serialize))]
    Serialize(#[from] serde_json::Error),
}

impl CompileError {
    /// A parse error for `module_name`.
    pub fn parse(module_name: &str, message: impl Into<String>) -> Self {
        CompileError::Parse {
            module_name: module_name.to_string(),
            message: message.into(),
        }
    }

    /// The transform error underneath, if any.
    pub fn transform_error(&self) -> Option<&TransformError> {
        match self {
            CompileError::Transform { source, .. } => Some(source),
            _ => None,
        }
    }
}
