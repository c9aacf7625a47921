//! Transform errors.

use miette::Diagnostic;
use stencil_core::text::TextRange;
use stencil_resolver::ResolveError;
use thiserror::Error;

pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Debug, Error, Diagnostic)]
pub enum TransformError {
    /// The resolver failed on a free reference.
    #[error("while resolving `{name}`: {source}")]
    #[diagnostic(code(stencil::transform::resolve))]
    Resolve {
        name: String,
        range: TextRange,
        source: ResolveError,
    },

    /// A third-party transform rejected the template.
    #[error("plugin `{plugin}` failed: {message}")]
    #[diagnostic(code(stencil::transform::plugin))]
    Plugin {
        plugin: String,
        message: String,
        range: Option<TextRange>,
    },
}

impl TransformError {
    /// Where in the template the failure happened, if known.
    pub fn range(&self) -> Option<TextRange> {
        match self {
            TransformError::Resolve { range, .. } => Some(*range),
            TransformError::Plugin { range, .. } => *range,
        }
    }
}
