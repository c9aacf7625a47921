//! Resolution data: what a free reference turned into.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of the module that owns a template, e.g. `app/templates/index`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleRef(String);

impl ModuleRef {
    /// Create a module reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The module identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ModuleRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ModuleRef {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One module the compiled template needs at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleImportSpec {
    /// The name the compiled template looks up at runtime.
    pub runtime_name: String,
    /// The module to import to obtain that value.
    pub path: String,
}

impl ModuleImportSpec {
    /// An import of `path`, registered at runtime as `runtime_name`.
    pub fn new(runtime_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            runtime_name: runtime_name.into(),
            path: path.into(),
        }
    }
}

/// The answer for one free reference: zero or more module imports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub modules: Vec<ModuleImportSpec>,
}

impl Resolution {
    /// A resolution importing `modules`, in order.
    pub fn new(modules: Vec<ModuleImportSpec>) -> Self {
        Self { modules }
    }

    /// A resolution importing a single module.
    pub fn single(runtime_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            modules: vec![ModuleImportSpec::new(runtime_name, path)],
        }
    }

    /// Whether the resolution imports nothing.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Which kind of node a reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `(name ...)`
    SubExpression,
    /// `{{name ...}}`
    Mustache,
    /// `<Name ...>`
    Element,
}

impl ReferenceKind {
    /// The name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::SubExpression => "sub-expression",
            ReferenceKind::Mustache => "mustache",
            ReferenceKind::Element => "element",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
