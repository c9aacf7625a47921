//! A table-driven resolver.
//!
//! Helpers answer mustache and sub-expression references; components answer
//! element references (and mustaches, for curly invocation). Tables are
//! usually loaded from the `resolver` section of a configuration file.

use crate::error::{ResolveError, ResolveResult};
use crate::resolution::{ModuleImportSpec, ModuleRef, ReferenceKind, Resolution};
use crate::resolver::Resolver;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use stencil_core::collections::FxIndexMap;

lazy_static! {
    /// `Foo`, `Foo::Bar`, or a dashed lowercase name like `x-foo`.
    static ref COMPONENT_TAG: Regex =
        Regex::new(r"^(?:[A-Z][A-Za-z0-9]*(?:::[A-Z][A-Za-z0-9]*)*|[a-z][a-z0-9]*(?:-[a-z0-9]+)+)$")
            .unwrap();
}

/// Whether an element tag names a component rather than a plain HTML tag.
pub fn looks_like_component(tag: &str) -> bool {
    COMPONENT_TAG.is_match(tag)
}

/// What to do with a component-looking tag that is not in the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingPolicy {
    /// Leave it to runtime lookup.
    #[default]
    Ignore,
    /// Fail the build.
    Error,
}

/// Serialized form of a [`StaticResolver`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    #[serde(default)]
    pub helpers: FxIndexMap<String, Vec<ModuleImportSpec>>,
    #[serde(default)]
    pub components: FxIndexMap<String, Vec<ModuleImportSpec>>,
    #[serde(default)]
    pub on_missing: MissingPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    helpers: FxIndexMap<String, Vec<ModuleImportSpec>>,
    components: FxIndexMap<String, Vec<ModuleImportSpec>>,
    on_missing: MissingPolicy,
}

impl StaticResolver {
    /// Create a resolver with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from a deserialized configuration.
    pub fn from_config(config: ResolverConfig) -> Self {
        Self {
            helpers: config.helpers,
            components: config.components,
            on_missing: config.on_missing,
        }
    }

    /// Set what happens to unknown component tags.
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.on_missing = policy;
        self
    }

    /// Register a helper importing a single module.
    pub fn helper(mut self, name: &str, runtime_name: &str, path: &str) -> Self {
        self.helpers
            .insert(name.to_string(), vec![ModuleImportSpec::new(runtime_name, path)]);
        self
    }

    /// Register a component. Components often import a class and a
    /// template, hence the list.
    pub fn component(mut self, name: &str, modules: Vec<ModuleImportSpec>) -> Self {
        self.components.insert(name.to_string(), modules);
        self
    }

    fn lookup(
        table: &FxIndexMap<String, Vec<ModuleImportSpec>>,
        name: &str,
    ) -> Option<Resolution> {
        table.get(name).map(|modules| Resolution::new(modules.clone()))
    }
}

impl Resolver for StaticResolver {
    fn resolve_sub_expression(&self, name: &str, _from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        Ok(Self::lookup(&self.helpers, name))
    }

    fn resolve_mustache(&self, name: &str, _from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        Ok(Self::lookup(&self.helpers, name).or_else(|| Self::lookup(&self.components, name)))
    }

    fn resolve_element(&self, tag_name: &str, from: &ModuleRef) -> ResolveResult<Option<Resolution>> {
        if let Some(resolution) = Self::lookup(&self.components, tag_name) {
            return Ok(Some(resolution));
        }
        if self.on_missing == MissingPolicy::Error && looks_like_component(tag_name) {
            debug!("no component `{}` for {}", tag_name, from);
            return Err(ResolveError::Unresolved {
                kind: ReferenceKind::Element,
                name: tag_name.to_string(),
                module: from.clone(),
            });
        }
        Ok(None)
    }
}
