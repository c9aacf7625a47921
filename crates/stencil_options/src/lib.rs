//! stencil_options: Configuration for the template dependency resolver.
//!
//! Holds the environment handed to the host template compiler (feature
//! flags plus general settings), the emit options used when assembling
//! output, and the JSON configuration file that bundles both with a
//! resolver table.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stencil_core::collections::FxIndexMap;
use stencil_resolver::ResolverConfig;
use thiserror::Error;

/// The key under which an environment object carries feature flags.
pub const FEATURES_KEY: &str = "FEATURES";

/// Settings the host template compiler reads at compile time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Feature flags.
    #[serde(default)]
    pub features: FxIndexMap<String, Value>,
    /// Every other environment setting.
    #[serde(default)]
    pub env: FxIndexMap<String, Value>,
}

impl EnvironmentConfig {
    /// The value of a feature flag, if set.
    pub fn feature(&self, name: &str) -> Option<&Value> {
        self.features.get(name)
    }

    /// Whether a feature flag is set to `true`.
    pub fn is_feature_enabled(&self, name: &str) -> bool {
        matches!(self.features.get(name), Some(Value::Bool(true)))
    }
}

/// Merge an environment object over `base`, returning the result.
///
/// Keys of `overrides["FEATURES"]` (when it is an object) land in
/// `features`; every other top-level key lands in `env`. Later values
/// replace earlier ones. A `null` or non-object `overrides` leaves `base`
/// as is.
pub fn merge_environment(base: &EnvironmentConfig, overrides: &Value) -> EnvironmentConfig {
    let mut merged = base.clone();
    let Some(overrides) = overrides.as_object() else {
        return merged;
    };

    if let Some(features) = overrides.get(FEATURES_KEY).and_then(Value::as_object) {
        for (name, value) in features {
            merged.features.insert(name.clone(), value.clone());
        }
    }
    for (name, value) in overrides {
        if name == FEATURES_KEY {
            continue;
        }
        merged.env.insert(name.clone(), value.clone());
    }
    merged
}

/// How assembled output refers to the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmitOptions {
    /// Callee that registers a runtime name, e.g. `window.define`.
    pub registry_callee: String,
    /// Callee that turns compiled template code into a template.
    pub template_factory: String,
    /// Prefix of the generated local import bindings.
    pub binding_prefix: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            registry_callee: "window.define".to_string(),
            template_factory: "Ember.HTMLBars.template".to_string(),
            binding_prefix: "a".to_string(),
        }
    }
}

/// A stencil configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StencilConfig {
    /// Environment object merged into the compiler's environment.
    #[serde(default)]
    pub env: Value,
    #[serde(default)]
    pub emit: EmitOptions,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    #[diagnostic(code(stencil::config::io))]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    #[diagnostic(code(stencil::config::json))]
    Json(#[from] serde_json::Error),
}

/// Parse a configuration file from a string.
pub fn parse_config(content: &str) -> Result<StencilConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a configuration file from a path.
pub fn parse_config_file(path: &str) -> Result<StencilConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_config(&content)
}
