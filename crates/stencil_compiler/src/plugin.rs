//! Plugin registration.
//!
//! Plugin kinds form a closed set, so a registration is checked when it is
//! built rather than looked up by a string key.

use std::fmt;
use std::rc::Rc;
use stencil_core::collections::FxIndexMap;
use stencil_transformers::AstTransformFactory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    AstTransform,
    SyntaxExtension,
}

impl PluginKind {
    /// The string key this kind registers under.
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginKind::AstTransform => "ast",
            PluginKind::SyntaxExtension => "syntax",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra block keywords the parser should accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxExtension {
    pub name: String,
    pub keywords: Vec<String>,
}

impl SyntaxExtension {
    /// Create an extension claiming `keywords`.
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Whether this extension claims `keyword`.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

#[derive(Clone)]
pub enum Plugin {
    AstTransform(Rc<dyn AstTransformFactory>),
    SyntaxExtension(SyntaxExtension),
}

impl Plugin {
    /// The kind this plugin registers under.
    pub fn kind(&self) -> PluginKind {
        match self {
            Plugin::AstTransform(_) => PluginKind::AstTransform,
            Plugin::SyntaxExtension(_) => PluginKind::SyntaxExtension,
        }
    }

    /// The plugin's display name.
    pub fn name(&self) -> &str {
        match self {
            Plugin::AstTransform(factory) => factory.name(),
            Plugin::SyntaxExtension(ext) => &ext.name,
        }
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

/// User plugins, grouped by kind.
///
/// Kinds keep the order they were first seen in; plugins keep their
/// insertion order within a kind.
#[derive(Debug, Clone, Default)]
pub struct PluginSet {
    by_kind: FxIndexMap<PluginKind, Vec<Plugin>>,
}

impl PluginSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin to the group for its kind.
    pub fn push(&mut self, plugin: Plugin) {
        self.by_kind.entry(plugin.kind()).or_default().push(plugin);
    }

    /// Builder form of [`PluginSet::push`].
    pub fn with(mut self, plugin: Plugin) -> Self {
        self.push(plugin);
        self
    }

    /// The plugins of one kind, in insertion order.
    pub fn of_kind(&self, kind: PluginKind) -> &[Plugin] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every plugin, kind by kind.
    pub fn iter(&self) -> impl Iterator<Item = &Plugin> {
        self.by_kind.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for PluginSet {
    type Item = Plugin;
    type IntoIter = std::iter::Flatten<indexmap::map::IntoValues<PluginKind, Vec<Plugin>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_kind.into_values().flatten()
    }
}

impl FromIterator<Plugin> for PluginSet {
    fn from_iter<I: IntoIterator<Item = Plugin>>(iter: I) -> Self {
        let mut set = PluginSet::new();
        for plugin in iter {
            set.push(plugin);
        }
        set
    }
}
