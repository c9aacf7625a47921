//! Per-module dependency collection.

use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use stencil_core::collections::FxIndexMap;
use stencil_resolver::{ModuleRef, Resolution};

/// Resolutions recorded per module, in traversal order.
///
/// Cloning yields another handle to the same map. One map belongs to one
/// compiler setup: its transform factory writes through
/// [`ResolutionCollector`]s and its `compile` reads back with
/// [`DependencyMap::lookup`]. Entries live as long as the map.
#[derive(Debug, Clone, Default)]
pub struct DependencyMap {
    entries: Rc<RefCell<FxIndexMap<ModuleRef, Vec<Resolution>>>>,
}

impl DependencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) collection for `module`.
    ///
    /// Any entry left by an earlier compile of the same module is replaced
    /// by an empty list, so recompiling never accumulates.
    pub fn begin_module(&self, module: &ModuleRef) -> ResolutionCollector {
        debug!("collecting dependencies for {}", module);
        self.entries
            .borrow_mut()
            .insert(module.clone(), Vec::new());
        ResolutionCollector {
            map: self.clone(),
            module: module.clone(),
        }
    }

    /// The resolutions recorded for `module`.
    ///
    /// `None` means the module was never compiled; a compiled module without
    /// free references yields `Some` of an empty list.
    pub fn lookup(&self, module: &str) -> Option<Vec<Resolution>> {
        self.entries.borrow().get(module).cloned()
    }

    /// Borrow the resolutions for `module` without cloning them.
    pub fn with_dependencies<R>(&self, module: &str, f: impl FnOnce(Option<&[Resolution]>) -> R) -> R {
        let entries = self.entries.borrow();
        f(entries.get(module).map(Vec::as_slice))
    }

    /// Modules with an entry, in the order they were first compiled.
    pub fn modules(&self) -> Vec<ModuleRef> {
        self.entries.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// Write handle bound to one module's entry in a [`DependencyMap`].
#[derive(Debug, Clone)]
pub struct ResolutionCollector {
    map: DependencyMap,
    module: ModuleRef,
}

impl ResolutionCollector {
    /// The module this collector writes to.
    pub fn module(&self) -> &ModuleRef {
        &self.module
    }

    /// Append a resolution. Duplicates are kept.
    pub fn record(&self, resolution: Resolution) {
        self.map
            .entries
            .borrow_mut()
            .entry(self.module.clone())
            .or_default()
            .push(resolution);
    }
}
