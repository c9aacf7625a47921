//! Block-parameter scopes.

use log::trace;
use std::cell::RefCell;

/// The block parameters introduced by one nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    names: Vec<String>,
}

impl Scope {
    /// Create a scope binding `names`.
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Whether this scope binds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The names this scope binds, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// A stack of scopes for a single template traversal, outermost first.
///
/// Scopes are entered through [`ScopeTracker::enter_scope`], which returns a
/// guard that pops the scope when dropped. A traversal that bails out with
/// `?` halfway through a block therefore never leaves a frame behind.
///
/// The tracker is single-threaded; one instance serves one traversal.
#[derive(Debug, Default)]
pub struct ScopeTracker {
    stack: RefCell<Vec<Scope>>,
}

impl ScopeTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a scope binding `names`.
    ///
    /// An empty `names` list does not create a frame; the returned guard is
    /// then inert.
    #[must_use = "the scope is exited as soon as the guard is dropped"]
    pub fn enter_scope(&self, names: &[&str]) -> ScopeGuard<'_> {
        if names.is_empty() {
            return ScopeGuard { tracker: None };
        }
        trace!("enter scope {:?}", names);
        self.stack.borrow_mut().push(Scope::new(names));
        ScopeGuard {
            tracker: Some(self),
        }
    }

    /// Pop the innermost scope.
    ///
    /// Normally called by [`ScopeGuard`]. Panics when no scope is open: an
    /// unmatched exit is a broken traversal, not a recoverable condition.
    pub fn exit_scope(&self) {
        let popped = self.stack.borrow_mut().pop();
        match popped {
            Some(scope) => trace!("exit scope {:?}", scope.names),
            None => panic!("exit_scope called without a matching enter_scope"),
        }
    }

    /// Whether `name` is bound by any open scope.
    pub fn is_bound(&self, name: &str) -> bool {
        self.stack.borrow().iter().any(|scope| scope.contains(name))
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    /// Whether no scope is open.
    pub fn is_empty(&self) -> bool {
        self.depth() == 0
    }
}

/// Keeps a scope open for as long as it lives.
#[derive(Debug)]
pub struct ScopeGuard<'t> {
    tracker: Option<&'t ScopeTracker>,
}

impl ScopeGuard<'_> {
    /// Whether this guard owns a stack frame.
    pub fn is_active(&self) -> bool {
        self.tracker.is_some()
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if let Some(tracker) = self.tracker.take() {
            tracker.exit_scope();
        }
    }
}
