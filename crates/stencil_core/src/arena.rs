//! Arena allocation for template syntax trees.
//!
//! Every node of a parsed template lives in a bump arena owned by the
//! compile call that produced it. The whole tree is released at once when
//! the arena is dropped.

use bumpalo::Bump;

/// The template arena wraps a bump allocator for AST allocations.
///
/// Only plain data (`&'a str`, `&'a [T]`, `Copy` scalars) should be stored
/// here: the arena never runs destructors.
pub struct TemplateArena {
    bump: Bump,
}

impl TemplateArena {
    /// Create a new, empty arena.
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create an arena with the given initial capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// The underlying bump allocator.
    #[inline]
    pub fn bump(&self) -> &Bump {
        &self.bump
    }

    /// Allocate a value in the arena.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Copy a string into the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Move every element of `items` into the arena, preserving order.
    #[inline]
    pub fn alloc_slice<T>(&self, items: Vec<T>) -> &[T] {
        self.bump.alloc_slice_fill_iter(items)
    }

    /// Copy a list of strings into the arena.
    pub fn alloc_strs(&self, items: &[&str]) -> &[&str] {
        let owned: Vec<&str> = items.iter().map(|s| self.alloc_str(s)).collect();
        self.alloc_slice(owned)
    }

    /// Total bytes allocated so far.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Reset the arena, deallocating all nodes but keeping the memory.
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for TemplateArena {
    fn default() -> Self {
        Self::new()
    }
}
