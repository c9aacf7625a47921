//! Collection aliases used throughout the resolver.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// An insertion-ordered map with FxHash lookups.
/// Used wherever iteration order must follow first insertion, such as the
/// per-module dependency table.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
