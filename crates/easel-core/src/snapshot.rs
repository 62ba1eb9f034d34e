//! Deep copies for history snapshots.
//!
//! Every snapshot type in this crate owns its data outright (no shared
//! pointers or interior mutability), so `Clone` already produces a
//! structurally independent copy: nested maps, vectors, strings and
//! timestamps are all duplicated. [`deep_clone`] names that guarantee at
//! the call sites that depend on it.

/// Produce a copy of `value` sharing no mutable state with it
pub fn deep_clone<T: Clone>(value: &T) -> T {
    value.clone()
}
