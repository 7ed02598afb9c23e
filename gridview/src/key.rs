//! Stable identities for rows and columns.
//!
//! Logical positions shift when rows or columns are removed; keys never do.
//! Everything that outlives a single call (signal handlers, cells) refers to
//! rows and columns by key and derives the position on demand.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

fn next_key() -> u64 {
    NEXT_KEY.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

impl RowKey {
    pub(crate) fn next() -> Self {
        Self(next_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnKey(u64);

impl ColumnKey {
    pub(crate) fn next() -> Self {
        Self(next_key())
    }
}
