//! Click notifications raised by the table.
//!
//! Positions are resolved when the click happens, so they always reflect
//! the table as it is at that moment.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// A column header was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnHeaderClick {
    pub column: usize,
}

/// A row-number cell was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHeaderClick {
    pub row: usize,
}

/// A body cell was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellClick {
    pub column: usize,
    pub row: usize,
}

/// Callback receiving a click payload.
pub type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// An ordered list of listeners for one event kind.
pub(crate) struct ListenerList<E> {
    listeners: RwLock<Vec<Listener<E>>>,
}

impl<E> Default for ListenerList<E> {
    fn default() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }
}

impl<E> fmt::Debug for ListenerList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerList")
            .field("len", &self.len())
            .finish()
    }
}

impl<E> ListenerList<E> {
    pub fn add(&self, listener: Listener<E>) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Call every listener in registration order. The list is snapshotted
    /// first so a listener may register further listeners.
    pub fn emit(&self, event: &E) {
        let snapshot = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in snapshot {
            listener(event);
        }
    }
}

/// Listener registries for the three click kinds.
#[derive(Debug, Default)]
pub(crate) struct Listeners {
    pub column_header: ListenerList<ColumnHeaderClick>,
    pub row_header: ListenerList<RowHeaderClick>,
    pub cell: ListenerList<CellClick>,
}
