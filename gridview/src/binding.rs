//! Data-bound table: one row per record, one content node per column
//! produced by a per-column factory.

use std::fmt;
use std::sync::Arc;

use griddom::{NodeId, Scene};
use log::debug;

use crate::column::ColumnDefinition;
use crate::error::{Result, TableError};
use crate::table::{CellContents, Table, TableOptions};

/// Builds the content node for one record in one column.
pub type CellFactory<T> = Arc<dyn Fn(&mut Scene, &T) -> NodeId + Send + Sync>;

/// A column definition paired with the factory that fills its cells.
///
/// Both halves are required; [`BoundTable::add_column`] rejects a binder
/// missing either one.
pub struct ColumnBinder<T> {
    definition: Option<ColumnDefinition>,
    factory: Option<CellFactory<T>>,
}

impl<T> Default for ColumnBinder<T> {
    fn default() -> Self {
        Self {
            definition: None,
            factory: None,
        }
    }
}

impl<T> fmt::Debug for ColumnBinder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnBinder")
            .field("definition", &self.definition)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}

impl<T> ColumnBinder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A binder with both halves set.
    pub fn bound<F>(definition: ColumnDefinition, factory: F) -> Self
    where
        F: Fn(&mut Scene, &T) -> NodeId + Send + Sync + 'static,
    {
        Self::new().definition(definition).factory(factory)
    }

    pub fn definition(mut self, definition: ColumnDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&mut Scene, &T) -> NodeId + Send + Sync + 'static,
    {
        self.factory = Some(Arc::new(factory));
        self
    }
}

/// A [`Table`] whose rows mirror a sequence of records.
pub struct BoundTable<T> {
    table: Table,
    factories: Vec<CellFactory<T>>,
    data: Vec<T>,
}

impl<T> fmt::Debug for BoundTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundTable")
            .field("table", &self.table.id())
            .field("columns", &self.factories.len())
            .field("records", &self.data.len())
            .finish()
    }
}

impl<T> BoundTable<T> {
    /// Build the underlying table. Columns come only from
    /// [`add_column`](Self::add_column) and rows only from the data, so the
    /// row and column settings in `options` are ignored.
    pub fn new(scene: &mut Scene, options: TableOptions) -> Result<Self> {
        let options = TableOptions {
            row_count: 0,
            columns: Some(Vec::new()),
            ..options
        };
        Ok(Self {
            table: Table::new(scene, options)?,
            factories: Vec::new(),
            data: Vec::new(),
        })
    }

    /// A bound table with the row numbers hidden.
    pub fn with_defaults(scene: &mut Scene) -> Result<Self> {
        Self::new(scene, TableOptions::default().row_numbers(false))
    }

    /// Register a column. Existing rows get the new column immediately but
    /// its cells stay empty until the next [`refresh`](Self::refresh).
    pub fn add_column(&mut self, scene: &mut Scene, binder: ColumnBinder<T>) -> Result<usize> {
        let ColumnBinder {
            definition,
            factory,
        } = binder;
        let definition = definition.ok_or_else(|| {
            TableError::InvalidArgument("column binder has no column definition".into())
        })?;
        let factory = factory.ok_or_else(|| {
            TableError::InvalidArgument(format!(
                "column binder for {:?} has no cell factory",
                definition.label
            ))
        })?;

        let index = self.table.add_column(scene, definition)?;
        self.factories.push(factory);
        Ok(index)
    }

    /// Replace the records and rebuild every row.
    pub fn set_data(&mut self, scene: &mut Scene, data: impl IntoIterator<Item = T>) -> Result<()> {
        self.data = data.into_iter().collect();
        self.refresh(scene)
    }

    /// Drop every row and rebuild one per record.
    pub fn refresh(&mut self, scene: &mut Scene) -> Result<()> {
        for index in (0..self.table.row_count()).rev() {
            self.table.remove_row(scene, index)?;
        }

        for record in &self.data {
            let contents: CellContents = self
                .factories
                .iter()
                .enumerate()
                .map(|(column, factory)| (column, factory(scene, record)))
                .collect();
            self.table.add_row(scene, contents)?;
        }
        debug!(
            "table {}: refreshed {} records",
            self.table.id(),
            self.data.len()
        );
        Ok(())
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}
