//! List-view model for a fetched table snapshot
//!
//! Header and body cells are both derived from one ordered list of display
//! columns, so a header cell always sits above the cells of its column.

use crate::cell::{render_list_cell, CellMarkup};
use crate::datetime::FormatOptions;
use crate::types::{is_distinguished, restrict_to_key_fields, ColumnDescriptor, Row, TableSnapshot};

/// Rendered list view of one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub table_name: String,
    /// Display columns, in header order
    pub columns: Vec<ColumnDescriptor>,
    /// One entry per data row, each with exactly `columns.len()` cells
    pub rows: Vec<Vec<CellMarkup>>,
}

impl TableView {
    /// Build with default display options
    pub fn build(table_name: &str, snapshot: &TableSnapshot) -> Self {
        Self::build_with(table_name, snapshot, &FormatOptions::default())
    }

    pub fn build_with(table_name: &str, snapshot: &TableSnapshot, options: &FormatOptions) -> Self {
        let columns = display_columns(table_name, snapshot);
        let rows = snapshot
            .data
            .iter()
            .map(|row| render_row(row, &columns, options))
            .collect();

        Self {
            table_name: table_name.to_string(),
            columns,
            rows,
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ordered columns the list view shows for a snapshot.
///
/// Uses the schema when present, otherwise the keys of the first row. The
/// distinguished table is then restricted to its key fields.
pub fn display_columns(table_name: &str, snapshot: &TableSnapshot) -> Vec<ColumnDescriptor> {
    let base: Vec<ColumnDescriptor> = if !snapshot.schema.is_empty() {
        snapshot.schema.clone()
    } else {
        snapshot
            .data
            .first()
            .map(|row| {
                row.keys()
                    .map(|key| ColumnDescriptor::new(key.clone(), ""))
                    .collect()
            })
            .unwrap_or_default()
    };

    if is_distinguished(table_name) {
        restrict_to_key_fields(&base)
    } else {
        base
    }
}

fn render_row(row: &Row, columns: &[ColumnDescriptor], options: &FormatOptions) -> Vec<CellMarkup> {
    columns
        .iter()
        .map(|col| render_list_cell(row.get(&col.name), &col.name, options))
        .collect()
}
