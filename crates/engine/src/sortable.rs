//! Click-to-sort tables
//!
//! [`SortableTable::make_sortable`] scans a table's header row once and
//! records, for every sortable header cell, the column it heads and the
//! comparator inferred for it. Clicking a header then either sorts the body
//! by that column (ascending) or, if the table is already sorted by it,
//! reverses the body rows in place.

use crate::comparator::{column_text, infer_comparator, Comparator};
use crate::indicator::{clear_indicators, mark_indicator};
use crate::locale::{Collator, Locale, NumberParser};
use indexmap::IndexMap;
use sorttable_dom::{Document, NodeId, Result};

/// Class that opts a table into sorting.
pub const SORTABLE_CLASS: &str = "sortable";

/// Class that opts a header cell out of sorting.
pub const NOSORT_CLASS: &str = "sorttable_nosort";

/// Current sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Not sorted by this column; the next click sorts it.
    #[default]
    Unsorted,
    /// Sorted by this column, smallest first.
    Ascending,
    /// Sorted by this column, largest first; reached only by reversal.
    Descending,
}

impl SortDirection {
    /// The direction a fast-path reversal switches to.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Unsorted => SortDirection::Unsorted,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Per-column sort state. Index and comparator are fixed at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSortState {
    pub column_index: usize,
    pub comparator: Comparator,
    pub direction: SortDirection,
}

/// A table whose header cells sort the body when clicked.
#[derive(Debug, Clone)]
pub struct SortableTable {
    table: NodeId,
    header_row: NodeId,
    columns: IndexMap<NodeId, ColumnSortState>,
    active: Option<NodeId>,
    parser: NumberParser,
    collator: Collator,
}

impl SortableTable {
    /// Set up sorting for `table`.
    ///
    /// A table without `<thead>` gets one built from its first row. Returns
    /// `None`, leaving the table as it was, when the header does not consist
    /// of exactly one row.
    pub fn make_sortable(doc: &mut Document, table: NodeId, locale: &Locale) -> Option<Self> {
        let head = match doc.ensure_t_head(table) {
            Ok(Some(head)) => head,
            Ok(None) => {
                tracing::debug!("table {} has no rows, not sortable", table);
                return None;
            }
            Err(err) => {
                tracing::warn!("could not prepare header of table {}: {}", table, err);
                return None;
            }
        };

        let header_rows = doc.section_rows(head);
        let [header_row] = header_rows[..] else {
            tracing::debug!(
                "table {} has {} header rows, only one is supported",
                table,
                header_rows.len()
            );
            return None;
        };

        let parser = locale.number_parser();
        let collator = Collator::new();
        let mut columns = IndexMap::new();

        for (column_index, cell) in doc.row_cells(header_row).into_iter().enumerate() {
            if doc.has_class(cell, NOSORT_CLASS) {
                continue;
            }
            let comparator = infer_comparator(doc, table, column_index, &parser);
            tracing::debug!(
                "table {} column {} sorts as {}",
                table,
                column_index,
                comparator
            );
            columns.insert(
                cell,
                ColumnSortState {
                    column_index,
                    comparator,
                    direction: SortDirection::Unsorted,
                },
            );
        }

        Some(Self {
            table,
            header_row,
            columns,
            active: None,
            parser,
            collator,
        })
    }

    #[must_use]
    pub fn table(&self) -> NodeId {
        self.table
    }

    #[must_use]
    pub fn header_row(&self) -> NodeId {
        self.header_row
    }

    /// Whether clicks on `cell` are handled by this table.
    #[must_use]
    pub fn handles(&self, cell: NodeId) -> bool {
        self.columns.contains_key(&cell)
    }

    #[must_use]
    pub fn column_state(&self, cell: NodeId) -> Option<&ColumnSortState> {
        self.columns.get(&cell)
    }

    /// Sortable header cells and their state, in column order.
    pub fn columns(&self) -> impl Iterator<Item = (NodeId, &ColumnSortState)> {
        self.columns.iter().map(|(cell, state)| (*cell, state))
    }

    /// The header cell at `column` (sortable or not).
    #[must_use]
    pub fn header_cell(&self, doc: &Document, column: usize) -> Option<NodeId> {
        doc.row_cells(self.header_row).get(column).copied()
    }

    /// The column the table is currently sorted by, if any.
    #[must_use]
    pub fn sorted_by(&self) -> Option<(NodeId, SortDirection)> {
        let cell = self.active?;
        self.columns.get(&cell).map(|state| (cell, state.direction))
    }

    /// Handle a click on a header cell. Returns false for cells this table does not handle.
    pub fn on_header_click(&mut self, doc: &mut Document, cell: NodeId) -> bool {
        let Some(state) = self.columns.get(&cell).copied() else {
            return false;
        };

        let outcome = match state.direction {
            SortDirection::Unsorted => self.sort_by(doc, cell, state),
            direction => self.reverse(doc, cell, direction.reversed()),
        };
        if let Err(err) = outcome {
            tracing::warn!("sorting table {} failed: {}", self.table, err);
        }
        true
    }

    fn body(&self, doc: &Document) -> Option<NodeId> {
        doc.t_bodies(self.table).first().copied()
    }

    fn set_direction(&mut self, cell: NodeId, direction: SortDirection) {
        if let Some(state) = self.columns.get_mut(&cell) {
            state.direction = direction;
        }
    }

    /// Full decorate-sort-undecorate pass; leaves the column ascending.
    ///
    /// Rows move first. Column state and indicators change only once the
    /// body is in its new order.
    fn sort_by(&mut self, doc: &mut Document, cell: NodeId, state: ColumnSortState) -> Result<()> {
        if let Some(body) = self.body(doc) {
            let mut keyed: Vec<(String, NodeId)> = doc
                .section_rows(body)
                .into_iter()
                .map(|row| (column_text(doc, row, state.column_index), row))
                .collect();
            // `sort_by` is stable: rows with equal keys keep their relative order.
            keyed.sort_by(|(a, _), (b, _)| {
                state
                    .comparator
                    .compare(a, b, &self.parser, &self.collator)
            });
            for (_, row) in keyed {
                doc.append_child(body, row)?;
            }
        }

        if let Some(previous) = self.active.take() {
            self.set_direction(previous, SortDirection::Unsorted);
        }
        clear_indicators(doc, self.header_row)?;
        self.set_direction(cell, SortDirection::Ascending);
        self.active = Some(cell);
        mark_indicator(doc, cell, SortDirection::Ascending)?;

        tracing::debug!(
            "sorted table {} by column {} ({})",
            self.table,
            state.column_index,
            state.comparator
        );
        Ok(())
    }

    /// Fast path: the body is already sorted by this column, so flip it.
    fn reverse(
        &mut self,
        doc: &mut Document,
        cell: NodeId,
        direction: SortDirection,
    ) -> Result<()> {
        if let Some(body) = self.body(doc) {
            for row in doc.section_rows(body).into_iter().rev() {
                doc.append_child(body, row)?;
            }
        }
        self.set_direction(cell, direction);
        mark_indicator(doc, cell, direction)
    }
}
