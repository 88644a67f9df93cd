//! HTML table structure accessors
//!
//! These mirror the `HTMLTableElement` conveniences (`tHead`, `tBodies`,
//! `rows`, `cells`) on top of the plain element tree.

use crate::document::Document;
use crate::error::Result;
use crate::node::NodeId;

impl Document {
    /// The table's first `<thead>` child.
    #[must_use]
    pub fn t_head(&self, table: NodeId) -> Option<NodeId> {
        self.element_children(table)
            .find(|child| self.is_element_named(*child, "thead"))
    }

    /// The table's `<tbody>` children, in order.
    #[must_use]
    pub fn t_bodies(&self, table: NodeId) -> Vec<NodeId> {
        self.element_children(table)
            .filter(|child| self.is_element_named(*child, "tbody"))
            .collect()
    }

    /// `<tr>` children of a table section (or of the table itself).
    #[must_use]
    pub fn section_rows(&self, section: NodeId) -> Vec<NodeId> {
        self.element_children(section)
            .filter(|child| self.is_element_named(*child, "tr"))
            .collect()
    }

    /// All rows of a table in `HTMLTableElement.rows` order: header rows first,
    /// then body rows and bare rows in tree order, then footer rows.
    #[must_use]
    pub fn table_rows(&self, table: NodeId) -> Vec<NodeId> {
        let head = self.t_head(table);
        let mut rows = head.map(|h| self.section_rows(h)).unwrap_or_default();
        let mut footer = Vec::new();

        for child in self.element_children(table) {
            match self.tag_name(child) {
                Some("thead") if Some(child) != head => rows.extend(self.section_rows(child)),
                Some("tbody") => rows.extend(self.section_rows(child)),
                Some("tfoot") => footer.extend(self.section_rows(child)),
                Some("tr") => rows.push(child),
                _ => {}
            }
        }

        rows.extend(footer);
        rows
    }

    /// `<th>`/`<td>` children of a row.
    #[must_use]
    pub fn row_cells(&self, row: NodeId) -> Vec<NodeId> {
        self.element_children(row)
            .filter(|child| {
                self.is_element_named(*child, "td") || self.is_element_named(*child, "th")
            })
            .collect()
    }

    /// Text used for sorting: the cell's text content with surrounding whitespace trimmed.
    #[must_use]
    pub fn cell_text(&self, cell: NodeId) -> String {
        self.text_content(cell).trim().to_string()
    }

    /// Make sure the table has a `<thead>`.
    ///
    /// When it is missing, the table's first row is moved into a new `<thead>`
    /// inserted as the first child of the table. Returns `None` for a table
    /// without any rows to lift.
    pub fn ensure_t_head(&mut self, table: NodeId) -> Result<Option<NodeId>> {
        if let Some(head) = self.t_head(table) {
            return Ok(Some(head));
        }
        let Some(first_row) = self.table_rows(table).first().copied() else {
            return Ok(None);
        };

        let head = self.create_element("thead");
        self.append_child(head, first_row)?;
        let first_child = self.children(table).first().copied();
        self.insert_before(table, head, first_child)?;
        tracing::debug!("synthesized <thead> for table {}", table);
        Ok(Some(head))
    }
}
