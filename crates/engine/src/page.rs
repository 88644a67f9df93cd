//! A document with its sortable tables and control bindings
//!
//! [`Page`] plays the role of the browser: it owns the document, delivers
//! header clicks to the table that owns the header, and re-applies the
//! visibility rules bound to a control whenever that control changes.

use crate::config::{PageConfig, RowFilterBinding, TargetBinding, ToggleBinding};
use crate::error::{PageError, Result};
use crate::locale::Locale;
use crate::sortable::{SortableTable, SORTABLE_CLASS};
use crate::visibility::{
    checkbox_checked, select_value, set_checkbox, set_select_value, show_hide_columns,
    show_hide_rows, show_selected_rows, show_target,
};
use sorttable_dom::{Document, NodeId, Selector};
use std::path::Path;

/// A loaded HTML page: its sortable tables plus the controls wired to
/// them by a [`PageConfig`]. All mutations go through the page so its
/// tables and controls stay in step with the document.
#[derive(Debug)]
pub struct Page {
    doc: Document,
    config: PageConfig,
    locale: Locale,
    tables: Vec<SortableTable>,
}

impl Page {
    /// Parse HTML and set the page up.
    #[must_use]
    pub fn load(html: &str, config: PageConfig) -> Self {
        Self::new(Document::parse_html(html), config)
    }

    /// Read an HTML file and set the page up.
    pub fn from_file(path: impl AsRef<Path>, config: PageConfig) -> Result<Self> {
        let doc = Document::from_html_file(path)?;
        Ok(Self::new(doc, config))
    }

    /// Make every `table.sortable` sortable, then apply every binding once
    /// so the document reflects the initial state of its controls.
    #[must_use]
    pub fn new(mut doc: Document, config: PageConfig) -> Self {
        let locale = Locale::new(&config.locale);
        let selector = Selector::tag("table").with_class(SORTABLE_CLASS);
        let tables = doc
            .select(doc.root(), &selector)
            .into_iter()
            .filter_map(|table| SortableTable::make_sortable(&mut doc, table, &locale))
            .collect::<Vec<_>>();
        tracing::debug!("{} sortable tables, locale {}", tables.len(), locale);

        let mut page = Self {
            doc,
            config,
            locale,
            tables,
        };
        page.apply_all();
        page
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.doc
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Sortable tables in document order.
    #[must_use]
    pub fn tables(&self) -> &[SortableTable] {
        &self.tables
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        self.doc.to_html()
    }

    /// Deliver a click on `node`. Returns whether a sortable header handled it.
    pub fn click(&mut self, node: NodeId) -> bool {
        match self.tables.iter_mut().find(|table| table.handles(node)) {
            Some(table) => table.on_header_click(&mut self.doc, node),
            None => false,
        }
    }

    /// Click the header of `column` in the `table`-th sortable table.
    pub fn click_header(&mut self, table: usize, column: usize) -> Result<()> {
        let count = self.tables.len();
        let sortable = self
            .tables
            .get_mut(table)
            .ok_or(PageError::UnknownTable {
                index: table,
                count,
            })?;

        let cell = sortable
            .header_cell(&self.doc, column)
            .filter(|cell| sortable.handles(*cell))
            .ok_or_else(|| PageError::UnknownColumn {
                table,
                column,
                count: self.doc.row_cells(sortable.header_row()).len(),
            })?;
        sortable.on_header_click(&mut self.doc, cell);
        Ok(())
    }

    /// Check or uncheck a checkbox and re-apply the toggles bound to it.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<()> {
        let checkbox = self.control(id)?;
        set_checkbox(&mut self.doc, checkbox, checked);

        let column_toggles = bound_toggles(&self.config.column_toggles, id);
        let row_toggles = bound_toggles(&self.config.row_toggles, id);
        for class in column_toggles {
            show_hide_columns(&mut self.doc, checked, &class);
        }
        for class in row_toggles {
            show_hide_rows(&mut self.doc, checked, &class);
        }
        Ok(())
    }

    /// Choose an option of a select and re-apply the rules bound to it.
    pub fn select(&mut self, id: &str, value: &str) -> Result<()> {
        let select = self.control(id)?;
        if !set_select_value(&mut self.doc, select, value) {
            return Err(PageError::UnknownOption {
                control: id.to_string(),
                value: value.to_string(),
            });
        }

        if let Some(filter) = self.config.row_filter.clone() {
            if filter.menus.iter().any(|menu| menu == id) {
                self.apply_row_filter(&filter);
            }
        }
        if let Some(target) = self.config.target_select.clone() {
            if target.select == id {
                self.apply_target(&target);
            }
        }
        Ok(())
    }

    fn control(&self, id: &str) -> Result<NodeId> {
        self.doc
            .get_element_by_id(id)
            .ok_or_else(|| PageError::UnknownControl { id: id.to_string() })
    }

    fn apply_all(&mut self) {
        let config = self.config.clone();
        for toggle in &config.column_toggles {
            if let Some(checked) = self.checkbox_state(toggle) {
                show_hide_columns(&mut self.doc, checked, &toggle.class);
            }
        }
        for toggle in &config.row_toggles {
            if let Some(checked) = self.checkbox_state(toggle) {
                show_hide_rows(&mut self.doc, checked, &toggle.class);
            }
        }
        if let Some(filter) = &config.row_filter {
            self.apply_row_filter(filter);
        }
        if let Some(target) = &config.target_select {
            self.apply_target(target);
        }
    }

    fn checkbox_state(&self, toggle: &ToggleBinding) -> Option<bool> {
        match self.doc.get_element_by_id(&toggle.checkbox) {
            Some(checkbox) => Some(checkbox_checked(&self.doc, checkbox)),
            None => {
                tracing::warn!("checkbox #{} was not found", toggle.checkbox);
                None
            }
        }
    }

    fn apply_row_filter(&mut self, filter: &RowFilterBinding) {
        let body = match &filter.body {
            Some(id) => self.doc.get_element_by_id(id),
            None => self.doc.elements_by_tag("tbody").first().copied(),
        };
        let Some(body) = body else {
            tracing::warn!(
                "row filter body {} was not found",
                filter.body.as_deref().unwrap_or("<tbody>")
            );
            return;
        };

        let selections: Vec<String> = filter
            .menus
            .iter()
            .filter_map(|id| {
                let menu = self.doc.get_element_by_id(id);
                if menu.is_none() {
                    tracing::warn!("select #{} was not found", id);
                }
                menu
            })
            .map(|menu| select_value(&self.doc, menu))
            .collect();
        let shown = show_selected_rows(&mut self.doc, body, &selections);
        tracing::debug!("row filter {:?} shows {} rows", selections, shown);
    }

    fn apply_target(&mut self, target: &TargetBinding) {
        let Some(select) = self.doc.get_element_by_id(&target.select) else {
            tracing::warn!("select #{} was not found", target.select);
            return;
        };
        let value = select_value(&self.doc, select);
        show_target(&mut self.doc, &target.class, &value);
    }
}

fn bound_toggles(toggles: &[ToggleBinding], checkbox: &str) -> Vec<String> {
    toggles
        .iter()
        .filter(|toggle| toggle.checkbox == checkbox)
        .map(|toggle| toggle.class.clone())
        .collect()
}
