//! # sorttable-engine
//!
//! Click-to-sort HTML tables and show/hide controls.
//!
//! Tables marked `class="sortable"` get one [`SortableTable`] each. The
//! first click on a header sorts the body ascending by that column, using a
//! comparator inferred from the column's first non-blank cell; further clicks
//! on the same header reverse the rows. Numbers are read and text is ordered
//! according to a [`Locale`].
//!
//! # Examples
//!
//! ```
//! use sorttable_engine::{Page, PageConfig};
//!
//! let html = "<table class=\"sortable\">\
//!     <tr><th>Item</th><th>Price</th></tr>\
//!     <tr><td>tea</td><td>1,200</td></tr>\
//!     <tr><td>coffee</td><td>950</td></tr>\
//!     </table>";
//! let mut page = Page::load(html, PageConfig::default());
//!
//! page.click_header(0, 1).unwrap();
//! let doc = page.document();
//! let body = doc.t_bodies(page.tables()[0].table())[0];
//! assert_eq!(doc.cell_text(doc.row_cells(doc.section_rows(body)[0])[1]), "950");
//! ```

pub mod comparator;
pub mod config;
pub mod error;
pub mod indicator;
pub mod locale;
mod page;
pub mod sortable;
pub mod visibility;

pub use comparator::Comparator;
pub use config::{PageConfig, RowFilterBinding, TargetBinding, ToggleBinding};
pub use error::{PageError, Result};
pub use locale::{Collator, Locale, NumberParser};
pub use page::Page;
pub use sortable::{ColumnSortState, SortDirection, SortableTable};
