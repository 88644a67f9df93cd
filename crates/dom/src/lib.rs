//! Document tree for sorttable
//!
//! An arena-backed, HTML-shaped element tree with just enough of the DOM
//! surface for table scripting: parent/child links, `appendChild`-style
//! moves, class lists, attributes, text content, tag/class lookups and the
//! `HTMLTableElement` accessors.
//!
//! # Examples
//!
//! ```
//! use sorttable_dom::{Document, Selector};
//!
//! let mut doc = Document::parse_html(
//!     "<table class=\"sortable\"><tr><th>Name</th></tr><tr><td>b</td></tr></table>",
//! );
//! let sortable = Selector::tag("table").with_class("sortable");
//! let table = doc.select_first(doc.root(), &sortable).unwrap();
//!
//! // The header row is lifted into a synthesized <thead>.
//! let head = doc.ensure_t_head(table).unwrap().unwrap();
//! assert_eq!(doc.text_content(head), "Name");
//! assert_eq!(doc.section_rows(doc.t_bodies(table)[0]).len(), 1);
//! ```

mod document;
pub mod error;
mod html;
mod node;
mod query;
mod table;

/// Re-export the document arena.
pub use document::{Descendants, Document};
/// Re-export DOM error types.
pub use error::{DomError, Result};
/// Re-export node types.
pub use node::{ElementData, Node, NodeData, NodeId};
/// Re-export the selector type.
pub use query::Selector;
