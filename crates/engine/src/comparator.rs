//! Column type inference and cell comparators

use crate::locale::{Collator, NumberParser};
use sorttable_dom::{Document, NodeId};
use std::cmp::Ordering;
use std::fmt;

/// How the cells of a column are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Locale-formatted numbers. Text that is not a number counts as zero.
    Numeric,
    /// Locale collation order.
    Alphabetic,
    /// Every pair compares equal, so a stable sort keeps the current order.
    Nop,
}

impl Comparator {
    /// Compare two extracted cell texts.
    #[must_use]
    pub fn compare(self, a: &str, b: &str, parser: &NumberParser, collator: &Collator) -> Ordering {
        match self {
            Comparator::Numeric => {
                let a = lenient(parser.parse(a));
                let b = lenient(parser.parse(b));
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            Comparator::Alphabetic => collator.compare(a, b),
            Comparator::Nop => Ordering::Equal,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Comparator::Numeric => "numeric",
            Comparator::Alphabetic => "alphabetic",
            Comparator::Nop => "none",
        };
        f.write_str(name)
    }
}

// Unparseable cells sort as zero instead of being grouped first or last.
fn lenient(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Trimmed text of the cell at `column` in `row`; empty when the row is too short.
#[must_use]
pub fn column_text(doc: &Document, row: NodeId, column: usize) -> String {
    doc.row_cells(row)
        .get(column)
        .map(|cell| doc.cell_text(*cell))
        .unwrap_or_default()
}

/// Pick the comparator for a column from the first non-blank cell of the table's first body.
#[must_use]
pub fn infer_comparator(
    doc: &Document,
    table: NodeId,
    column: usize,
    parser: &NumberParser,
) -> Comparator {
    let Some(body) = doc.t_bodies(table).first().copied() else {
        return Comparator::Nop;
    };

    doc.section_rows(body)
        .into_iter()
        .map(|row| column_text(doc, row, column))
        .find(|text| !text.is_empty())
        .map_or(Comparator::Nop, |text| {
            if parser.is_number(&text) {
                Comparator::Numeric
            } else {
                Comparator::Alphabetic
            }
        })
}
