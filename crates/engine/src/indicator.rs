//! Sort indicators on header cells
//!
//! The sorted column's header carries a direction class and a small glyph
//! `<span>`. Both are rendered from [`SortDirection`]; nothing here is read
//! back to decide what the table's state is.

use crate::sortable::SortDirection;
use sorttable_dom::{Document, NodeId, Result};

/// Classes and glyph used for one sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorStyle {
    pub head_class: &'static str,
    pub indicator_class: &'static str,
    pub glyph: &'static str,
}

/// U+25B4 BLACK UP-POINTING SMALL TRIANGLE
pub const ASCENDING: IndicatorStyle = IndicatorStyle {
    head_class: "sorttable_sorted",
    indicator_class: "sorttable_incrind",
    glyph: "\u{a0}\u{25B4}",
};

/// U+25BE BLACK DOWN-POINTING SMALL TRIANGLE
pub const DESCENDING: IndicatorStyle = IndicatorStyle {
    head_class: "sorttable_sorted_reverse",
    indicator_class: "sorttable_decind",
    glyph: "\u{a0}\u{25BE}",
};

const STYLES: [IndicatorStyle; 2] = [ASCENDING, DESCENDING];

impl IndicatorStyle {
    /// Style for a direction; `None` for an unsorted column.
    #[must_use]
    pub fn for_direction(direction: SortDirection) -> Option<Self> {
        match direction {
            SortDirection::Unsorted => None,
            SortDirection::Ascending => Some(ASCENDING),
            SortDirection::Descending => Some(DESCENDING),
        }
    }
}

fn is_indicator(doc: &Document, id: NodeId) -> bool {
    STYLES
        .iter()
        .any(|style| doc.has_class(id, style.indicator_class))
}

fn create_indicator(doc: &mut Document, style: IndicatorStyle) -> Result<NodeId> {
    let span = doc.create_element("span");
    if let Some(el) = doc.element_mut(span) {
        el.add_class(style.indicator_class);
    }
    let glyph = doc.create_text(style.glyph);
    doc.append_child(span, glyph)?;
    Ok(span)
}

/// Show `direction` on a header cell: swap its direction class and replace
/// its indicator glyph with a fresh one. An unsorted direction removes both.
pub fn mark_indicator(doc: &mut Document, cell: NodeId, direction: SortDirection) -> Result<()> {
    let existing: Vec<NodeId> = doc
        .descendants(cell)
        .filter(|id| is_indicator(doc, *id))
        .collect();

    if let Some(el) = doc.element_mut(cell) {
        for style in STYLES {
            el.remove_class(style.head_class);
        }
    }

    let Some(style) = IndicatorStyle::for_direction(direction) else {
        for indicator in existing {
            doc.remove(indicator)?;
        }
        return Ok(());
    };

    if let Some(el) = doc.element_mut(cell) {
        el.add_class(style.head_class);
    }
    let indicator = create_indicator(doc, style)?;
    match existing.split_first() {
        Some((first, rest)) => {
            doc.replace_with(*first, indicator)?;
            for stale in rest {
                doc.remove(*stale)?;
            }
        }
        None => doc.append_child(cell, indicator)?,
    }
    Ok(())
}

/// Remove direction classes and indicator glyphs from every cell of a header row.
pub fn clear_indicators(doc: &mut Document, header_row: NodeId) -> Result<()> {
    for cell in doc.row_cells(header_row) {
        mark_indicator(doc, cell, SortDirection::Unsorted)?;
    }
    Ok(())
}

/// Header cells of the row that currently show an indicator.
#[must_use]
pub fn indicated_cells(doc: &Document, header_row: NodeId) -> Vec<NodeId> {
    doc.row_cells(header_row)
        .into_iter()
        .filter(|cell| {
            STYLES.iter().any(|style| doc.has_class(*cell, style.head_class))
                || doc.descendants(*cell).any(|id| is_indicator(doc, id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(doc: &Document) -> (NodeId, Vec<NodeId>) {
        let row = doc.elements_by_tag("tr")[0];
        (row, doc.row_cells(row))
    }

    const HTML: &str = "<table><thead><tr><th>A</th><th>B</th></tr></thead></table>";

    #[test]
    fn test_mark_swaps_direction() {
        let mut doc = Document::parse_html(HTML);
        let (_, cells) = header(&doc);

        mark_indicator(&mut doc, cells[0], SortDirection::Ascending).unwrap();
        assert!(doc.has_class(cells[0], ASCENDING.head_class));
        assert_eq!(doc.elements_by_class(ASCENDING.indicator_class).len(), 1);
        assert_eq!(doc.text_content(cells[0]), "A\u{a0}\u{25B4}");

        mark_indicator(&mut doc, cells[0], SortDirection::Descending).unwrap();
        assert!(!doc.has_class(cells[0], ASCENDING.head_class));
        assert!(doc.has_class(cells[0], DESCENDING.head_class));
        assert!(doc.elements_by_class(ASCENDING.indicator_class).is_empty());
        assert_eq!(doc.elements_by_class(DESCENDING.indicator_class).len(), 1);
        assert_eq!(doc.text_content(cells[0]), "A\u{a0}\u{25BE}");
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut doc = Document::parse_html(HTML);
        let (row, cells) = header(&doc);

        mark_indicator(&mut doc, cells[0], SortDirection::Ascending).unwrap();
        mark_indicator(&mut doc, cells[1], SortDirection::Descending).unwrap();
        assert_eq!(indicated_cells(&doc, row), cells);

        clear_indicators(&mut doc, row).unwrap();
        assert!(indicated_cells(&doc, row).is_empty());
        assert_eq!(doc.text_content(row), "AB");
        assert_eq!(doc.attr(cells[0], "class"), None);
    }

    #[test]
    fn test_style_for_direction() {
        assert_eq!(IndicatorStyle::for_direction(SortDirection::Unsorted), None);
        assert_eq!(
            IndicatorStyle::for_direction(SortDirection::Descending),
            Some(DESCENDING)
        );
    }
}
