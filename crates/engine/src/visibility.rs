//! Show/hide controls for columns, rows and whole tables
//!
//! Visibility is written as an inline `style` attribute, replacing whatever
//! style the element had.

use sorttable_dom::{Document, NodeId};

const HIDDEN: &str = "display:none;";
const CELL_VISIBLE: &str = "display:table-cell;";
const ROW_VISIBLE: &str = "display:table-row;";
const TABLE_VISIBLE: &str = "display:table;";

fn set_style(doc: &mut Document, nodes: &[NodeId], style: &str) {
    for node in nodes {
        if let Some(el) = doc.element_mut(*node) {
            el.set_attr("style", style);
        }
    }
}

fn show_hide(doc: &mut Document, checked: bool, class: &str, visible: &str) -> usize {
    let nodes = doc.elements_by_class(class);
    if nodes.is_empty() {
        tracing::warn!("no elements with class '{}'", class);
    }
    set_style(doc, &nodes, if checked { visible } else { HIDDEN });
    nodes.len()
}

/// Show or hide every cell carrying `class`. Returns the number of elements styled.
pub fn show_hide_columns(doc: &mut Document, checked: bool, class: &str) -> usize {
    show_hide(doc, checked, class, CELL_VISIBLE)
}

/// Show or hide every row carrying `class`. Returns the number of elements styled.
pub fn show_hide_rows(doc: &mut Document, checked: bool, class: &str) -> usize {
    show_hide(doc, checked, class, ROW_VISIBLE)
}

/// Hide every row under `body`, then show the rows that carry all of the
/// selected classes. Empty selections match every row; a selection
/// containing `.` names several classes.
///
/// Returns the number of rows left visible.
pub fn show_selected_rows<S: AsRef<str>>(
    doc: &mut Document,
    body: NodeId,
    selections: &[S],
) -> usize {
    let required: Vec<&str> = selections
        .iter()
        .flat_map(|s| s.as_ref().split('.'))
        .filter(|class| !class.is_empty())
        .collect();

    let rows: Vec<NodeId> = doc
        .descendants(body)
        .filter(|id| doc.is_element_named(*id, "tr"))
        .collect();
    let (shown, hidden): (Vec<NodeId>, Vec<NodeId>) = rows
        .into_iter()
        .partition(|row| required.iter().all(|class| doc.has_class(*row, class)));

    set_style(doc, &hidden, HIDDEN);
    set_style(doc, &shown, ROW_VISIBLE);
    shown.len()
}

/// Hide every element with `target_class`, then show the first element with
/// `selected_class` as a table. Returns the element shown.
pub fn show_target(doc: &mut Document, target_class: &str, selected_class: &str) -> Option<NodeId> {
    let targets = doc.elements_by_class(target_class);
    set_style(doc, &targets, HIDDEN);

    let selected = doc.elements_by_class(selected_class).first().copied();
    match selected {
        Some(node) => set_style(doc, &[node], TABLE_VISIBLE),
        None => tracing::warn!("no element with class '{}' to show", selected_class),
    }
    selected
}

/// Whether a checkbox is checked.
#[must_use]
pub fn checkbox_checked(doc: &Document, checkbox: NodeId) -> bool {
    doc.attr(checkbox, "checked").is_some()
}

/// Set or clear a checkbox's `checked` attribute.
pub fn set_checkbox(doc: &mut Document, checkbox: NodeId, checked: bool) {
    if let Some(el) = doc.element_mut(checkbox) {
        if checked {
            el.set_attr("checked", "");
        } else {
            el.remove_attr("checked");
        }
    }
}

fn options(doc: &Document, select: NodeId) -> Vec<NodeId> {
    doc.descendants(select)
        .filter(|id| doc.is_element_named(*id, "option"))
        .collect()
}

fn option_value(doc: &Document, option: NodeId) -> String {
    doc.attr(option, "value")
        .map_or_else(|| doc.text_content(option).trim().to_string(), str::to_string)
}

/// Current value of a `<select>`: the option marked `selected`, else the
/// first option, else empty.
#[must_use]
pub fn select_value(doc: &Document, select: NodeId) -> String {
    let options = options(doc, select);
    options
        .iter()
        .find(|option| doc.attr(**option, "selected").is_some())
        .or_else(|| options.first())
        .map(|option| option_value(doc, *option))
        .unwrap_or_default()
}

/// Mark the option with `value` as the selected one. Returns false, leaving
/// the select unchanged, when no option has that value.
pub fn set_select_value(doc: &mut Document, select: NodeId, value: &str) -> bool {
    let options = options(doc, select);
    let Some(target) = options
        .iter()
        .copied()
        .find(|option| option_value(doc, *option) == value)
    else {
        return false;
    };

    for option in options {
        if let Some(el) = doc.element_mut(option) {
            if option == target {
                el.set_attr("selected", "");
            } else {
                el.remove_attr("selected");
            }
        }
    }
    true
}
