use sorttable_engine::{Page, PageConfig, PageError};
use tempfile::tempdir;

const PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Division</title></head>
<body>
<input type="checkbox" id="show-asm">
<input type="checkbox" id="show-cpp" checked>
<select id="sign-select">
  <option value="">any</option>
  <option value="signed">signed</option>
  <option value="unsigned">unsigned</option>
</select>
<select id="bits-select">
  <option value="">any</option>
  <option value="b32" selected>32</option>
  <option value="b64">64</option>
</select>
<select id="targets-select">
  <option value="x86">x86</option>
  <option value="arm">arm</option>
</select>
<table class="sortable" id="ops">
<thead><tr><th>Op</th><th>Cycles</th><th class="column-cpp">C++</th><th class="column-asm sorttable_nosort">Asm</th></tr></thead>
<tbody id="ops-body">
<tr id="r1" class="signed b32"><td>idiv</td><td>26</td><td class="column-cpp">a / b</td><td class="column-asm">idivl</td></tr>
<tr id="r2" class="unsigned b32"><td>div</td><td>24</td><td class="column-cpp">a / b</td><td class="column-asm">divl</td></tr>
<tr id="r3" class="signed b64"><td>idivq</td><td>42</td><td class="column-cpp">a / b</td><td class="column-asm">idivq</td></tr>
</tbody>
</table>
<table class="target x86" id="t-x86"><tr><td>x86</td></tr></table>
<table class="target arm" id="t-arm"><tr><td>arm</td></tr></table>
</body></html>
"#;

const WIRING: &str = r##"{
    "column_toggles": [
        { "checkbox": "#show-asm", "class": ".column-asm" },
        { "checkbox": "#show-cpp", "class": ".column-cpp" }
    ],
    "row_filter": { "body": "#ops-body", "menus": ["#sign-select", "#bits-select", "#missing"] },
    "target_select": { "select": "#targets-select", "class": ".target" }
}"##;

fn style(page: &Page, id: &str) -> Option<String> {
    let doc = page.document();
    let node = doc.get_element_by_id(id)?;
    doc.attr(node, "style").map(str::to_string)
}

fn load() -> Page {
    Page::load(PAGE, PageConfig::from_json_str(WIRING).unwrap())
}

#[test]
fn test_initial_state_applied() {
    let page = load();
    let doc = page.document();

    for cell in doc.elements_by_class("column-asm") {
        assert_eq!(doc.attr(cell, "style"), Some("display:none;"));
    }
    for cell in doc.elements_by_class("column-cpp") {
        assert_eq!(doc.attr(cell, "style"), Some("display:table-cell;"));
    }

    // Only 32-bit rows; the missing menu is skipped.
    assert_eq!(style(&page, "r1").as_deref(), Some("display:table-row;"));
    assert_eq!(style(&page, "r2").as_deref(), Some("display:table-row;"));
    assert_eq!(style(&page, "r3").as_deref(), Some("display:none;"));

    assert_eq!(style(&page, "t-x86").as_deref(), Some("display:table;"));
    assert_eq!(style(&page, "t-arm").as_deref(), Some("display:none;"));
}

#[test]
fn test_control_events() {
    let mut page = load();

    page.set_checked("show-asm", true).unwrap();
    let doc = page.document();
    for cell in doc.elements_by_class("column-asm") {
        assert_eq!(doc.attr(cell, "style"), Some("display:table-cell;"));
    }

    page.select("sign-select", "signed").unwrap();
    assert_eq!(style(&page, "r1").as_deref(), Some("display:table-row;"));
    assert_eq!(style(&page, "r2").as_deref(), Some("display:none;"));

    page.select("bits-select", "").unwrap();
    assert_eq!(style(&page, "r3").as_deref(), Some("display:table-row;"));

    page.select("targets-select", "arm").unwrap();
    assert_eq!(style(&page, "t-x86").as_deref(), Some("display:none;"));
    assert_eq!(style(&page, "t-arm").as_deref(), Some("display:table;"));
}

#[test]
fn test_sorting_keeps_row_visibility() {
    let mut page = load();
    page.click_header(0, 1).unwrap();

    let doc = page.document();
    let body = doc.get_element_by_id("ops-body").unwrap();
    let ids: Vec<&str> = doc
        .section_rows(body)
        .into_iter()
        .filter_map(|row| doc.attr(row, "id"))
        .collect();
    assert_eq!(ids, vec!["r2", "r1", "r3"]);
    assert_eq!(style(&page, "r3").as_deref(), Some("display:none;"));
}

#[test]
fn test_nosort_column_rejected() {
    let mut page = load();
    assert!(matches!(
        page.click_header(0, 3),
        Err(PageError::UnknownColumn { column: 3, count: 4, .. })
    ));
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let html = dir.path().join("page.html");
    let wiring = dir.path().join("wiring.json");
    std::fs::write(&html, PAGE).unwrap();
    std::fs::write(&wiring, WIRING).unwrap();

    let config = PageConfig::from_file(&wiring).unwrap();
    let page = Page::from_file(&html, config).unwrap();
    assert_eq!(page.tables().len(), 1);
    assert_eq!(style(&page, "r3").as_deref(), Some("display:none;"));

    let err = Page::from_file(dir.path().join("missing.html"), PageConfig::default());
    assert!(matches!(err, Err(PageError::Dom(_))));
}
