use element_catalog::models::{ElementRecord, Page, SortDirection, SortField, SortSpec};
use element_catalog::render::{render_page, render_pagination, EnglishMessages, ListConfig, MessageCatalog};
use std::collections::HashMap;

fn element(id: u64, name: &str) -> ElementRecord {
    ElementRecord {
        id,
        template_id: 1,
        name: name.to_string(),
        kind: "text".to_string(),
        priority: id as u32,
        description: format!("element {}", id),
        categories: vec![],
        defaults: vec![],
        allowed_values: vec![],
    }
}

fn page_of(page_number: usize, page_size: usize, total: usize) -> Page {
    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(total);
    let records = (start + 1..=end).map(|i| element(i as u64, &format!("e{}", i))).collect();
    Page::new(records, page_number, page_size, total)
}

fn render(page: &Page, sort: &SortSpec) -> String {
    render_page(page, sort, &ListConfig::default(), &EnglishMessages).unwrap()
}

fn row_count(html: &str) -> usize {
    html.matches("<tr class=\"element-row\">").count()
}

#[test]
fn test_empty_page() {
    let html = render(&Page::empty(20), &SortSpec::default());
    assert_eq!(row_count(&html), 0);
    assert!(html.contains("<tbody>"));
    assert!(html.contains(
        "Page 1 of 1, showing 0 records out of 0 total, starting on record 0, ending on 0"
    ));
    assert!(html.contains("<span class=\"prev disabled\">"));
    assert!(html.contains("<span class=\"next disabled\">"));
}

#[test]
fn test_row_count_matches_range() {
    for n in 1..=3 {
        let page = page_of(n, 10, 25);
        let html = render(&page, &SortSpec::default());
        assert_eq!(row_count(&html), page.records.len());
        assert_eq!(row_count(&html), page.current_range_end - page.current_range_start + 1);
    }
}

#[test]
fn test_values_are_escaped() {
    let mut record = element(1, "<b>bold</b>");
    record.description = "<script>alert(1)</script>".to_string();
    record.categories = vec!["\"quoted\" & <i>".to_string()];
    let page = Page::new(vec![record], 1, 20, 1);
    let html = render(&page, &SortSpec::default());

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>bold"));
    assert!(!html.contains("<i>"));
    assert!(html.contains("&lt;script&gt;alert(1)"));
    assert!(html.contains("&lt;b&gt;bold"));
    assert!(html.contains("&quot;quoted&quot; &amp; &lt;i&gt;"));
}

#[test]
fn test_list_fields_render_one_line_per_value() {
    let mut record = element(1, "foo");
    record.categories = vec!["a".to_string(), "b".to_string()];
    record.allowed_values = vec!["x".to_string(), "y".to_string(), "z".to_string()];
    let page = Page::new(vec![record], 1, 20, 1);
    let html = render(&page, &SortSpec::default());

    assert!(html.contains("<td class=\"categories\">a<br>b</td>"));
    assert!(html.contains("<td class=\"allowed_values\">x<br>y<br>z</td>"));
    assert!(html.contains("<td class=\"defaults\"></td>"));
}

#[test]
fn test_column_order() {
    let html = render(&page_of(1, 10, 3), &SortSpec::default());
    let labels = ["Name", "Type", "Priority", "Description", "Categories", "Defaults", "Allowed values", "Actions"];
    let positions: Vec<usize> = labels
        .iter()
        .map(|l| html.find(&format!(">{}</", l)).unwrap_or_else(|| panic!("missing header {}", l)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_prev_disabled_on_first_page() {
    let html = render(&page_of(1, 10, 50), &SortSpec::default());
    assert!(html.contains("<span class=\"prev disabled\">"));
    assert!(!html.contains("class=\"prev\" rel=\"prev\""));
    assert!(html.contains("class=\"next\" rel=\"next\""));
}

#[test]
fn test_next_disabled_on_last_page() {
    let html = render(&page_of(5, 10, 50), &SortSpec::default());
    assert!(html.contains("<span class=\"next disabled\">"));
    assert!(!html.contains("class=\"next\" rel=\"next\""));
    assert!(html.contains("class=\"prev\" rel=\"prev\""));
}

#[test]
fn test_current_page_is_not_a_link() {
    let html = render(&page_of(3, 10, 50), &SortSpec::default());
    assert!(html.contains("<span class=\"current\">3</span>"));
    assert!(!html.contains("data-list-link>3</a>"));
    assert!(html.contains("data-list-link>2</a>"));
    assert!(html.contains("data-list-link>4</a>"));
}

#[test]
fn test_pagination_rendered_above_and_below() {
    let html = render(&page_of(2, 10, 50), &SortSpec::default());
    assert_eq!(html.matches("<div class=\"pagination\">").count(), 2);
    let table = html.find("<table").unwrap();
    assert!(html.find("<div class=\"pagination\">").unwrap() < table);
    assert!(html.rfind("<div class=\"pagination\">").unwrap() > table);
}

#[test]
fn test_active_sort_column_is_marked() {
    let sort = SortSpec::new(SortField::Priority, SortDirection::Desc);
    let html = render(&page_of(1, 10, 3), &sort);
    assert_eq!(html.matches("class=\"sorted desc\"").count(), 1);
    assert!(!html.contains("sorted asc"));
    // Active column toggles, others start ascending; both reset to page 1.
    assert!(html.contains("page=1&amp;sort=priority&amp;direction=asc"));
    assert!(html.contains("page=1&amp;sort=name&amp;direction=asc"));
}

#[test]
fn test_page_links_keep_sort() {
    let sort = SortSpec::new(SortField::Type, SortDirection::Desc);
    let html = render(&page_of(2, 10, 50), &sort);
    assert!(html.contains("page=3&amp;sort=type&amp;direction=desc"));
    assert!(html.contains("page=1&amp;sort=type&amp;direction=desc"));
}

#[test]
fn test_container_carries_configured_id() {
    let config = ListConfig { container_id: "otel-list".to_string(), ..ListConfig::default() };
    let html = render_page(&Page::empty(20), &SortSpec::default(), &config, &EnglishMessages).unwrap();
    assert!(html.trim_start().starts_with("<div id=\"otel-list\""));
    assert!(html.contains("data-list-container"));
}

#[test]
fn test_window_limits_page_links() {
    let config = ListConfig { page_window: 3, ..ListConfig::default() };
    let page = page_of(10, 10, 200);
    let html = render_pagination(&page, &SortSpec::default(), &config, &EnglishMessages).unwrap();
    for shown in ["1", "9", "11", "20"] {
        assert!(html.contains(&format!("data-list-link>{}</a>", shown)), "missing link {}", shown);
    }
    for hidden in ["2", "8", "12", "19"] {
        assert!(!html.contains(&format!("data-list-link>{}</a>", hidden)), "unexpected link {}", hidden);
    }
    assert_eq!(html.matches("class=\"gap\"").count(), 2);
}

#[test]
fn test_messages_are_translated() {
    let mut map = HashMap::new();
    map.insert("« previous".to_string(), "« zurück".to_string());
    map.insert("Name".to_string(), "Bezeichnung".to_string());
    map.insert(
        "Page {page} of {pages}, showing {current} records out of {count} total, starting on record {start}, ending on {end}".to_string(),
        "Seite {page} von {pages} ({start}-{end} von {count})".to_string(),
    );
    let catalog = MessageCatalog::from_map(map);
    let page = page_of(2, 10, 25);
    let html = render_page(&page, &SortSpec::default(), &ListConfig::default(), &catalog).unwrap();
    assert!(html.contains("« zurück"));
    assert!(html.contains(">Bezeichnung</a>"));
    assert!(html.contains("Seite 2 von 3 (11-20 von 25)"));
    // untranslated ids fall through
    assert!(html.contains("next »"));
}
