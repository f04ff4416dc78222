use crate::models::SortSpec;

use super::query_string::build_query_string;

/// URL of one page of a list sorted by `sort`, relative to the host.
pub fn list_href(base_path: &str, page: usize, sort: &SortSpec) -> String {
    let query = build_query_string(&[
        ("page", page.max(1).to_string()),
        ("sort", sort.field.as_str().to_string()),
        ("direction", sort.direction.as_str().to_string()),
    ]);
    format!("{}?{}", base_path, query)
}
