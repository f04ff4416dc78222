use askama::Template;
use crate::render::{HeaderView, RowView};

/// The list container the refresh script swaps in place.
#[derive(Template)]
#[template(path = "list_fragment.html")]
pub struct ListFragmentTemplate<'a> {
    pub container_id: &'a str,
    /// Pre-rendered pagination block, emitted above and below the table.
    pub pagination: &'a str,
    pub headers: &'a [HeaderView],
    pub rows: &'a [RowView],
    pub counter: String,
}
