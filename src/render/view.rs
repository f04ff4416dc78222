// Plain view models handed to the askama templates.

#[derive(Clone, Debug)]
pub struct HeaderView {
    pub label: String,
    pub href: String,
    pub class: String,
    pub sortable: bool,
}

#[derive(Clone, Debug)]
pub struct RowView {
    pub cells: Vec<CellView>,
}

#[derive(Clone, Debug)]
pub struct CellView {
    pub class: &'static str,
    pub lines: Vec<String>,
    /// Non-empty for link cells.
    pub href: String,
}

impl CellView {
    pub fn text(class: &'static str, lines: Vec<String>) -> Self {
        Self { class, lines, href: String::new() }
    }

    pub fn link(class: &'static str, label: String, href: String) -> Self {
        Self { class, lines: vec![label], href }
    }
}

/// A previous/next control.
#[derive(Clone, Debug)]
pub struct NavControl {
    pub label: String,
    pub href: String,
    pub enabled: bool,
}

impl NavControl {
    pub fn enabled(label: String, href: String) -> Self {
        Self { label, href, enabled: true }
    }

    pub fn disabled(label: String) -> Self {
        Self { label, href: String::new(), enabled: false }
    }
}
