use askama::Template;
use crate::render::pagination::PageItem;
use crate::render::NavControl;

#[derive(Template)]
#[template(path = "pagination.html")]
pub struct PaginationTemplate {
    pub prev: NavControl,
    pub items: Vec<PageItem>,
    pub next: NavControl,
}
