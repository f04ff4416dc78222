//! Paginated, sortable list renderer.
//!
//! [`render_page`] turns one [`Page`] of element records into the markup of
//! the list container: a pagination block, the table, a second pagination
//! block and the counter line. It has no state and no framework context;
//! everything it needs comes in through its arguments.

pub mod messages;
pub mod pagination;
pub mod view;

use askama::Template;
use thiserror::Error;

use crate::config::{DEFAULT_CONTAINER_ID, DEFAULT_LIST_PATH, DEFAULT_PAGE_WINDOW};
use crate::models::{ElementRecord, Page, SortField, SortSpec};
use crate::templates::{ListFragmentTemplate, PaginationTemplate};
use crate::utils::list_href;

pub use messages::{EnglishMessages, MessageCatalog, Messages, MessagesError};

use messages::{format_counter, COUNTER, NEXT, PREVIOUS, VIEW};
pub use view::{CellView, HeaderView, NavControl, RowView};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template render error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Field(SortField),
    /// Per-row links; never sortable.
    Actions,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub kind: ColumnKind,
    /// msgid of the header text.
    pub label: String,
    pub sortable: bool,
}

impl Column {
    pub fn field(field: SortField, label: &str) -> Self {
        Self { kind: ColumnKind::Field(field), label: label.to_string(), sortable: true }
    }

    pub fn actions(label: &str) -> Self {
        Self { kind: ColumnKind::Actions, label: label.to_string(), sortable: false }
    }
}

/// Name, type, priority, description, categories, defaults, allowed
/// values, actions.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::field(SortField::Name, "Name"),
        Column::field(SortField::Type, "Type"),
        Column::field(SortField::Priority, "Priority"),
        Column::field(SortField::Description, "Description"),
        Column::field(SortField::Categories, "Categories"),
        Column::field(SortField::Defaults, "Defaults"),
        Column::field(SortField::AllowedValues, "Allowed values"),
        Column::actions("Actions"),
    ]
}

#[derive(Clone, Debug)]
pub struct ListConfig {
    /// Number of numbered page links around the current page.
    pub page_window: usize,
    /// id of the element the refresh script swaps.
    pub container_id: String,
    /// Path the sort and page links point at.
    pub base_path: String,
    /// Prefix of the per-element links in the actions column.
    pub detail_path: String,
    pub columns: Vec<Column>,
}

impl ListConfig {
    pub fn with_base_path(&self, base_path: impl Into<String>) -> Self {
        Self { base_path: base_path.into(), ..self.clone() }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_window: DEFAULT_PAGE_WINDOW,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            base_path: DEFAULT_LIST_PATH.to_string(),
            detail_path: DEFAULT_LIST_PATH.to_string(),
            columns: default_columns(),
        }
    }
}

/// Render `page` as the list container fragment.
pub fn render_page(
    page: &Page,
    sort: &SortSpec,
    config: &ListConfig,
    messages: &dyn Messages,
) -> Result<String, RenderError> {
    let pagination = render_pagination(page, sort, config, messages)?;
    let headers = config
        .columns
        .iter()
        .map(|column| header_view(column, sort, config, messages))
        .collect::<Vec<_>>();
    let rows = page
        .records
        .iter()
        .map(|record| RowView {
            cells: config
                .columns
                .iter()
                .map(|column| cell_view(record, column, config, messages))
                .collect(),
        })
        .collect::<Vec<_>>();
    let counter = format_counter(&messages.translate(COUNTER), page);

    let fragment = ListFragmentTemplate {
        container_id: &config.container_id,
        pagination: &pagination,
        headers: &headers,
        rows: &rows,
        counter,
    };
    Ok(fragment.render()?)
}

/// Previous link, numbered window and next link for `page`.
pub fn render_pagination(
    page: &Page,
    sort: &SortSpec,
    config: &ListConfig,
    messages: &dyn Messages,
) -> Result<String, RenderError> {
    let href = |n: usize| list_href(&config.base_path, n, sort);
    let prev_label = messages.translate(PREVIOUS).into_owned();
    let next_label = messages.translate(NEXT).into_owned();
    // An empty set has nowhere to go in either direction.
    let prev = if page.is_first() || page.is_empty() {
        NavControl::disabled(prev_label)
    } else {
        NavControl::enabled(prev_label, href(page.page_number - 1))
    };
    let next = if page.is_last() || page.is_empty() {
        NavControl::disabled(next_label)
    } else {
        NavControl::enabled(next_label, href(page.page_number + 1))
    };
    let items = pagination::page_items(page.page_number, page.total_pages, config.page_window, href);

    Ok(PaginationTemplate { prev, items, next }.render()?)
}

fn header_view(column: &Column, sort: &SortSpec, config: &ListConfig, messages: &dyn Messages) -> HeaderView {
    let label = messages.translate(&column.label).into_owned();
    match column.kind {
        ColumnKind::Field(field) if column.sortable => {
            let class = if sort.field == field {
                format!("sorted {}", sort.direction.as_str())
            } else {
                String::new()
            };
            HeaderView {
                label,
                href: list_href(&config.base_path, 1, &sort.toggled_for(field)),
                class,
                sortable: true,
            }
        }
        _ => HeaderView { label, href: String::new(), class: String::new(), sortable: false },
    }
}

fn cell_view(record: &ElementRecord, column: &Column, config: &ListConfig, messages: &dyn Messages) -> CellView {
    match column.kind {
        ColumnKind::Field(field) => CellView::text(field.as_str(), field_lines(record, field)),
        ColumnKind::Actions => CellView::link(
            "actions",
            messages.translate(VIEW).into_owned(),
            format!("{}/{}", config.detail_path, record.id),
        ),
    }
}

/// Display lines of one field; list fields yield one line per entry.
pub fn field_lines(record: &ElementRecord, field: SortField) -> Vec<String> {
    match field {
        SortField::Name => vec![record.name.clone()],
        SortField::Type => vec![record.kind.clone()],
        SortField::Priority => vec![record.priority.to_string()],
        SortField::Description => vec![record.description.clone()],
        SortField::Categories => record.categories.clone(),
        SortField::Defaults => record.defaults.clone(),
        SortField::AllowedValues => record.allowed_values.clone(),
    }
}
