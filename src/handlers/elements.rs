use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use crate::config::DEFAULT_LIST_PATH;
use crate::error::AppError;
use crate::models::{AppState, SortDirection, SortField, SortSpec};
use crate::render::{field_lines, render_page, ColumnKind};
use crate::store::ElementQuery;
use crate::templates::{DetailField, ElementDetailTemplate, ElementsPageTemplate};
use crate::utils::parse_page_number;

use super::helpers::{is_partial_request, plain_html, render_template};

/// Query parameters of the list routes. Kept as raw strings so a bad
/// value degrades to a default instead of rejecting the request.
#[derive(Debug, Default, PartialEq)]
pub struct ListParams {
    pub page: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ListParams {
    /// Picks the known keys out of raw query pairs. A repeated key keeps
    /// its last value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => params.page = Some(value),
                "sort" => params.sort = Some(value),
                "direction" => params.direction = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// Sort requested by `params`, falling back to `default` for anything
/// missing or unknown.
pub fn resolve_sort(params: &ListParams, default: SortSpec) -> SortSpec {
    let field = match params.sort.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => raw.parse::<SortField>().unwrap_or_else(|e| {
            tracing::warn!(%e, "Ignoring sort parameter");
            default.field
        }),
        None => default.field,
    };
    let direction = match params.direction.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => raw.parse::<SortDirection>().unwrap_or_else(|e| {
            tracing::warn!(%e, "Ignoring direction parameter");
            default.direction
        }),
        None => default.direction,
    };
    SortSpec::new(field, direction)
}

pub async fn elements_index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let params = ListParams::from_pairs(pairs);
    list_response(&state, &headers, &params, None, DEFAULT_LIST_PATH.to_string())
}

pub async fn template_elements(
    State(state): State<AppState>,
    Path(template_id): Path<u64>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let params = ListParams::from_pairs(pairs);
    let base_path = format!("/object-templates/{}/elements", template_id);
    list_response(&state, &headers, &params, Some(template_id), base_path)
}

fn list_response(
    state: &AppState,
    headers: &HeaderMap,
    params: &ListParams,
    template_id: Option<u64>,
    base_path: String,
) -> Result<Response, AppError> {
    let sort = resolve_sort(params, state.default_sort);
    let mut query = ElementQuery::new(parse_page_number(params.page.as_deref()), state.page_size, sort);
    if let Some(id) = template_id {
        query = query.for_template(id);
    }
    let page = state.store.page(&query);
    let config = state.list_config.with_base_path(base_path);
    let fragment = render_page(&page, &sort, &config, state.messages.as_ref())?;

    let partial = is_partial_request(headers);
    tracing::debug!(
        page = page.page_number,
        total_pages = page.total_pages,
        sort = %sort.field,
        direction = sort.direction.as_str(),
        partial,
        "Rendered element list"
    );

    let body = if partial {
        fragment
    } else {
        let title = state.messages.translate("Object Template Elements").into_owned();
        ElementsPageTemplate {
            title: title.clone(),
            heading: title,
            list: &fragment,
        }
        .render()?
    };
    // Same URL, two representations.
    Ok(([(header::VARY, "X-Requested-With")], Html(body)).into_response())
}

pub async fn element_detail(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    let Some(record) = state.store.get(id) else {
        tracing::info!(id, "Element not found");
        return Ok(plain_html(StatusCode::NOT_FOUND, "Element not found"));
    };
    let fields = state
        .list_config
        .columns
        .iter()
        .filter_map(|column| match column.kind {
            ColumnKind::Field(field) => Some(DetailField {
                label: state.messages.translate(&column.label).into_owned(),
                lines: field_lines(&record, field),
            }),
            ColumnKind::Actions => None,
        })
        .collect();
    let back_path = if record.template_id > 0 {
        format!("/object-templates/{}/elements", record.template_id)
    } else {
        DEFAULT_LIST_PATH.to_string()
    };
    render_template(ElementDetailTemplate {
        title: record.name.clone(),
        back_href: back_path,
        back_label: state.messages.translate("Back to list").into_owned(),
        fields,
    })
}
