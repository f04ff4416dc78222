//! Element data collaborator: filtering, ordering and slicing of the
//! element set into pages.

pub mod error;

use std::cmp::Ordering;
use std::path::Path;

use crate::models::{ElementRecord, Page, SortDirection, SortField, SortSpec};

pub use error::StoreError;

/// One page request as understood by an [`ElementSource`].
#[derive(Clone, Debug, PartialEq)]
pub struct ElementQuery {
    /// Restrict to the elements of one object template.
    pub template_id: Option<u64>,
    pub page: usize,
    pub per_page: usize,
    pub sort: SortSpec,
}

impl ElementQuery {
    pub fn new(page: usize, per_page: usize, sort: SortSpec) -> Self {
        Self { template_id: None, page, per_page, sort }
    }

    pub fn for_template(mut self, template_id: u64) -> Self {
        self.template_id = Some(template_id);
        self
    }
}

pub trait ElementSource: Send + Sync {
    /// The requested page, already filtered and sorted. Page numbers past
    /// the end are clamped to the last page.
    fn page(&self, query: &ElementQuery) -> Page;

    fn get(&self, id: u64) -> Option<ElementRecord>;
}

/// Element set held in memory, loaded once from a JSON array.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    elements: Vec<ElementRecord>,
    default_per_page: usize,
}

impl MemoryStore {
    pub fn new(elements: Vec<ElementRecord>, default_per_page: usize) -> Self {
        Self { elements, default_per_page: default_per_page.max(1) }
    }

    pub fn load(path: &Path, default_per_page: usize) -> Result<Self, StoreError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: display.clone(),
            source,
        })?;
        let elements = serde_json::from_str::<Vec<ElementRecord>>(&text)
            .map_err(|source| StoreError::Json { path: display, source })?;
        tracing::info!(path = %path.display(), count = elements.len(), "Loaded element data");
        Ok(Self::new(elements, default_per_page))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementSource for MemoryStore {
    fn page(&self, query: &ElementQuery) -> Page {
        let per_page = if query.per_page == 0 { self.default_per_page } else { query.per_page };
        let mut matching: Vec<&ElementRecord> = self
            .elements
            .iter()
            .filter(|e| query.template_id.map_or(true, |t| e.template_id == t))
            .collect();
        let total = matching.len();
        if total == 0 {
            return Page::empty(per_page);
        }

        sort_records(&mut matching, &query.sort);

        let total_pages = total.div_ceil(per_page);
        let page = query.page.clamp(1, total_pages);
        if page != query.page {
            tracing::debug!(requested = query.page, clamped = page, total_pages, "Clamped page number");
        }
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total);
        let records = matching[start..end].iter().map(|e| (*e).clone()).collect();
        Page::new(records, page, per_page, total)
    }

    fn get(&self, id: u64) -> Option<ElementRecord> {
        self.elements.iter().find(|e| e.id == id).cloned()
    }
}

/// Stable sort; ties keep data-file order.
pub fn sort_records(records: &mut [&ElementRecord], sort: &SortSpec) {
    records.sort_by(|a, b| {
        let ord = compare_field(a, b, sort.field);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

fn compare_field(a: &ElementRecord, b: &ElementRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Type => compare_text(&a.kind, &b.kind),
        SortField::Priority => a.priority.cmp(&b.priority),
        SortField::Description => compare_text(&a.description, &b.description),
        SortField::Categories => compare_lists(&a.categories, &b.categories),
        SortField::Defaults => compare_lists(&a.defaults, &b.defaults),
        SortField::AllowedValues => compare_lists(&a.allowed_values, &b.allowed_values),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_lists(a: &[String], b: &[String]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match compare_text(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}
