use std::env;
use std::path::{Path, PathBuf};

use crate::models::{SortDirection, SortField, SortSpec};

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_FILE: &str = "elements.json";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_PAGE_WINDOW: usize = 9;
pub const DEFAULT_CONTAINER_ID: &str = "element-list";
pub const DEFAULT_LIST_PATH: &str = "/elements";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_data_file() -> PathBuf {
    env::var("DATA_FILE")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
        .into()
}

/// Optional JSON translation catalog; `None` means untranslated English.
pub fn get_messages_file() -> Option<PathBuf> {
    env::var("MESSAGES_FILE")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn get_page_size() -> usize {
    parse_positive(env::var("PAGE_SIZE").ok().as_deref()).unwrap_or(DEFAULT_PAGE_SIZE)
}

pub fn get_page_window() -> usize {
    parse_positive(env::var("PAGE_WINDOW").ok().as_deref()).unwrap_or(DEFAULT_PAGE_WINDOW)
}

pub fn get_container_id() -> String {
    sanitize_container_id(&env::var("CONTAINER_ID").unwrap_or_default())
}

/// Sort applied when a request names none, or names one we don't know.
pub fn get_default_sort() -> SortSpec {
    parse_default_sort(
        env::var("DEFAULT_SORT").ok().as_deref(),
        env::var("DEFAULT_DIRECTION").ok().as_deref(),
    )
}

/// Unset or blank values mean `name asc`; unknown ones too, with a warning.
pub fn parse_default_sort(field: Option<&str>, direction: Option<&str>) -> SortSpec {
    let field = match field.filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.parse::<SortField>().unwrap_or_else(|e| {
            tracing::warn!(%e, "Ignoring DEFAULT_SORT, using name");
            SortField::Name
        }),
        None => SortField::Name,
    };
    let direction = match direction.filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.parse::<SortDirection>().unwrap_or_else(|e| {
            tracing::warn!(%e, "Ignoring DEFAULT_DIRECTION, using asc");
            SortDirection::Asc
        }),
        None => SortDirection::Asc,
    };
    SortSpec::new(field, direction)
}

pub fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|v| v.trim().parse::<usize>().ok()).filter(|n| *n > 0)
}

/// Container ids end up in an HTML id attribute and a CSS selector in the
/// refresh script, so only `[A-Za-z0-9_-]` survives.
pub fn sanitize_container_id(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if cleaned.is_empty() {
        DEFAULT_CONTAINER_ID.to_string()
    } else {
        cleaned
    }
}
