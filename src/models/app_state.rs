use std::sync::Arc;

use crate::models::SortSpec;
use crate::render::{ListConfig, Messages};
use crate::store::ElementSource;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ElementSource>,
    pub messages: Arc<dyn Messages>,
    /// Shared list settings; `base_path` is replaced per route.
    pub list_config: Arc<ListConfig>,
    pub page_size: usize,
    pub default_sort: SortSpec,
    pub custom_css: Option<String>,
}
