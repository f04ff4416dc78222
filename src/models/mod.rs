pub mod element_record;
pub mod page;
pub mod sort_spec;
pub mod app_state;

pub use element_record::ElementRecord;
pub use page::Page;
pub use sort_spec::{SortDirection, SortField, SortSpec};
pub use app_state::AppState;
