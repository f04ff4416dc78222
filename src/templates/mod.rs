// List fragments
pub mod list_fragment_template;
pub mod pagination_template;

// Full pages
pub mod elements_page_template;
pub mod element_detail_template;

// Re-export all templates
pub use list_fragment_template::ListFragmentTemplate;
pub use pagination_template::PaginationTemplate;
pub use elements_page_template::ElementsPageTemplate;
pub use element_detail_template::{DetailField, ElementDetailTemplate};
