// URL handling utilities
pub mod url_builder;
pub mod query_string;

// Parsing utilities
pub mod parse_int;

pub use url_builder::list_href;
pub use query_string::build_query_string;
pub use parse_int::parse_page_number;
