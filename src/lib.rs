pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod store;
pub mod templates;
pub mod utils;
