pub mod helpers;
pub mod elements;
pub mod assets;
