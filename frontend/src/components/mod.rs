pub mod footer;
pub mod schema_builder;
pub mod theme_selector;
