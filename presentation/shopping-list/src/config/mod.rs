pub mod app_config;
pub mod catalog_config;
pub mod matcher_config;
