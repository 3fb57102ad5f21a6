// Library for tests to access modules

pub mod aggregator;
pub mod config;
pub mod error;
pub mod main_config;
pub mod models;
pub mod render;
pub mod status_file;
pub mod version;
