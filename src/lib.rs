pub mod api;
pub mod bulk;
pub mod config;
pub mod error;
pub mod models;
pub mod relay;
pub mod ui;
