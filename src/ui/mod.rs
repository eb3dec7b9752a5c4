pub mod alerts;
pub mod app;
pub mod dropdown;
pub mod feed;
pub mod forms;
pub mod poller;
pub mod tabs;
pub mod views;
