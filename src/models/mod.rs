pub mod activity;
pub mod candidate;
pub mod cv;
pub mod hiring_manager;
pub mod job;
pub mod project;
pub mod response;
pub mod status;
