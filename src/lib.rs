pub mod app;
pub mod cache;
pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod github;
pub mod limiter;
pub mod models;
pub mod report;
