pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod forms;
pub mod grade;
pub mod handlers;
pub mod inflight;
pub mod models;
pub mod templates_structs;
