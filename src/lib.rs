pub mod actions;
pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod messages;
pub mod models;
pub mod result;
pub mod schemas;
