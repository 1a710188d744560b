pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod global_constants;
