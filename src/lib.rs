pub mod cli;
pub mod config;
pub mod models;
pub mod session;
pub mod slides;
pub mod tui;
pub mod utils;
