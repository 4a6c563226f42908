pub mod app;
pub mod blocks;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod theme;
pub mod viewport;
