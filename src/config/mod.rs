//! Configuration management for esp-merge

pub mod app_config;

pub use app_config::*;
