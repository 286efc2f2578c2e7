// src/core/mod.rs
//! Configuration and outbound service plumbing

pub mod config_manager;
pub mod service_client;

pub use config_manager::ConfigManager;
pub use service_client::SuggestionClient;
