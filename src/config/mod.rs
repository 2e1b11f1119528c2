//! Configuration Module
//!
//! Handles client configuration loading and token resolution.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::ClientConfig;
