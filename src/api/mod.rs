//! API Module
//!
//! Project resource types and payload construction.

pub mod projects;

pub use projects::{Project, ProjectFormData};
