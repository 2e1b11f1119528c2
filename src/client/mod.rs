//! Client Module
//!
//! Authenticated HTTP transport for the Shelfware backend.

pub mod http;

pub use http::HttpClient;
