//! Movie Gate
//!
//! A small movie catalog served over HTTP behind bearer-token authentication
//! and a role check. Exposes the modules for the binary and integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod store;

pub use api::create_router;
pub use config::Config;
