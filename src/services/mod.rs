//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: background folder-load worker

pub mod api;

pub use api::{spawn_api_service, ApiRequest, ApiResponse};
