//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Folder loads coming back from the background service
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and translate events into model transitions.

pub mod api;
pub mod keyboard;

pub use api::handle_api_response;
pub use keyboard::handle_key;
