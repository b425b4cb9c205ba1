//! Materials TUI Library
//!
//! Exposes the non-terminal modules for the binary and for testing

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod registry;
pub mod services;
pub mod utils;
