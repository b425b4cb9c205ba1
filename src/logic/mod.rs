//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - breadcrumbs: Breadcrumb trail derivation from a route
//! - errors: Client error classification and user-facing messages
//! - file: File kind detection and provider view/download URLs
//! - formatting: Size, owner and timestamp formatting
//! - navigation: Selection movement within a listing
//! - path: Route parsing and formatting
//! - sorting: Listing order (folders first, numeric, locale)
//! - ui: UI state transitions and timing

pub mod breadcrumbs;
pub mod errors;
pub mod file;
pub mod formatting;
pub mod navigation;
pub mod path;
pub mod sorting;
pub mod ui;
