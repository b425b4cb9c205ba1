//! Shared types for the Model
//!
//! These types are used across multiple sub-models and by the load service.

use crate::api::DriveItem;
use crate::logic::breadcrumbs::BreadcrumbEntry;
use crate::logic::path::Route;

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Which pane receives key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Terms,
    Listing,
}

/// Lifecycle of the folder listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet (term pane only)
    Idle,
    Loading,
    Error { message: String, folder_id: String },
    Empty,
    Populated,
    /// Unknown term slug; terminal, never retried
    NotFound,
}

impl LoadState {
    /// States that can be reissued with `r`
    pub fn is_retryable(&self) -> bool {
        matches!(self, LoadState::Error { .. })
    }
}

/// Everything a successful folder load produces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderListing {
    pub title: String,
    pub items: Vec<DriveItem>,
    pub breadcrumbs: Vec<BreadcrumbEntry>,
}

/// Work order for the load service, tagged with the navigation generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub route: Route,
    pub folder_id: String,
    pub term_name: String,
}
