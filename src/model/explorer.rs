//! Explorer Model
//!
//! The listing being shown: its load state, title and items.

use std::time::Instant;

use super::types::LoadState;
use crate::api::DriveItem;
use crate::registry::TermEntry;

#[derive(Clone, Debug)]
pub struct ExplorerModel {
    pub state: LoadState,

    /// Term of the current route (None for NotFound and before any navigation)
    pub term: Option<TermEntry>,

    /// Folder the current load targets
    pub folder_id: String,

    /// Resolved folder name, set on success
    pub title: Option<String>,

    pub items: Vec<DriveItem>,

    /// When the current load started (drives the spinner)
    pub loading_since: Option<Instant>,
}

impl ExplorerModel {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            term: None,
            folder_id: String::new(),
            title: None,
            items: Vec::new(),
            loading_since: None,
        }
    }

    /// Drop everything the previous listing produced
    pub fn clear(&mut self) {
        self.title = None;
        self.items.clear();
        self.loading_since = None;
    }

    /// Title line: the folder name, or "Loading..." until it resolves
    pub fn display_title(&self) -> &str {
        match (&self.state, &self.title) {
            (LoadState::Loading, _) | (_, None) => "Loading...",
            (_, Some(title)) => title,
        }
    }
}

impl Default for ExplorerModel {
    fn default() -> Self {
        Self::new()
    }
}
