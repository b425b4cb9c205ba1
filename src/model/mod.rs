//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: Route, generation, breadcrumbs, focus, selection
//! - **ExplorerModel**: Load state, title and items of the current folder
//! - **UiModel**: User preferences, toast, quit flag
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the load service and the App
//! - State transitions are plain methods that tests can drive directly

pub mod explorer;
pub mod navigation;
pub mod types;
pub mod ui;

use std::time::Instant;

pub use explorer::ExplorerModel;
pub use navigation::{NavigationModel, TermListState};
pub use types::*;
pub use ui::UiModel;

use crate::api::{DriveError, DriveItem};
use crate::logic::errors::{format_error_detail, user_message};
use crate::logic::path::Route;
use crate::registry::TermRegistry;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub navigation: NavigationModel,
    pub explorer: ExplorerModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            navigation: NavigationModel::new(),
            explorer: ExplorerModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Start showing `route`
    ///
    /// Bumps the generation, clears the previous listing and resolves the term.
    /// Returns the request the load service must run, or `None` when the
    /// route ends in `NotFound` or a configuration error without touching
    /// the network.
    pub fn begin_navigation(&mut self, route: Route, registry: &TermRegistry) -> Option<LoadRequest> {
        self.navigation.generation += 1;
        self.navigation.breadcrumbs.clear();
        self.navigation.selection = None;
        self.navigation.focus = Focus::Listing;
        self.explorer.clear();

        let Some(entry) = registry.lookup(&route.term) else {
            tracing::debug!(term = %route.term, "unknown term");
            self.explorer.term = None;
            self.explorer.folder_id.clear();
            self.explorer.state = LoadState::NotFound;
            self.navigation.route = Some(route);
            return None;
        };

        self.explorer.term = Some(entry.clone());

        if !entry.is_configured() {
            self.explorer.folder_id.clear();
            self.explorer.state = LoadState::Error {
                message: format!("No folder is configured for {}.", entry.display_name),
                folder_id: String::new(),
            };
            self.navigation.route = Some(route);
            return None;
        }

        let folder_id = route.current_folder_id(&entry.remote_root_id).to_string();
        self.explorer.folder_id = folder_id.clone();
        self.explorer.state = LoadState::Loading;
        self.explorer.loading_since = Some(Instant::now());
        self.navigation.route = Some(route.clone());

        Some(LoadRequest {
            generation: self.navigation.generation,
            route,
            folder_id,
            term_name: entry.display_name.clone(),
        })
    }

    /// Reissue the current route under a fresh generation
    pub fn retry(&mut self, registry: &TermRegistry) -> Option<LoadRequest> {
        if !self.explorer.state.is_retryable() {
            return None;
        }
        let route = self.navigation.route.clone()?;
        self.begin_navigation(route, registry)
    }

    /// Apply the outcome of a load
    ///
    /// Returns false (and changes nothing) when `generation` is not the
    /// current one.
    pub fn apply_load_result(
        &mut self,
        generation: u64,
        result: Result<FolderListing, DriveError>,
    ) -> bool {
        if generation != self.navigation.generation {
            tracing::debug!(
                generation,
                current = self.navigation.generation,
                "discarding stale folder load"
            );
            return false;
        }

        self.explorer.loading_since = None;

        match result {
            Ok(listing) => {
                self.explorer.state = if listing.items.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Populated
                };
                self.navigation.selection = if listing.items.is_empty() {
                    None
                } else {
                    Some(0)
                };
                self.explorer.title = Some(listing.title);
                self.explorer.items = listing.items;
                self.navigation.breadcrumbs = listing.breadcrumbs;
            }
            Err(e) => {
                tracing::warn!(
                    folder_id = %self.explorer.folder_id,
                    detail = %format_error_detail(&e),
                    "folder load failed"
                );
                self.explorer.items.clear();
                self.navigation.breadcrumbs.clear();
                self.navigation.selection = None;
                self.explorer.state = LoadState::Error {
                    message: user_message(&e),
                    folder_id: self.explorer.folder_id.clone(),
                };
            }
        }

        true
    }

    /// Currently selected listing item
    pub fn selected_item(&self) -> Option<&DriveItem> {
        self.navigation
            .selection
            .and_then(|idx| self.explorer.items.get(idx))
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FOLDER_MIME_TYPE;
    use crate::logic::breadcrumbs::build_breadcrumbs;
    use std::collections::HashMap;

    fn registry() -> TermRegistry {
        let mut ids = HashMap::new();
        ids.insert("term-1".to_string(), "root-1".to_string());
        TermRegistry::new(&ids)
    }

    fn item(id: &str, mime: &str) -> DriveItem {
        DriveItem {
            id: id.to_string(),
            name: id.to_string(),
            mime_type: mime.to_string(),
            size: None,
            created_time: None,
            owners: None,
        }
    }

    #[test]
    fn test_model_creation() {
        let model = Model::new(false);
        assert_eq!(model.explorer.state, LoadState::Idle);
        assert_eq!(model.navigation.generation, 0);
        assert!(model.selected_item().is_none());
    }

    #[test]
    fn test_begin_navigation_targets_last_segment() {
        let mut model = Model::new(false);
        let request = model
            .begin_navigation(Route::term("term-1").child("sub"), &registry())
            .unwrap();

        assert_eq!(request.generation, 1);
        assert_eq!(request.folder_id, "sub");
        assert_eq!(request.term_name, "First Term");
        assert_eq!(model.explorer.state, LoadState::Loading);
        assert_eq!(model.explorer.display_title(), "Loading...");
        assert_eq!(model.navigation.focus, Focus::Listing);
    }

    #[test]
    fn test_term_root_targets_root_id() {
        let mut model = Model::new(false);
        let request = model.begin_navigation(Route::term("term-1"), &registry()).unwrap();
        assert_eq!(request.folder_id, "root-1");
    }

    #[test]
    fn test_unconfigured_term_is_error_without_request() {
        let mut model = Model::new(false);
        assert!(model.begin_navigation(Route::term("term-2"), &registry()).is_none());
        assert!(matches!(model.explorer.state, LoadState::Error { .. }));
    }

    #[test]
    fn test_success_populates_and_selects_first() {
        let mut model = Model::new(false);
        let route = Route::term("term-1").child("sub");
        let request = model.begin_navigation(route.clone(), &registry()).unwrap();

        let listing = FolderListing {
            title: "Week 1".to_string(),
            items: vec![item("a", FOLDER_MIME_TYPE), item("b", "application/pdf")],
            breadcrumbs: build_breadcrumbs(&route, "First Term", &["Week 1".to_string()]),
        };
        assert!(model.apply_load_result(request.generation, Ok(listing)));

        assert_eq!(model.explorer.state, LoadState::Populated);
        assert_eq!(model.explorer.display_title(), "Week 1");
        assert_eq!(model.navigation.selection, Some(0));
        assert_eq!(model.selected_item().map(|i| i.id.as_str()), Some("a"));
        assert_eq!(model.navigation.breadcrumbs.len(), 2);
    }

    #[test]
    fn test_empty_listing() {
        let mut model = Model::new(false);
        let request = model.begin_navigation(Route::term("term-1"), &registry()).unwrap();
        let listing = FolderListing {
            title: "First Term".to_string(),
            items: Vec::new(),
            breadcrumbs: build_breadcrumbs(&Route::term("term-1"), "First Term", &[]),
        };
        model.apply_load_result(request.generation, Ok(listing));
        assert_eq!(model.explorer.state, LoadState::Empty);
        assert!(model.navigation.selection.is_none());
    }

    #[test]
    fn test_retry_only_from_error() {
        let mut model = Model::new(false);
        let request = model.begin_navigation(Route::term("term-1"), &registry()).unwrap();
        assert!(model.retry(&registry()).is_none());

        model.apply_load_result(
            request.generation,
            Err(DriveError::Api {
                message: "Rate limit".to_string(),
            }),
        );
        assert_eq!(
            model.explorer.state,
            LoadState::Error {
                message: "Rate limit".to_string(),
                folder_id: "root-1".to_string()
            }
        );

        let again = model.retry(&registry()).unwrap();
        assert_eq!(again.generation, request.generation + 1);
        assert_eq!(again.route, Route::term("term-1"));
        assert_eq!(model.explorer.state, LoadState::Loading);
    }
}
