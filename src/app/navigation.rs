//! Navigation methods
//!
//! Route changes, selection movement and focus switching between the term
//! pane and the listing.

use crate::App;
use materials_tui::services::ApiRequest;
use materials_tui::logic;
use materials_tui::logic::path::Route;
use materials_tui::model::{Focus, LoadRequest};
use materials_tui::registry;

impl App {
    /// Show `route`, dispatching a load when the term resolves
    pub(crate) fn navigate(&mut self, route: Route) {
        tracing::debug!(route = %route, "navigate");
        let request = self.model.begin_navigation(route, &self.registry);
        self.dispatch_load(request);
    }

    /// Retry the current route after an error
    pub(crate) fn retry(&mut self) {
        let request = self.model.retry(&self.registry);
        self.dispatch_load(request);
    }

    fn dispatch_load(&mut self, request: Option<LoadRequest>) {
        let Some(request) = request else {
            return;
        };
        if self.api_tx.send(ApiRequest::LoadFolder(request)).is_err() {
            tracing::warn!("load service is gone");
            self.model
                .show_toast("Error: background loader stopped".to_string());
        }
    }

    /// Open the term highlighted in the term pane
    pub(crate) fn open_selected_term(&mut self) {
        let state = &self.model.navigation.term_list;
        let slug = registry::overview()
            .get(state.active_year)
            .and_then(|year| year.terms.get(state.selected_term))
            .map(|term| term.slug);

        if let Some(slug) = slug {
            self.navigate(Route::term(slug));
        }
    }

    /// Enter the selected folder, or open the selected file in the browser
    pub(crate) fn activate_selected(&mut self) {
        let Some(item) = self.model.selected_item().cloned() else {
            return;
        };

        if item.is_folder() {
            if let Some(route) = self.model.navigation.route.as_ref().map(|r| r.child(&item.id)) {
                self.navigate(route);
            }
        } else {
            self.open_url(&logic::file::view_url(&item), &item.name);
        }
    }

    /// Go one level up; at a term root (or NotFound) return to the term pane
    pub(crate) fn go_back(&mut self) {
        match self.model.navigation.back_route() {
            Some(route) if self.model.explorer.term.is_some() => self.navigate(route),
            _ => self.focus_terms(),
        }
    }

    /// Jump to the 1-based breadcrumb `n`
    pub(crate) fn jump_to_breadcrumb(&mut self, n: usize) {
        let Some(route) = self.model.navigation.breadcrumb_route(n) else {
            return;
        };
        if Some(&route) != self.model.navigation.route.as_ref() {
            self.navigate(route);
        }
    }

    pub(crate) fn focus_terms(&mut self) {
        self.model.navigation.focus = Focus::Terms;
    }

    /// Give focus back to the listing if one has been opened
    pub(crate) fn focus_listing(&mut self) {
        if self.model.navigation.route.is_some() {
            self.model.navigation.focus = Focus::Listing;
        }
    }

    /// Tab: cycle the active year in the term pane
    pub(crate) fn cycle_year(&mut self) {
        let state = &mut self.model.navigation.term_list;
        state.active_year = logic::ui::cycle_year(state.active_year, registry::overview().len());
        state.selected_term = 0;
    }

    pub(crate) fn next_item(&mut self) {
        match self.model.navigation.focus {
            Focus::Terms => {
                let state = &mut self.model.navigation.term_list;
                state.selected_term = (state.selected_term + 1) % 2;
            }
            Focus::Listing => {
                self.model.navigation.selection = logic::navigation::next_selection(
                    self.model.navigation.selection,
                    self.model.explorer.items.len(),
                );
            }
        }
    }

    pub(crate) fn previous_item(&mut self) {
        match self.model.navigation.focus {
            Focus::Terms => {
                let state = &mut self.model.navigation.term_list;
                state.selected_term = (state.selected_term + 1) % 2;
            }
            Focus::Listing => {
                self.model.navigation.selection = logic::navigation::prev_selection(
                    self.model.navigation.selection,
                    self.model.explorer.items.len(),
                );
            }
        }
    }

    pub(crate) fn page_down(&mut self, page: usize) {
        if self.model.navigation.focus == Focus::Listing {
            self.model.navigation.selection = logic::navigation::page_down(
                self.model.navigation.selection,
                self.model.explorer.items.len(),
                page,
            );
        }
    }

    pub(crate) fn page_up(&mut self, page: usize) {
        if self.model.navigation.focus == Focus::Listing {
            self.model.navigation.selection = logic::navigation::page_up(
                self.model.navigation.selection,
                self.model.explorer.items.len(),
                page,
            );
        }
    }

    pub(crate) fn jump_to_first(&mut self) {
        if self.model.navigation.focus == Focus::Listing && !self.model.explorer.items.is_empty() {
            self.model.navigation.selection = Some(0);
        }
    }

    pub(crate) fn jump_to_last(&mut self) {
        let len = self.model.explorer.items.len();
        if self.model.navigation.focus == Focus::Listing && len > 0 {
            self.model.navigation.selection = Some(len - 1);
        }
    }
}
