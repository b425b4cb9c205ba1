//! Navigation Model
//!
//! This sub-model contains all state related to navigation:
//! current route, generation counter, breadcrumb trail, focus and selection.

use super::types::Focus;
use crate::logic::breadcrumbs::{back_target, BreadcrumbEntry};
use crate::logic::path::Route;

/// Year tab and term selection inside the term pane
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermListState {
    /// Index into the catalogue's year groups
    pub active_year: usize,
    /// 0 or 1: which of the year's two terms is highlighted
    pub selected_term: usize,
}

/// Navigation state (route, breadcrumbs, focus, selection)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Route of the folder being shown (None before the first navigation)
    pub route: Option<Route>,

    /// Bumped on every navigation; responses carrying an older value are stale
    pub generation: u64,

    /// Breadcrumb trail of the last successful load
    pub breadcrumbs: Vec<BreadcrumbEntry>,

    /// Selected item in the listing
    pub selection: Option<usize>,

    pub focus: Focus,

    pub term_list: TermListState,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            route: None,
            generation: 0,
            breadcrumbs: Vec::new(),
            selection: None,
            focus: Focus::Terms,
            term_list: TermListState::default(),
        }
    }

    /// Route one level up, `None` at a term root
    pub fn back_route(&self) -> Option<Route> {
        self.route
            .as_ref()
            .and_then(|route| back_target(&self.breadcrumbs, route))
    }

    /// Route of the 1-based breadcrumb `n`
    pub fn breadcrumb_route(&self, n: usize) -> Option<Route> {
        n.checked_sub(1)
            .and_then(|idx| self.breadcrumbs.get(idx))
            .map(|crumb| crumb.path.clone())
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::breadcrumbs::build_breadcrumbs;

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new();
        assert_eq!(model.generation, 0);
        assert_eq!(model.focus, Focus::Terms);
        assert!(model.route.is_none());
        assert!(model.selection.is_none());
        assert!(model.back_route().is_none());
    }

    #[test]
    fn test_breadcrumb_route_is_one_based() {
        let mut model = NavigationModel::new();
        let route = Route::term("term-1").child("a");
        model.breadcrumbs = build_breadcrumbs(&route, "First Term", &["A".to_string()]);
        model.route = Some(route.clone());

        assert_eq!(model.breadcrumb_route(0), None);
        assert_eq!(model.breadcrumb_route(1), Some(Route::term("term-1")));
        assert_eq!(model.breadcrumb_route(2), Some(route));
        assert_eq!(model.breadcrumb_route(3), None);
        assert_eq!(model.back_route(), Some(Route::term("term-1")));
    }
}
