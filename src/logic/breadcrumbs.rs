//! Breadcrumb derivation
//!
//! Turns a route plus resolved segment names into the navigable trail shown
//! above a listing.

use super::path::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    pub label: String,
    pub path: Route,
}

/// Build the trail for `route`
///
/// The first entry is the term root labelled `term_name`; each following entry
/// pairs `segment_names[i]` with the route through segment `i`. The result
/// always has `1 + route.sub_path.len()` entries; missing names fall back to
/// the segment id.
pub fn build_breadcrumbs(
    route: &Route,
    term_name: &str,
    segment_names: &[String],
) -> Vec<BreadcrumbEntry> {
    let mut crumbs = Vec::with_capacity(route.depth() + 1);
    crumbs.push(BreadcrumbEntry {
        label: term_name.to_string(),
        path: route.truncated(0),
    });

    for (i, segment) in route.sub_path.iter().enumerate() {
        let label = segment_names
            .get(i)
            .cloned()
            .unwrap_or_else(|| segment.clone());
        crumbs.push(BreadcrumbEntry {
            label,
            path: route.truncated(i + 1),
        });
    }

    crumbs
}

/// Where "back" goes from `route`: the breadcrumb before the last one
pub fn back_target(crumbs: &[BreadcrumbEntry], route: &Route) -> Option<Route> {
    if crumbs.len() >= 2 {
        return Some(crumbs[crumbs.len() - 2].path.clone());
    }
    route.parent()
}
