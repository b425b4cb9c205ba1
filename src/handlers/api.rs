//! API Response Handler
//!
//! Applies folder loads from the background service to the model.

use crate::App;
use materials_tui::services::ApiResponse;

/// Handle API response from background service
///
/// Loads that belong to an older navigation are dropped by the model; the
/// rest replace the listing, title and breadcrumbs, or switch to the error
/// view.
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::FolderLoaded { generation, result } => {
            let applied = app.model.apply_load_result(generation, result);
            if applied {
                tracing::debug!(
                    generation,
                    state = ?app.model.explorer.state,
                    items = app.model.explorer.items.len(),
                    "folder load applied"
                );
            }
        }
    }
}
