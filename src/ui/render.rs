use crate::App;
use ratatui::Frame;

use super::{breadcrumb, layout, legend, listing, status_bar, term_list, toast};
use materials_tui::model::Focus;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.model;
    let focus = model.navigation.focus;
    let has_crumbs = !model.navigation.breadcrumbs.is_empty();

    let legend_height = legend::calculate_legend_height(
        size.width,
        model.ui.vim_mode,
        focus,
        &model.explorer.state,
        has_crumbs,
    );
    let layout_info = layout::calculate_layout(size, legend_height, focus == Focus::Terms);

    breadcrumb::render_header(
        f,
        layout_info.header_area,
        model.explorer.term.as_ref(),
        &model.navigation.breadcrumbs,
    );

    if let Some(area) = layout_info.terms_area {
        term_list::render_term_pane(
            f,
            area,
            &model.navigation.term_list,
            focus == Focus::Terms,
            &app.icon_renderer,
        );
    }

    if let Some(area) = layout_info.listing_area {
        listing::render_listing(f, area, model, focus == Focus::Listing, &app.icon_renderer);
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        focus,
        &model.explorer.state,
        has_crumbs,
    );

    status_bar::render_status_bar(f, layout_info.status_area, model);

    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
