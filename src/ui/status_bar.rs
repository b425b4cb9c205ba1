use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use materials_tui::logic::file::file_kind;
use materials_tui::logic::formatting::{format_created, format_item_count, format_owner, format_size};
use materials_tui::model::{Focus, LoadState, Model};
use materials_tui::registry;

const FOOTER: &str = "The Hacker Can't Be Rank • HackerRank FCDS Materials";

/// Build the status text for the current focus and state
pub fn build_status_line(model: &Model) -> String {
    if model.navigation.focus == Focus::Terms {
        let state = &model.navigation.term_list;
        return registry::overview()
            .get(state.active_year)
            .and_then(|year| year.terms.get(state.selected_term).map(|term| (year, term)))
            .map(|(year, term)| format!("{} │ {} │ {}", year.label, term.label, term.description))
            .unwrap_or_else(|| FOOTER.to_string());
    }

    let route = model
        .navigation
        .route
        .as_ref()
        .map(|r| r.to_string())
        .unwrap_or_default();

    match &model.explorer.state {
        LoadState::Populated => {
            let count = format_item_count(model.explorer.items.len());
            match model.selected_item() {
                Some(item) => {
                    let mut parts = vec![count, file_kind(&item.mime_type).label().to_string()];
                    let size = format_size(item.size.as_deref());
                    if !size.is_empty() {
                        parts.push(size);
                    }
                    parts.push(format!("Owner: {}", format_owner(item.owners.as_deref())));
                    let created = format_created(item.created_time.as_deref());
                    if !created.is_empty() {
                        parts.push(format!("Created: {}", created));
                    }
                    parts.join(" │ ")
                }
                None => count,
            }
        }
        LoadState::Empty => format!("{} │ {}", format_item_count(0), route),
        LoadState::Loading => format!("Loading {}", route),
        LoadState::Error { folder_id, .. } if !folder_id.is_empty() => {
            format!("Failed: {} │ folder {}", route, folder_id)
        }
        LoadState::Error { .. } | LoadState::NotFound => route,
        LoadState::Idle => FOOTER.to_string(),
    }
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let line = Line::from(Span::raw(build_status_line(model)));

    let status = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status, area);
}
