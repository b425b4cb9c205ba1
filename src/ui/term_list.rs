use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use super::icons::IconRenderer;
use materials_tui::model::TermListState;
use materials_tui::registry::{self, TermOverview};

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Description and subject bullets for one term
fn detail_lines(term: &TermOverview) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            term.description,
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::raw(""),
    ];
    lines.extend(
        term.subjects
            .iter()
            .map(|subject| Line::from(vec![Span::styled("• ", Style::default().fg(Color::Magenta)), Span::raw(*subject)])),
    );
    lines
}

/// Render the materials overview: year tabs, the year's two terms, and the
/// highlighted term's subjects
pub fn render_term_pane(
    f: &mut Frame,
    area: Rect,
    state: &TermListState,
    focused: bool,
    icon_renderer: &IconRenderer,
) {
    let years = registry::overview();
    let Some(year) = years.get(state.active_year) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Year tabs
            Constraint::Length(4), // Terms (2 rows + borders)
            Constraint::Min(3),    // Details
        ])
        .split(area);

    let tabs = Tabs::new(years.iter().map(|y| y.label).collect::<Vec<_>>())
        .select(state.active_year)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Materials")
                .border_style(border_style(focused)),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    let items: Vec<ListItem> = year
        .terms
        .iter()
        .map(|term| ListItem::new(Line::from(vec![icon_renderer.term_icon(), Span::raw(term.label)])))
        .collect();

    let mut list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(year.label)
            .border_style(border_style(focused)),
    );
    if focused {
        list = list
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
    }

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_term));
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    if let Some(term) = year.terms.get(state.selected_term) {
        let details = Paragraph::new(detail_lines(term))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Subjects")
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(details, chunks[2]);
    }
}
