use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use materials_tui::logic::breadcrumbs::BreadcrumbEntry;
use materials_tui::logic::formatting::format_term_header;
use materials_tui::registry::{self, TermEntry};
use materials_tui::utils::truncate_to_width;

const SEPARATOR: &str = " › ";

/// Longest label shown for a single crumb
const MAX_CRUMB_WIDTH: usize = 24;

/// Build the trail "1 First Term › 2 Week 1 › 3 Slides"
///
/// Crumbs are numbered for the 1-9 jump keys; the last one (current folder)
/// is highlighted.
pub fn build_trail_spans(crumbs: &[BreadcrumbEntry]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (idx, crumb) in crumbs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        }

        if idx < 9 {
            spans.push(Span::styled(
                format!("{} ", idx + 1),
                Style::default().fg(Color::Yellow),
            ));
        }

        let style = if idx + 1 == crumbs.len() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(truncate_to_width(&crumb.label, MAX_CRUMB_WIDTH), style));
    }

    spans
}

/// "Year y • Term t" followed by the term's subjects from the catalogue
pub fn term_header_spans(term: &TermEntry) -> Vec<Span<'static>> {
    let detail = registry::term_overview(&term.slug)
        .map(|overview| overview.description.to_string())
        .unwrap_or_else(|| term.display_name.clone());

    vec![
        Span::styled(
            format_term_header(term.year, term.term_number),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(detail, Style::default().fg(Color::Gray)),
    ]
}

/// Render the header: year/term line and the breadcrumb trail
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    term: Option<&TermEntry>,
    crumbs: &[BreadcrumbEntry],
) {
    let header_line = match term {
        Some(term) => Line::from(term_header_spans(term)),
        None => Line::from(Span::styled(
            "Materials",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
    };

    let trail_line = Line::from(build_trail_spans(crumbs));

    let header = Paragraph::new(vec![header_line, trail_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .title("HackerRank FCDS Materials"),
    );

    f.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use materials_tui::logic::breadcrumbs::build_breadcrumbs;
    use materials_tui::logic::path::Route;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_trail_is_numbered() {
        let route = Route::term("term-2").child("a").child("b");
        let crumbs = build_breadcrumbs(
            &route,
            "Second Term",
            &["Week 1".to_string(), "Slides".to_string()],
        );
        assert_eq!(
            text(&build_trail_spans(&crumbs)),
            "1 Second Term › 2 Week 1 › 3 Slides"
        );
    }

    #[test]
    fn test_term_header_shows_subjects() {
        let mut ids = std::collections::HashMap::new();
        ids.insert("term-1".to_string(), "root".to_string());
        let registry = registry::TermRegistry::new(&ids);
        let term = registry.lookup("term-1").unwrap();

        assert_eq!(
            text(&term_header_spans(term)),
            "Year 1 • Term 1  Introduction to Programming, Mathematics"
        );
    }

    #[test]
    fn test_empty_trail() {
        assert!(build_trail_spans(&[]).is_empty());
    }
}
