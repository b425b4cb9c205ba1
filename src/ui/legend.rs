use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use materials_tui::model::{Focus, LoadState};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, focus: Focus, state: &LoadState, has_crumbs: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            key("hjkl"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
            key("^d/^u"),
            Span::raw(":½Page  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("Enter"),
            Span::raw(":Open  "),
            key("←"),
            Span::raw(":Back  "),
        ]);
    }

    match focus {
        Focus::Terms => {
            hotkey_spans.extend(vec![key("Tab"), Span::raw(":Next Year  ")]);
        }
        Focus::Listing => {
            match state {
                LoadState::Populated => {
                    hotkey_spans.extend(vec![
                        key("d"),
                        Span::raw(":Download  "),
                        key("o"),
                        Span::raw(":Open in Drive  "),
                    ]);
                }
                LoadState::Error { .. } => {
                    hotkey_spans.extend(vec![
                        key("r"),
                        Span::raw(":Retry  "),
                        key("o"),
                        Span::raw(":Open in Drive  "),
                    ]);
                }
                LoadState::NotFound => {
                    hotkey_spans.extend(vec![key("Esc"), Span::raw(":Materials  ")]);
                }
                _ => {}
            }

            if has_crumbs {
                hotkey_spans.extend(vec![key("1-9"), Span::raw(":Jump  ")]);
            }
            hotkey_spans.extend(vec![key("Tab"), Span::raw(":Terms  ")]);
        }
    }

    // Quit - always available
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Render the hotkey legend (changes with vim mode, focus and load state)
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, focus: Focus, state: &LoadState, has_crumbs: bool) {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, focus, state, has_crumbs));

    let legend = Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    focus: Focus,
    state: &LoadState,
    has_crumbs: bool,
) -> u16 {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, focus, state, has_crumbs));

    // Count without the block: line_count() doesn't account for borders
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_error_view_offers_retry_and_drive() {
        let state = LoadState::Error {
            message: "x".to_string(),
            folder_id: "f".to_string(),
        };
        let text = spans_to_text(&build_hotkey_spans(false, Focus::Listing, &state, false));
        assert!(text.contains("r:Retry"), "got: {}", text);
        assert!(text.contains("o:Open in Drive"), "got: {}", text);
        assert!(!text.contains("Download"), "got: {}", text);
    }

    #[test]
    fn test_populated_view_offers_download() {
        let text = spans_to_text(&build_hotkey_spans(false, Focus::Listing, &LoadState::Populated, true));
        assert!(text.contains("d:Download"));
        assert!(text.contains("1-9:Jump"));
        assert!(!text.contains("Retry"));
    }

    #[test]
    fn test_term_pane_keys() {
        let text = spans_to_text(&build_hotkey_spans(true, Focus::Terms, &LoadState::Idle, false));
        assert!(text.contains("hjkl:Nav"));
        assert!(text.contains("Tab:Next Year"));
        assert!(text.ends_with("q:Quit"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(200, false, Focus::Listing, &LoadState::Populated, true);
        let narrow = calculate_legend_height(30, false, Focus::Listing, &LoadState::Populated, true);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
