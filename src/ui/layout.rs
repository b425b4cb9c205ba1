use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width only the focused pane is drawn
const MIN_SPLIT_WIDTH: u16 = 70;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Header: year/term line plus breadcrumb trail
    pub header_area: Rect,
    /// Term pane (if visible)
    pub terms_area: Option<Rect>,
    /// Listing pane (if visible)
    pub listing_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16, terms_focused: bool) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Header (2 text lines + borders)
            Constraint::Min(5),                // Term pane + listing
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let content_area = main_chunks[1];

    let (terms_area, listing_area) = if content_area.width < MIN_SPLIT_WIDTH {
        if terms_focused {
            (Some(content_area), None)
        } else {
            (None, Some(content_area))
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
            .split(content_area);
        (Some(chunks[0]), Some(chunks[1]))
    };

    LayoutInfo {
        header_area: main_chunks[0],
        terms_area,
        listing_area,
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_terminal_shows_both_panes() {
        let info = calculate_layout(Rect::new(0, 0, 120, 40), 3, true);
        assert!(info.terms_area.is_some());
        assert!(info.listing_area.is_some());
        assert_eq!(info.header_area.height, 4);
        assert_eq!(info.status_area.height, 3);
    }

    #[test]
    fn test_narrow_terminal_shows_focused_pane_only() {
        let info = calculate_layout(Rect::new(0, 0, 50, 40), 4, false);
        assert!(info.terms_area.is_none());
        assert_eq!(info.listing_area.map(|a| a.width), Some(50));

        let info = calculate_layout(Rect::new(0, 0, 50, 40), 4, true);
        assert!(info.listing_area.is_none());
    }
}
