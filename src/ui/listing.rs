use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::icons::IconRenderer;
use materials_tui::api::DriveItem;
use materials_tui::logic::file::file_kind;
use materials_tui::logic::formatting::{format_created, format_item_count, format_owner, format_size};
use materials_tui::logic::ui::spinner_frame;
use materials_tui::model::{LoadState, Model};
use materials_tui::utils::truncate_to_width;

const ERROR_HINT: &str =
    "This may be due to API restrictions. Make sure the API key allows requests from this client.";

/// Right-hand column: size (files only), owner and creation date
pub fn item_info(item: &DriveItem) -> String {
    let mut parts = Vec::new();
    if !item.is_folder() {
        let size = format_size(item.size.as_deref());
        if !size.is_empty() {
            parts.push(size);
        }
    }
    parts.push(format_owner(item.owners.as_deref()));
    let created = format_created(item.created_time.as_deref());
    if !created.is_empty() {
        parts.push(created);
    }
    parts.join("  ")
}

/// Build a list row: icon and name left, info right-aligned when it fits
fn build_list_item<'a>(item: &'a DriveItem, icon: Span<'static>, panel_width: u16) -> ListItem<'a> {
    // borders(2) + highlight(2) + padding(2)
    let available_width = panel_width.saturating_sub(6) as usize;
    let spacing = 2;

    let info = item_info(item);
    let info_width = info.width();
    let icon_width = icon.content.width();

    let name_budget = available_width.saturating_sub(icon_width);
    let name_style = if item.is_folder() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    if item.name.width() + spacing + info_width <= name_budget {
        let padding = name_budget - item.name.width() - info_width;
        return ListItem::new(Line::from(vec![
            icon,
            Span::styled(item.name.as_str(), name_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(info, Style::default().fg(Color::Rgb(120, 120, 120))),
        ]));
    }

    // Not enough room for info, just show the (possibly cut) name
    ListItem::new(Line::from(vec![
        icon,
        Span::styled(truncate_to_width(&item.name, name_budget), name_style),
    ]))
}

/// Centered message block used by every non-list state
fn render_message(f: &mut Frame, area: Rect, block: Block, lines: Vec<Line>) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(lines.len()) / 2;

    let mut padded = vec![Line::raw(""); pad];
    padded.extend(lines);

    let paragraph = Paragraph::new(padded)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render the listing pane for the current load state
pub fn render_listing(f: &mut Frame, area: Rect, model: &Model, focused: bool, icon_renderer: &IconRenderer) {
    let explorer = &model.explorer;

    let title = match explorer.state {
        LoadState::Idle | LoadState::NotFound => String::new(),
        LoadState::Populated | LoadState::Empty => format!(
            "{} ({})",
            explorer.display_title(),
            format_item_count(explorer.items.len())
        ),
        _ => explorer.display_title().to_string(),
    };

    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let dim = Style::default().fg(Color::Gray);

    match &explorer.state {
        LoadState::Idle => render_message(
            f,
            area,
            block,
            vec![
                Line::styled("Pick a term and press Enter", Style::default().add_modifier(Modifier::BOLD)),
                Line::styled("Tab switches between years", dim),
            ],
        ),
        LoadState::Loading => {
            let elapsed = explorer
                .loading_since
                .map(|since| since.elapsed().as_millis())
                .unwrap_or(0);
            render_message(
                f,
                area,
                block,
                vec![Line::from(vec![
                    Span::styled(spinner_frame(elapsed), Style::default().fg(Color::Cyan)),
                    Span::raw(" Loading..."),
                ])],
            );
        }
        LoadState::Error { message, .. } => render_message(
            f,
            area,
            block,
            vec![
                Line::styled(
                    "Unable to Load Files",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::raw(message.as_str()),
                Line::raw(""),
                Line::styled(ERROR_HINT, dim),
            ],
        ),
        LoadState::Empty => render_message(
            f,
            area,
            block,
            vec![
                Line::styled("This folder is empty", Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(
                    "Contact the technical support if you think something is wrong",
                    dim,
                ),
            ],
        ),
        LoadState::NotFound => render_message(
            f,
            area,
            block,
            vec![
                Line::styled(
                    "Term Not Found",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Line::styled("Press Esc to go back to Materials", dim),
            ],
        ),
        LoadState::Populated => {
            let rows: Vec<ListItem> = explorer
                .items
                .iter()
                .map(|item| build_list_item(item, icon_renderer.item_icon(file_kind(&item.mime_type)), area.width))
                .collect();

            let mut list = List::new(rows).block(block);
            if focused {
                list = list
                    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
                    .highlight_symbol("> ");
            }

            let mut state = ListState::default();
            state.select(model.navigation.selection);
            f.render_stateful_widget(list, area, &mut state);

            // Scrollbar when the list is longer than the visible area
            let viewport_height = area.height.saturating_sub(2) as usize;
            let total_items = explorer.items.len();
            if total_items > viewport_height {
                let mut scrollbar_state =
                    ScrollbarState::new(total_items.saturating_sub(viewport_height)).position(state.offset());
                let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓"))
                    .track_symbol(Some("│"))
                    .thumb_symbol("█");
                f.render_stateful_widget(
                    scrollbar,
                    area.inner(Margin {
                        horizontal: 0,
                        vertical: 1,
                    }),
                    &mut scrollbar_state,
                );
            }
        }
    }
}
