//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;
use materials_tui::model::{Focus, VimCommandState};

/// Rows moved by PageUp/PageDown and the vim half-page keys
const PAGE_SIZE: usize = 20;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Any key other than 'g' breaks a pending 'gg'
    let pending_g = app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    if key.code != KeyCode::Char('g') {
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    let vim_mode = app.model.ui.vim_mode;
    let focus = app.model.navigation.focus;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.should_quit = true;
        }

        // Vim keybindings with Ctrl modifiers (check before 'd' and other letters)
        KeyCode::Char('d') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.page_down(PAGE_SIZE / 2);
        }
        KeyCode::Char('u') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.page_up(PAGE_SIZE / 2);
        }

        KeyCode::Tab => {
            app.focus_terms();
            app.cycle_year();
        }
        KeyCode::Esc => {
            // NotFound offers the way back to the overview
            app.focus_terms();
        }

        KeyCode::Char('r') if focus == Focus::Listing => {
            if app.model.explorer.state.is_retryable() {
                app.retry();
            }
        }
        KeyCode::Char('o') if focus == Focus::Listing => app.open_current_folder(),
        KeyCode::Char('d') if focus == Focus::Listing => app.download_selected_item(),

        KeyCode::Char(c @ '1'..='9') if focus == Focus::Listing => {
            if let Some(n) = c.to_digit(10) {
                app.jump_to_breadcrumb(n as usize);
            }
        }

        // Vim keybindings
        KeyCode::Char('h') if vim_mode => back(app, focus),
        KeyCode::Char('j') if vim_mode => app.next_item(),
        KeyCode::Char('k') if vim_mode => app.previous_item(),
        KeyCode::Char('l') if vim_mode => forward(app, focus, KeyCode::Right),
        KeyCode::Char('g') if vim_mode => {
            if pending_g {
                // gg - jump to first
                app.jump_to_first();
                app.model.ui.vim_command_state = VimCommandState::None;
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if vim_mode => app.jump_to_last(),

        // Standard navigation keys
        KeyCode::PageDown => app.page_down(PAGE_SIZE),
        KeyCode::PageUp => app.page_up(PAGE_SIZE),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        KeyCode::Left | KeyCode::Backspace => back(app, focus),
        KeyCode::Right | KeyCode::Enter => forward(app, focus, key.code),
        KeyCode::Up => app.previous_item(),
        KeyCode::Down => app.next_item(),
        _ => {}
    }

    Ok(())
}

fn back(app: &mut App, focus: Focus) {
    if focus == Focus::Listing {
        app.go_back();
    }
}

fn forward(app: &mut App, focus: Focus, key: KeyCode) {
    match focus {
        // Right returns to an already open listing; Enter always opens the term
        Focus::Terms if key == KeyCode::Right && app.model.navigation.route.is_some() => {
            app.focus_listing();
        }
        Focus::Terms => app.open_selected_term(),
        Focus::Listing => app.activate_selected(),
    }
}
