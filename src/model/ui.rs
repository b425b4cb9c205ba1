//! Presentation flags that outlive a single folder load: key scheme,
//! pending `gg`, the toast and the quit request.

use std::time::Instant;

use super::types::VimCommandState;

#[derive(Clone, Debug)]
pub struct UiModel {
    pub vim_mode: bool,
    pub vim_command_state: VimCommandState,
    /// Text and the moment it appeared
    pub toast_message: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message.as_ref().is_some_and(|(_, shown_at)| {
            crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
        })
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_without_pending_chord() {
        let ui = UiModel::new(true);
        assert!(ui.vim_mode);
        assert_eq!(ui.vim_command_state, VimCommandState::None);
        assert!(!ui.should_quit);
    }

    #[test]
    fn test_fresh_toast_stays_until_dismissed() {
        let mut ui = UiModel::new(false);
        assert!(!ui.should_dismiss_toast());

        ui.show_toast("Opened: Week 1".to_string());
        assert!(!ui.should_dismiss_toast());
        assert_eq!(ui.toast_message.as_ref().map(|(m, _)| m.as_str()), Some("Opened: Week 1"));

        ui.dismiss_toast();
        assert!(ui.toast_message.is_none());
    }
}
