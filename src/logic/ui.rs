//! UI state transition logic
//!
//! Pure functions for UI state cycling and timing.

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Cycle to the next year tab, wrapping after the last one
///
/// # Examples
/// ```
/// use materials_tui::logic::ui::cycle_year;
///
/// assert_eq!(cycle_year(0, 4), 1);
/// assert_eq!(cycle_year(3, 4), 0);
/// assert_eq!(cycle_year(0, 0), 0);
/// ```
pub fn cycle_year(current: usize, year_count: usize) -> usize {
    if year_count == 0 {
        return 0;
    }
    (current + 1) % year_count
}

/// Spinner glyph for the loading view, advancing every 100ms
pub fn spinner_frame(elapsed_ms: u128) -> &'static str {
    SPINNER_FRAMES[(elapsed_ms / 100) as usize % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismissal() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(1499));
        assert!(should_dismiss_toast(1500));
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(850), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(150), SPINNER_FRAMES[1]);
    }
}
