//! Listing cursor movement
//!
//! Arrow keys wrap around the folder listing, paging keys clamp at its ends.
//! An empty listing never has a selected row.

/// Row below `current`, back to the top after the last row
///
/// ```
/// use materials_tui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 4), Some(0));
/// assert_eq!(next_selection(Some(3), 4), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    let last = list_len.checked_sub(1)?;
    match current {
        Some(i) if i < last => Some(i + 1),
        Some(_) | None => Some(0),
    }
}

/// Row above `current`, down to the bottom from the first row
///
/// A cursor left past the end by a shorter reload lands on the last row.
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    let last = list_len.checked_sub(1)?;
    match current {
        Some(i) if i > 0 && i <= last => Some(i - 1),
        Some(_) | None => Some(last),
    }
}

/// Move down by a page without wrapping
pub fn page_down(current: Option<usize>, list_len: usize, page: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).saturating_add(page).min(list_len - 1))
}

/// Move up by a page without wrapping
pub fn page_up(current: Option<usize>, list_len: usize, page: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1).saturating_sub(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(5), 0), None);
    }

    #[test]
    fn test_next_selection_wrapping() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0)); // Single item wraps to itself
    }

    #[test]
    fn test_prev_selection_wrapping() {
        assert_eq!(prev_selection(Some(0), 5), Some(4));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_selection_out_of_bounds() {
        // Stale index from a longer listing
        assert_eq!(next_selection(Some(10), 3), Some(0));
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_paging_clamps() {
        assert_eq!(page_down(Some(0), 5, 10), Some(4));
        assert_eq!(page_down(None, 30, 10), Some(10));
        assert_eq!(page_up(Some(3), 5, 10), Some(0));
        assert_eq!(page_up(Some(25), 30, 10), Some(15));
        assert_eq!(page_down(None, 0, 10), None);
        assert_eq!(page_up(None, 0, 10), None);
    }
}
