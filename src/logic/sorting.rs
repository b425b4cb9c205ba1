//! Sorting comparison logic
//!
//! Pure functions for ordering drive listings.

use crate::api::DriveItem;
use feruca::{Collator, Locale, Tailoring};
use std::cell::RefCell;
use std::cmp::Ordering;

thread_local! {
    // Root-locale UCA collator; punctuation keeps its weight (not shifted)
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, false));
}

/// Compare two drive items for display
///
/// # Sort Rules
/// - Folders always come before files
/// - Within the same kind, names that both parse as numbers compare numerically
/// - Otherwise names compare with [`locale_compare`]
pub fn compare_drive_items(a: &DriveItem, b: &DriveItem) -> Ordering {
    let a_is_folder = a.is_folder();
    let b_is_folder = b.is_folder();

    if a_is_folder != b_is_folder {
        return if a_is_folder {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    compare_names(&a.name, &b.name)
}

/// Name ordering used inside one category (folders or files)
pub fn compare_names(a: &str, b: &str) -> Ordering {
    if let (Some(num_a), Some(num_b)) = (parse_leading_number(a), parse_leading_number(b)) {
        // Equal numbers stay in provider order (sort_by is stable)
        return num_a.partial_cmp(&num_b).unwrap_or(Ordering::Equal);
    }

    locale_compare(a, b)
}

/// Unicode collation in the root locale, lowercase before uppercase on ties
///
/// Accents and case only break ties between otherwise equal names, and
/// punctuation sorts before digits and letters.
///
/// ```
/// use materials_tui::logic::sorting::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("a", "A"), Ordering::Less);
/// assert_eq!(locale_compare("Zeta", "alpha"), Ordering::Greater);
/// assert_eq!(locale_compare("Ärzte", "Zoo"), Ordering::Less);
/// ```
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| collator.borrow_mut().collate(a, b))
        .then_with(|| b.cmp(a))
}

/// Parse the longest numeric prefix of a name
///
/// Leading whitespace and an optional sign are accepted, followed by digits with
/// an optional fraction and exponent, or `Infinity`. Returns `None` when no
/// digits are found, so "Lecture 3" is not a number but "3 - Lecture" is.
///
/// ```
/// use materials_tui::logic::sorting::parse_leading_number;
///
/// assert_eq!(parse_leading_number("10"), Some(10.0));
/// assert_eq!(parse_leading_number("  2.5 notes"), Some(2.5));
/// assert_eq!(parse_leading_number("-3"), Some(-3.0));
/// assert_eq!(parse_leading_number(".5"), Some(0.5));
/// assert_eq!(parse_leading_number("1e3x"), Some(1000.0));
/// assert_eq!(parse_leading_number("Lecture 3"), None);
/// assert_eq!(parse_leading_number("."), None);
/// ```
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits = has_digits || frac_end > frac_start;
            end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }

    // Exponent only counts if at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Sort a listing in place using [`compare_drive_items`]
pub fn sort_drive_items(items: &mut [DriveItem]) {
    items.sort_by(compare_drive_items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FOLDER_MIME_TYPE;

    fn make_file(name: &str) -> DriveItem {
        DriveItem {
            id: format!("id-{}", name),
            name: name.to_string(),
            mime_type: "application/pdf".to_string(),
            size: Some("100".to_string()),
            created_time: None,
            owners: None,
        }
    }

    fn make_folder(name: &str) -> DriveItem {
        DriveItem {
            id: format!("id-{}", name),
            name: name.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            size: None,
            created_time: None,
            owners: None,
        }
    }

    fn names(items: &[DriveItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_folders_before_files() {
        let folder = make_folder("zzz");
        let file = make_file("aaa");

        assert_eq!(compare_drive_items(&folder, &file), Ordering::Less);
        assert_eq!(compare_drive_items(&file, &folder), Ordering::Greater);
    }

    #[test]
    fn test_numeric_names_sort_numerically() {
        let mut items = vec![make_folder("10"), make_folder("2"), make_folder("1")];
        sort_drive_items(&mut items);
        assert_eq!(names(&items), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_numeric_prefix_names() {
        let mut items = vec![
            make_file("10 - Graphs.pdf"),
            make_file("2 - Sorting.pdf"),
            make_file("1 - Intro.pdf"),
        ];
        sort_drive_items(&mut items);
        assert_eq!(
            names(&items),
            vec!["1 - Intro.pdf", "2 - Sorting.pdf", "10 - Graphs.pdf"]
        );
    }

    #[test]
    fn test_mixed_names_use_locale_order() {
        // "Lecture 10" is not numeric, so "10" vs it falls back to string order
        let mut items = vec![
            make_file("lecture 2"),
            make_file("Assignments"),
            make_file("10"),
            make_file("banana"),
        ];
        sort_drive_items(&mut items);
        assert_eq!(names(&items), vec!["10", "Assignments", "banana", "lecture 2"]);
    }

    #[test]
    fn test_equal_numbers_keep_provider_order() {
        let mut items = vec![make_file("1 b"), make_file("1 a")];
        sort_drive_items(&mut items);
        assert_eq!(names(&items), vec!["1 b", "1 a"]);
    }

    #[test]
    fn test_locale_compare_case() {
        assert_eq!(locale_compare("abc", "ABD"), Ordering::Less);
        assert_eq!(locale_compare("Abc", "abc"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_accents_and_punctuation() {
        assert_eq!(locale_compare("Ärzte", "Zoo"), Ordering::Less);
        assert_eq!(locale_compare("école", "zebra"), Ordering::Less);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("_draft", "1a"), Ordering::Less);
        assert_eq!(locale_compare("1a", "Notes"), Ordering::Less);
    }

    #[test]
    fn test_accented_names_sort_among_plain_ones() {
        let mut items = vec![
            make_file("Zusammenfassung.pdf"),
            make_file("Übung 1.pdf"),
            make_file("Analysis.pdf"),
            make_file("_draft.pdf"),
        ];
        sort_drive_items(&mut items);
        assert_eq!(
            names(&items),
            vec!["_draft.pdf", "Analysis.pdf", "Übung 1.pdf", "Zusammenfassung.pdf"]
        );
    }

    #[test]
    fn test_parse_leading_number_edge_cases() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("2e"), Some(2.0));
        assert_eq!(parse_leading_number("-Infinity"), Some(f64::NEG_INFINITY));
    }
}
