//! Formatting and display logic
//!
//! Pure functions for formatting listing metadata for human-readable display.

use crate::api::Owner;
use chrono::{DateTime, Utc};

/// Account names that belong to the materials maintainer
const MAINTAINER_ACCOUNTS: [&str; 3] = ["tokyo9900777", "xofofozahmed", "poz659312"];
const MAINTAINER_NAME: &str = "Abdelrahman Ahmed";

/// Format a provider byte count ("2048") for display
///
/// Absent or unparseable sizes format as an empty string.
///
/// # Examples
/// ```
/// use materials_tui::logic::formatting::format_size;
///
/// assert_eq!(format_size(Some("500")), "500 B");
/// assert_eq!(format_size(Some("2048")), "2.0 KB");
/// assert_eq!(format_size(Some("3145728")), "3.0 MB");
/// assert_eq!(format_size(None), "");
/// ```
pub fn format_size(bytes: Option<&str>) -> String {
    let Some(size) = bytes.and_then(parse_leading_int) else {
        return String::new();
    };

    const KB: i64 = 1024;
    const MB: i64 = KB * 1024;

    if size < KB {
        format!("{} B", size)
    } else if size < MB {
        format!("{:.1} KB", size as f64 / KB as f64)
    } else {
        format!("{:.1} MB", size as f64 / MB as f64)
    }
}

/// Parse an optional sign followed by decimal digits, ignoring any trailing text
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with('-') || s.starts_with('+'));
    let digits = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        return None;
    }

    s[..sign_len + digits].parse().ok()
}

/// Display name of a file's first owner
///
/// # Examples
/// ```
/// use materials_tui::api::Owner;
/// use materials_tui::logic::formatting::format_owner;
///
/// let owners = vec![Owner { display_name: "tokyo9900777".to_string() }];
/// assert_eq!(format_owner(Some(owners.as_slice())), "Abdelrahman Ahmed");
/// assert_eq!(format_owner(None), "Unknown");
/// ```
pub fn format_owner(owners: Option<&[Owner]>) -> String {
    let Some(first) = owners.and_then(|o| o.first()) else {
        return "Unknown".to_string();
    };

    if MAINTAINER_ACCOUNTS.contains(&first.display_name.as_str()) {
        MAINTAINER_NAME.to_string()
    } else {
        first.display_name.clone()
    }
}

/// Format an RFC 3339 timestamp as "YYYY-MM-DD HH:MM" (UTC)
///
/// Unparseable input is returned unchanged; absent input is empty.
pub fn format_created(created_time: Option<&str>) -> String {
    let Some(raw) = created_time else {
        return String::new();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Header line for a term, e.g. "Year 2 • Term 1"
pub fn format_term_header(year: u8, term_number: u8) -> String {
    format!("Year {} • Term {}", year, term_number)
}

/// Item count subtitle shown under the folder title
pub fn format_item_count(count: usize) -> String {
    format!("{} items", count)
}
