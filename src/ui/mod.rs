// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) with themes
// - layout: Calculates screen layout (header, panes, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the header with year/term and the breadcrumb trail
// - term_list: Renders the materials overview (years, terms, subjects)
// - listing: Renders the folder listing and its loading/empty/error views
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with selection details
// - toast: Renders toast notifications (brief pop-up messages)

pub mod breadcrumb;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod listing;
pub mod render;
pub mod status_bar;
pub mod term_list;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
