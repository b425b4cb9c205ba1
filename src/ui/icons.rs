use ratatui::{
    style::{Color, Style},
    text::Span,
};

use materials_tui::logic::file::FileKind;

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 📄, etc.)
    NerdFont, // Nerd Fonts icons (U+E5FF, etc.)
}

impl IconMode {
    /// Parse the `icon_mode` config value; anything unrecognised is emoji
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "nerdfont" | "nerd" => IconMode::NerdFont,
            _ => IconMode::Emoji,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub term_color: Color,
    pub folder_color: Color,
    pub document_color: Color,
    pub media_color: Color,
    pub file_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            term_color: Color::Magenta,
            folder_color: Color::Blue,
            document_color: Color::Red,
            media_color: Color::Green,
            file_color: Color::Cyan,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Icon for a term in the term pane
    pub fn term_icon(&self) -> Span<'static> {
        match self.mode {
            IconMode::Emoji => Span::styled("📚 ", Style::default().fg(self.theme.term_color)),
            IconMode::NerdFont => {
                Span::styled("\u{F02D} ", Style::default().fg(self.theme.term_color))
            }
        }
    }

    /// Icon for a listing entry
    pub fn item_icon(&self, kind: FileKind) -> Span<'static> {
        let (emoji_icon, nerd_icon, color) = match kind {
            FileKind::Folder => ("📁 ", "\u{E5FF} ", self.theme.folder_color),
            FileKind::Pdf => ("📕 ", "\u{F1C1} ", self.theme.document_color),
            FileKind::Image => ("🖼️ ", "\u{F1C5} ", self.theme.media_color),
            FileKind::Video => ("🎬 ", "\u{F1C8} ", self.theme.media_color),
            FileKind::Doc => ("📝 ", "\u{F1C2} ", self.theme.document_color),
            FileKind::Sheet => ("📊 ", "\u{F1C3} ", self.theme.media_color),
            FileKind::Slides => ("📽️ ", "\u{F1C4} ", self.theme.document_color),
            FileKind::File => ("📄 ", "\u{F15B} ", self.theme.file_color),
        };

        let icon = match self.mode {
            IconMode::Emoji => emoji_icon,
            IconMode::NerdFont => nerd_icon,
        };

        Span::styled(icon, Style::default().fg(color))
    }
}
