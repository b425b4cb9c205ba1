//! File operation methods
//!
//! User actions that hand an item over to the system browser:
//! - View a file (inline preview or native editor)
//! - Download a file
//! - Open the current folder on the provider's site

use crate::App;
use materials_tui::logic;
use materials_tui::model::LoadState;

impl App {
    /// Launch `url` with the configured `open_command`, or the platform opener
    pub(crate) fn open_url(&mut self, url: &str, label: &str) {
        let result = match &self.open_command {
            Some(open_cmd) => std::process::Command::new(open_cmd)
                .arg(url)
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
                .map(|_child| ()),
            None => open::that_detached(url),
        };

        match result {
            Ok(()) => {
                tracing::debug!(url, "opened in browser");
                self.model.show_toast(format!("Opened: {}", label));
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to open url");
                self.model.show_toast(format!("Error: Failed to open {}: {}", label, e));
            }
        }
    }

    /// `d`: download the selected file through the browser
    pub(crate) fn download_selected_item(&mut self) {
        let Some(item) = self.model.selected_item().cloned() else {
            return;
        };
        if item.is_folder() {
            self.model
                .show_toast("Folders can't be downloaded".to_string());
            return;
        }
        self.open_url(&logic::file::download_url(&item), &item.name);
    }

    /// `o`: open the current folder on the provider's site
    ///
    /// Mostly useful from the error view, when the listing API refuses us.
    pub(crate) fn open_current_folder(&mut self) {
        let folder_id = match &self.model.explorer.state {
            LoadState::Error { folder_id, .. } => folder_id.clone(),
            _ => self.model.explorer.folder_id.clone(),
        };
        if folder_id.is_empty() {
            return;
        }
        let label = self.model.explorer.display_title().to_string();
        self.open_url(&logic::file::folder_url(&folder_id), &label);
    }
}
