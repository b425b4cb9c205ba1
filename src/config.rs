use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::api::DEFAULT_API_BASE_URL;
use crate::registry::{term_slug, TERM_COUNT};

const APP_DIR: &str = "materials-tui";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Provider API key; empty when `api_base_url` is a key-injecting proxy
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Term slug -> remote root folder id
    #[serde(default)]
    pub term_folders: HashMap<String, String>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub parallel_breadcrumbs: bool,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}

fn is_blank_document(source: &str) -> bool {
    source.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            term_folders: HashMap::new(),
            vim_mode: false,
            icon_mode: default_icon_mode(),
            open_command: None,
            request_timeout_secs: None,
            parallel_breadcrumbs: false,
        }
    }
}

impl Config {
    /// Parse a config document; a file with nothing but blanks and comments
    /// is the default config
    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        if is_blank_document(source) {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Apply `MATERIALS_*` overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from `lookup`; non-empty values win over the file
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("MATERIALS_API_KEY") {
            self.api_key = key;
        }
        if let Some(url) = get("MATERIALS_API_BASE_URL") {
            self.api_base_url = url;
        }
        for n in 1..=TERM_COUNT {
            if let Some(id) = get(&format!("MATERIALS_TERM_{}_FOLDER_ID", n)) {
                self.term_folders.insert(term_slug(n), id);
            }
        }
    }
}

/// Expected location of the per-user config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.yaml"))
}

/// Find the config file
///
/// Lookup order: explicit CLI path (must exist), then the per-user config
/// directory, then `./config.yaml`. `Ok(None)` means no file was found and the
/// environment alone has to configure the app.
pub fn get_config_path(cli_path: Option<String>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_path) = default_config_path() {
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Load the config from `path` (or defaults) and apply environment overrides
pub fn load(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            Config::from_yaml(&source)?
        }
        None => Config::default(),
    };
    config.apply_env();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config = Config::from_yaml("api_key: abc\n").unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.icon_mode, "emoji");
        assert!(config.term_folders.is_empty());
        assert!(config.request_timeout_secs.is_none());
        assert!(!config.parallel_breadcrumbs);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
api_key: "k"
api_base_url: "http://proxy.local/files"
term_folders:
  term-1: "root-1"
  term-8: "root-8"
vim_mode: true
icon_mode: "nerdfont"
open_command: "xdg-open"
request_timeout_secs: 30
parallel_breadcrumbs: true
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.term_folders.get("term-8").map(String::as_str), Some("root-8"));
        assert!(config.vim_mode);
        assert_eq!(config.open_command.as_deref(), Some("xdg-open"));
        assert_eq!(config.request_timeout_secs, Some(30));
        assert!(config.parallel_breadcrumbs);
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = Config::from_yaml("api_key: file-key\nterm_folders:\n  term-2: from-file\n").unwrap();
        let env: HashMap<&str, &str> = [
            ("MATERIALS_API_KEY", "env-key"),
            ("MATERIALS_TERM_2_FOLDER_ID", "from-env"),
            ("MATERIALS_TERM_5_FOLDER_ID", "five"),
            ("MATERIALS_API_BASE_URL", "  "),
        ]
        .into_iter()
        .collect();

        config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.term_folders.get("term-2").map(String::as_str), Some("from-env"));
        assert_eq!(config.term_folders.get("term-5").map(String::as_str), Some("five"));
    }

    #[test]
    fn test_blank_yaml_is_default_config() {
        for source in ["", "\n  \n", "# materials-tui\n---\n"] {
            let config = Config::from_yaml(source).unwrap();
            assert!(config.api_key.is_empty());
            assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
            assert_eq!(config.icon_mode, "emoji");
        }
    }

    #[test]
    fn test_load_empty_file() {
        let path = std::env::temp_dir().join(format!("materials-tui-empty-{}.yaml", std::process::id()));
        std::fs::write(&path, "").unwrap();

        let config = load(Some(&path));
        let _ = std::fs::remove_file(&path);

        let config = config.unwrap();
        assert_eq!(config.icon_mode, "emoji");
        assert!(!config.vim_mode);
    }

    #[test]
    fn test_missing_cli_path_is_error() {
        assert!(get_config_path(Some("/nonexistent/materials.yaml".to_string())).is_err());
    }
}
