use serde::{Deserialize, Serialize};

/// Shell settings persisted between sessions.
///
/// This is operator configuration for the shell process itself, not the
/// tenant branding: branding lives in memory for the session and is only
/// replaced through the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the chat backend.
    pub server_url: String,
    /// Path of the page to open on launch, e.g. `/chat` or `/documents`.
    pub start_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            start_path: "/chat".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("whitelabel-shell").join("config.json");
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = serde_json::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("whitelabel-shell");
            std::fs::create_dir_all(&app_dir)?;
            let config_path = app_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }

    /// Load the persisted configuration, then apply environment overrides.
    pub fn from_environment() -> Self {
        let mut config = Self::load();
        if let Ok(url) = std::env::var("WHITELABEL_SERVER_URL") {
            config.server_url = url;
        }
        if let Ok(path) = std::env::var("WHITELABEL_START_PATH") {
            config.start_path = path;
        }
        config
    }
}
