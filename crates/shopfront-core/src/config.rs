//! Storefront configuration.
//!
//! Read from `shopfront.toml`, `.shopfront.toml` or `shopfront.json` in the
//! working directory or any parent, then overridden from the environment.

use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use shopfront_data::api::DEFAULT_API_URL;
use shopfront_messaging::{BadgeConfig, ChatbotConfig, MessengerConfig, WhatsAppConfig, WidgetConfig};
use std::path::{Path, PathBuf};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// Overrides `[api] base_url`.
pub const ENV_API_URL: &str = "SHOPFRONT_API_URL";
/// Overrides `[chatbot] apiUrl`.
pub const ENV_CHATBOT_URL: &str = "SHOPFRONT_CHATBOT_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub chatbot: ChatbotConfig,

    #[serde(default)]
    pub whatsapp: WhatsAppConfig,

    #[serde(default)]
    pub messenger: MessengerConfig,

    #[serde(default)]
    pub badge: BadgeConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

/// Where the browser profile is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Profile file; in memory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load config from a file, by extension: `.json` or TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StorefrontError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        if is_json(path) {
            serde_json::from_str(&content).map_err(|e| {
                StorefrontError::Config(format!("Failed to parse JSON config {}: {}", path.display(), e))
            })
        } else {
            toml::from_str(&content).map_err(|e| {
                StorefrontError::Config(format!("Failed to parse TOML config {}: {}", path.display(), e))
            })
        }
    }

    /// Save config to a file, by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self).map_err(|e| StorefrontError::Config(e.to_string()))?
        } else {
            toml::to_string_pretty(self).map_err(|e| StorefrontError::Config(e.to_string()))?
        };
        std::fs::write(path, content).map_err(|e| {
            StorefrontError::Config(format!("Failed to write config file {}: {}", path.display(), e))
        })
    }

    /// Find the nearest config file at or above `start`.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Load the nearest config file, or the defaults when there is none.
    ///
    /// A config file that exists but does not parse is skipped with a
    /// warning.
    pub fn discover(start: &Path) -> Self {
        match Self::find(start) {
            Some(path) => match Self::load(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded storefront config");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Apply `SHOPFRONT_API_URL` and `SHOPFRONT_CHATBOT_URL`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable source.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(url) = lookup(ENV_CHATBOT_URL).filter(|v| !v.trim().is_empty()) {
            self.chatbot.api_url = url;
        }
        self
    }

    /// The messaging widget's part of the config.
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            chatbot: self.chatbot.clone(),
            whatsapp: self.whatsapp.clone(),
            messenger: self.messenger.clone(),
            badge: self.badge,
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default `shopfront.toml`.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[api]
base_url = "{api}"

[chatbot]
apiUrl = "{chat}"
enabled = true
timeout = {timeout}

[whatsapp]
phoneNumber = "8801964616035"
message = "Hello! I need help with Polashtoli Store."

[messenger]
pageId = "polashtoli"

[badge]
show = true
count = 3

[storage]
# profile = "profile.json"
"#,
        api = DEFAULT_API_URL,
        chat = shopfront_messaging::DEFAULT_CHATBOT_URL,
        timeout = shopfront_messaging::DEFAULT_CHATBOT_TIMEOUT_MS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_generated_file() {
        let parsed: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, StorefrontConfig::default());
        assert_eq!(parsed.api.base_url, "http://localhost:8080/api");
        assert_eq!(parsed.chatbot.timeout, 30_000);
    }

    #[test]
    fn test_partial_toml() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://shop.example.com/api"

            [badge]
            show = false
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com/api");
        assert!(!config.badge.show);
        assert_eq!(config.badge.count, 3);
        assert!(config.chatbot.enabled);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopfront.json");
        let mut config = StorefrontConfig::default();
        config.storage.profile = Some(PathBuf::from("profile.json"));
        config.save(&path).unwrap();

        assert_eq!(StorefrontConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_discovery_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join(".shopfront.toml"),
            "[api]\nbase_url = \"http://found/api\"\n",
        )
        .unwrap();

        assert_eq!(
            StorefrontConfig::find(&nested),
            Some(dir.path().join(".shopfront.toml"))
        );
        assert_eq!(StorefrontConfig::discover(&nested).api.base_url, "http://found/api");
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shopfront.toml"), "[api\n").unwrap();
        assert_eq!(StorefrontConfig::discover(dir.path()), StorefrontConfig::default());
        assert!(matches!(
            StorefrontConfig::load(dir.path().join("shopfront.toml")),
            Err(StorefrontError::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::default().with_overrides(|name| match name {
            ENV_API_URL => Some("http://api.test/api".to_string()),
            ENV_CHATBOT_URL => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "http://api.test/api");
        assert_eq!(config.chatbot.api_url, shopfront_messaging::DEFAULT_CHATBOT_URL);
    }
}
