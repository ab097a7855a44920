//! Widget configuration and partial updates.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default assistant endpoint.
pub const DEFAULT_CHATBOT_URL: &str = "http://localhost:5000/api/chat";
/// Default assistant timeout in milliseconds.
pub const DEFAULT_CHATBOT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatbotConfig {
    pub api_url: String,
    pub enabled: bool,
    /// Milliseconds.
    pub timeout: u64,
}

impl ChatbotConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_CHATBOT_URL.to_string(),
            enabled: true,
            timeout: DEFAULT_CHATBOT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhatsAppConfig {
    /// Digits only, no `+` or spaces.
    pub phone_number: String,
    pub message: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            phone_number: "8801964616035".to_string(),
            message: "Hello! I need help with Polashtoli Store.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessengerConfig {
    pub page_id: String,
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            page_id: "polashtoli".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub show: bool,
    pub count: u32,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self { show: true, count: 3 }
    }
}

/// Everything the messaging widget can be configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub chatbot: ChatbotConfig,
    pub whatsapp: WhatsAppConfig,
    pub messenger: MessengerConfig,
    pub badge: BadgeConfig,
}

impl WidgetConfig {
    /// Merge a partial update; fields left out keep their value.
    pub fn update_config(&mut self, update: ConfigUpdate) {
        if let Some(chatbot) = update.chatbot {
            merge(&mut self.chatbot.api_url, chatbot.api_url);
            merge(&mut self.chatbot.enabled, chatbot.enabled);
            merge(&mut self.chatbot.timeout, chatbot.timeout);
        }
        if let Some(whatsapp) = update.whatsapp {
            merge(&mut self.whatsapp.phone_number, whatsapp.phone_number);
            merge(&mut self.whatsapp.message, whatsapp.message);
        }
        if let Some(messenger) = update.messenger {
            merge(&mut self.messenger.page_id, messenger.page_id);
        }
        if let Some(badge) = update.badge {
            merge(&mut self.badge.show, badge.show);
            merge(&mut self.badge.count, badge.count);
        }
        tracing::debug!(config = ?self, "messaging configuration updated");
    }

    /// Text of the button badge, or `None` when hidden.
    pub fn badge_text(&self) -> Option<String> {
        self.badge.show.then(|| self.badge.count.to_string())
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// A partial [`WidgetConfig`], as passed to [`WidgetConfig::update_config`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigUpdate {
    pub chatbot: Option<ChatbotUpdate>,
    pub whatsapp: Option<WhatsAppUpdate>,
    pub messenger: Option<MessengerUpdate>,
    pub badge: Option<BadgeUpdate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatbotUpdate {
    pub api_url: Option<String>,
    pub enabled: Option<bool>,
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhatsAppUpdate {
    pub phone_number: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessengerUpdate {
    pub page_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BadgeUpdate {
    pub show: Option<bool>,
    pub count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.chatbot.api_url, DEFAULT_CHATBOT_URL);
        assert_eq!(config.chatbot.timeout_duration(), Duration::from_secs(30));
        assert_eq!(config.badge_text().as_deref(), Some("3"));
    }

    #[test]
    fn test_update_merges_partially() {
        let mut config = WidgetConfig::default();
        let update: ConfigUpdate = serde_json::from_str(
            r#"{"chatbot": {"enabled": false}, "badge": {"count": 7}}"#,
        )
        .unwrap();
        config.update_config(update);

        assert!(!config.chatbot.enabled);
        assert_eq!(config.chatbot.api_url, DEFAULT_CHATBOT_URL);
        assert_eq!(config.badge.count, 7);
        assert!(config.badge.show);
        assert_eq!(config.whatsapp, WhatsAppConfig::default());
    }

    #[test]
    fn test_hidden_badge() {
        let mut config = WidgetConfig::default();
        config.update_config(ConfigUpdate {
            badge: Some(BadgeUpdate {
                show: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(config.badge_text(), None);
    }
}
