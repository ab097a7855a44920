//! The floating message button and its two panels.

use crate::config::{MessengerConfig, WhatsAppConfig};
use serde::Serialize;

/// Which panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetState {
    #[default]
    Closed,
    /// The channel picker (assistant, WhatsApp, Messenger).
    SelectionOpen,
    ChatbotOpen,
}

/// An external chat channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    WhatsApp,
    Messenger,
}

/// A deep link opened in a new tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub channel: Channel,
    pub url: String,
}

impl ExternalLink {
    pub fn whatsapp(config: &WhatsAppConfig) -> Self {
        Self {
            channel: Channel::WhatsApp,
            url: format!(
                "https://wa.me/{}?text={}",
                config.phone_number,
                urlencoding::encode(&config.message)
            ),
        }
    }

    pub fn messenger(config: &MessengerConfig) -> Self {
        Self {
            channel: Channel::Messenger,
            url: format!("https://m.me/{}", config.page_id),
        }
    }
}

impl WidgetState {
    /// Only the assistant panel takes messages.
    pub fn accepts_messages(&self) -> bool {
        *self == WidgetState::ChatbotOpen
    }

    /// The message button was pressed.
    pub fn open_selection(&mut self) {
        *self = WidgetState::SelectionOpen;
    }

    pub fn close_selection(&mut self) {
        if *self == WidgetState::SelectionOpen {
            *self = WidgetState::Closed;
        }
    }

    /// A click landed outside the picker and the button.
    pub fn click_outside(&mut self) {
        self.close_selection();
    }

    pub fn open_assistant(&mut self) {
        *self = WidgetState::ChatbotOpen;
    }

    pub fn back_to_selection(&mut self) {
        *self = WidgetState::SelectionOpen;
    }

    pub fn close_chatbot(&mut self) {
        if *self == WidgetState::ChatbotOpen {
            *self = WidgetState::Closed;
        }
    }

    pub fn open_whatsapp(&mut self, config: &WhatsAppConfig) -> ExternalLink {
        let link = ExternalLink::whatsapp(config);
        tracing::debug!(phone = %config.phone_number, "opening WhatsApp");
        *self = WidgetState::Closed;
        link
    }

    pub fn open_messenger(&mut self, config: &MessengerConfig) -> ExternalLink {
        let link = ExternalLink::messenger(config);
        tracing::debug!(page = %config.page_id, "opening Messenger");
        *self = WidgetState::Closed;
        link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut state = WidgetState::default();
        state.close_chatbot();
        assert_eq!(state, WidgetState::Closed);

        assert!(!state.accepts_messages());

        state.open_selection();
        assert!(!state.accepts_messages());
        state.open_assistant();
        assert_eq!(state, WidgetState::ChatbotOpen);
        assert!(state.accepts_messages());

        // The picker is not showing, so an outside click changes nothing.
        state.click_outside();
        assert_eq!(state, WidgetState::ChatbotOpen);

        state.back_to_selection();
        assert_eq!(state, WidgetState::SelectionOpen);
        state.click_outside();
        assert_eq!(state, WidgetState::Closed);
    }

    #[test]
    fn test_deep_links() {
        let mut state = WidgetState::SelectionOpen;
        let link = state.open_whatsapp(&WhatsAppConfig::default());
        assert_eq!(state, WidgetState::Closed);
        assert_eq!(
            link.url,
            "https://wa.me/8801964616035?text=Hello%21%20I%20need%20help%20with%20Polashtoli%20Store."
        );

        state.open_selection();
        let link = state.open_messenger(&MessengerConfig::default());
        assert_eq!(link.channel, Channel::Messenger);
        assert_eq!(link.url, "https://m.me/polashtoli");
        assert_eq!(state, WidgetState::Closed);
    }
}
