//! The storefront's floating messaging widget.
//!
//! One button opens a channel picker: the chat assistant, WhatsApp, or
//! Messenger. The assistant talks to a separate chat service and falls back
//! to keyword-matched canned replies when that service is off or failing.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_messaging::{ChatClient, ChatContext, ChatSession, WidgetConfig};
//!
//! let config = WidgetConfig::default();
//! let client = ChatClient::new(config.chatbot.clone())?;
//! let mut chat = ChatSession::new();
//!
//! let context = ChatContext { cart, user_id: guest_id(&store)? };
//! chat.send(&client, "Where is my order?", &context).await?;
//! ```

mod client;
mod config;
mod error;
mod guest;
mod replies;
mod session;
mod widget;

pub use client::{extract_reply, ChatClient, ChatContext};
pub use config::{
    BadgeConfig, BadgeUpdate, ChatbotConfig, ChatbotUpdate, ConfigUpdate, MessengerConfig,
    MessengerUpdate, WhatsAppConfig, WhatsAppUpdate, WidgetConfig, DEFAULT_CHATBOT_TIMEOUT_MS,
    DEFAULT_CHATBOT_URL,
};
pub use error::MessagingError;
pub use guest::{generate_guest_id, guest_id};
pub use replies::{canned_reply, Topic, OFFLINE_NOTICE};
pub use session::{ChatMessage, ChatSession, ReplySource, Sender};
pub use widget::{Channel, ExternalLink, WidgetState};
