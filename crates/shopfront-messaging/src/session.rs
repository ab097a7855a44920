//! The assistant conversation shown in the chat panel.

use crate::client::{ChatClient, ChatContext};
use crate::replies::{canned_reply, OFFLINE_NOTICE};
use crate::MessagingError;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One bubble in the transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub time: DateTime<Local>,
}

impl ChatMessage {
    fn now(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            time: Local::now(),
        }
    }

    /// Time label under the bubble, e.g. `03:07 PM`.
    pub fn time_label(&self) -> String {
        self.time.format("%I:%M %p").to_string()
    }
}

/// Where the bot's answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// The live assistant answered.
    Live,
    /// The assistant is switched off; a canned reply was used.
    Canned,
    /// The assistant failed; a canned reply and the offline notice were used.
    Offline,
}

/// Transcript plus the in-flight flag that locks the input box.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    in_flight: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The input box and send button accept input.
    pub fn input_enabled(&self) -> bool {
        !self.in_flight
    }

    /// Show the typing indicator.
    pub fn is_waiting(&self) -> bool {
        self.in_flight
    }

    /// Record the visitor's message and lock the input.
    ///
    /// Returns the trimmed text to send, or `None` for blank input, which
    /// leaves the transcript untouched.
    pub fn begin_send(&mut self, input: &str) -> Result<Option<String>, MessagingError> {
        if self.in_flight {
            return Err(MessagingError::Busy);
        }
        let text = input.trim();
        if text.is_empty() {
            return Ok(None);
        }
        self.messages.push(ChatMessage::now(Sender::User, text));
        self.in_flight = true;
        Ok(Some(text.to_string()))
    }

    /// Record the answer to `prompt` and unlock the input.
    pub fn complete(
        &mut self,
        prompt: &str,
        outcome: Result<String, MessagingError>,
        cart_items: u32,
    ) -> ReplySource {
        self.in_flight = false;
        match outcome {
            Ok(reply) => {
                self.messages.push(ChatMessage::now(Sender::Bot, reply));
                ReplySource::Live
            }
            Err(error) if !error.shows_offline_notice() => {
                self.messages
                    .push(ChatMessage::now(Sender::Bot, canned_reply(prompt, cart_items)));
                ReplySource::Canned
            }
            Err(error) => {
                tracing::warn!(%error, "chat assistant failed, using offline replies");
                self.messages
                    .push(ChatMessage::now(Sender::Bot, canned_reply(prompt, cart_items)));
                self.messages.push(ChatMessage::now(Sender::Bot, OFFLINE_NOTICE));
                ReplySource::Offline
            }
        }
    }

    /// Send `input` and wait for the answer.
    ///
    /// `Ok(None)` means the input was blank and nothing happened.
    pub async fn send(
        &mut self,
        client: &ChatClient,
        input: &str,
        context: &ChatContext,
    ) -> Result<Option<ReplySource>, MessagingError> {
        let Some(prompt) = self.begin_send(input)? else {
            return Ok(None);
        };
        let outcome = client.ask(&prompt, context).await;
        Ok(Some(self.complete(&prompt, outcome, context.cart_items())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert_eq!(session.begin_send("   ").unwrap(), None);
        assert!(session.messages().is_empty());
        assert!(session.input_enabled());
    }

    #[test]
    fn test_busy_while_waiting() {
        let mut session = ChatSession::new();
        assert_eq!(session.begin_send(" hello ").unwrap().as_deref(), Some("hello"));
        assert!(!session.input_enabled());
        assert!(matches!(session.begin_send("again"), Err(MessagingError::Busy)));

        session.complete("hello", Ok("Hi!".into()), 0);
        assert!(session.input_enabled());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].sender, Sender::Bot);
    }

    #[test]
    fn test_failure_adds_offline_notice() {
        let mut session = ChatSession::new();
        session.begin_send("what is in my cart").unwrap();
        let source = session.complete("what is in my cart", Err(MessagingError::Timeout), 2);
        assert_eq!(source, ReplySource::Offline);

        let texts: Vec<_> = session.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "what is in my cart",
                "You have 2 items in your cart. Would you like to proceed to checkout?",
                OFFLINE_NOTICE,
            ]
        );
    }

    #[test]
    fn test_disabled_assistant_uses_canned_reply_quietly() {
        let mut session = ChatSession::new();
        session.begin_send("refund").unwrap();
        let source = session.complete("refund", Err(MessagingError::Disabled), 0);
        assert_eq!(source, ReplySource::Canned);
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_time_label() {
        let message = ChatMessage::now(Sender::User, "x");
        let label = message.time_label();
        assert!(label.ends_with("AM") || label.ends_with("PM"));
        assert_eq!(label.len(), 8);
    }
}
