//! Chat transcript bubbles.

use super::html_escape;
use shopfront_messaging::{ChatMessage, Sender};

pub fn render_chat_message(message: &ChatMessage) -> String {
    let class = match message.sender {
        Sender::User => "user-message",
        Sender::Bot => "bot-message",
    };
    // Line breaks in replies are kept.
    let text = html_escape(&message.text).replace('\n', "<br>");
    format!(
        r#"<div class="chat-message {}">
    <div class="message-content">{}</div>
    <div class="message-time">{}</div>
</div>"#,
        class,
        text,
        message.time_label()
    )
}

pub fn render_chat_transcript(messages: &[ChatMessage]) -> String {
    messages.iter().map(render_chat_message).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_bot_message() {
        let message = ChatMessage {
            sender: Sender::Bot,
            text: "Hello!\nHow can I help <you>?".to_string(),
            time: Local::now(),
        };
        let html = render_chat_message(&message);
        assert!(html.contains("bot-message"));
        assert!(html.contains("Hello!<br>How can I help &lt;you&gt;?"));
    }
}
