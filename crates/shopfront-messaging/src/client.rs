//! Client for the chat assistant service.

use crate::config::ChatbotConfig;
use crate::MessagingError;
use serde::Serialize;
use serde_json::Value;
use shopfront_commerce::cart::CartItem;
use shopfront_data::{FetchClient, Transport};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// What the assistant is told about the visitor.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    pub cart: Vec<CartItem>,
    pub user_id: String,
}

impl ChatContext {
    /// Units in the cart, for the canned cart reply.
    pub fn cart_items(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    context: &'a ChatContext,
}

/// Sends one message at a time to the assistant endpoint.
#[derive(Clone)]
pub struct ChatClient {
    http: FetchClient,
    config: ChatbotConfig,
}

impl ChatClient {
    pub fn new(config: ChatbotConfig) -> Result<Self, MessagingError> {
        Ok(Self {
            http: FetchClient::new()?,
            config,
        })
    }

    pub fn with_transport(config: ChatbotConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            http: FetchClient::with_transport(transport),
            config,
        }
    }

    /// The same transport with new settings.
    pub fn reconfigured(&self, config: ChatbotConfig) -> Self {
        Self {
            http: self.http.clone(),
            config,
        }
    }

    pub fn config(&self) -> &ChatbotConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Ask the assistant, giving up after the configured timeout.
    pub async fn ask(&self, message: &str, context: &ChatContext) -> Result<String, MessagingError> {
        self.ask_until(message, context, CancellationToken::new()).await
    }

    /// Ask the assistant, giving up after the timeout or when `cancel` fires.
    pub async fn ask_until(
        &self,
        message: &str,
        context: &ChatContext,
        cancel: CancellationToken,
    ) -> Result<String, MessagingError> {
        if !self.config.enabled {
            return Err(MessagingError::Disabled);
        }

        let request = self
            .http
            .post(&self.config.api_url)
            .json(&ChatRequest { message, context })?;

        // The deadline is a child of the caller's token, so cancelling
        // either one ends the wait. It is the only timeout on the exchange.
        let deadline = cancel.child_token();
        let timer = {
            let deadline = deadline.clone();
            let timeout = self.config.timeout_duration();
            tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                deadline.cancel();
            })
        };

        tracing::debug!(url = %self.config.api_url, "asking chat assistant");
        let outcome = tokio::select! {
            _ = deadline.cancelled() => {
                if cancel.is_cancelled() {
                    Err(MessagingError::Cancelled)
                } else {
                    Err(MessagingError::Timeout)
                }
            }
            response = request.send() => response.map_err(MessagingError::from),
        };
        timer.abort();

        let document: Value = outcome?.error_for_status()?.json()?;
        extract_reply(&document).ok_or(MessagingError::InvalidReply)
    }
}

/// Pull the reply text out of the assistant's answer.
///
/// Accepts `response`, `message` or `reply` fields, in that order, or a
/// bare JSON string. Empty strings count as missing.
pub fn extract_reply(document: &Value) -> Option<String> {
    if let Some(text) = document.as_str() {
        return Some(text.to_string());
    }
    ["response", "message", "reply"]
        .iter()
        .filter_map(|key| document.get(key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use shopfront_data::{FetchError, RequestBuilder, Response};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Answers after an optional delay, recording the request bodies.
    struct Assistant {
        delay: Duration,
        status: u16,
        body: Value,
        seen: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl Transport for Assistant {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            if let Some(body) = request.json_body::<Value>() {
                self.seen.lock().unwrap().push(body);
            }
            tokio::time::sleep(self.delay).await;
            let mut response = Response::json_ok(&self.body);
            response.status = self.status;
            Ok(response)
        }
    }

    fn assistant(delay_ms: u64, status: u16, body: Value) -> Arc<Assistant> {
        Arc::new(Assistant {
            delay: Duration::from_millis(delay_ms),
            status,
            body,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn config(timeout_ms: u64) -> ChatbotConfig {
        ChatbotConfig {
            timeout: timeout_ms,
            ..Default::default()
        }
    }

    fn context() -> ChatContext {
        ChatContext {
            cart: Vec::new(),
            user_id: "guest_abc123".into(),
        }
    }

    #[test]
    fn test_extract_reply() {
        assert_eq!(extract_reply(&json!({"response": "hi"})).as_deref(), Some("hi"));
        assert_eq!(extract_reply(&json!({"reply": "yo"})).as_deref(), Some("yo"));
        assert_eq!(
            extract_reply(&json!({"response": "", "message": "m"})).as_deref(),
            Some("m")
        );
        assert_eq!(extract_reply(&json!("bare")).as_deref(), Some("bare"));
        assert_eq!(extract_reply(&json!({"status": "ok"})), None);
    }

    #[tokio::test]
    async fn test_ask_sends_context() {
        let transport = assistant(0, 200, json!({"response": "Hello from the assistant"}));
        let client = ChatClient::with_transport(config(1_000), transport.clone());

        let reply = client.ask("hello", &context()).await.unwrap();
        assert_eq!(reply, "Hello from the assistant");

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0]["message"], "hello");
        assert_eq!(seen[0]["context"]["userId"], "guest_abc123");
        assert_eq!(seen[0]["context"]["cart"], json!([]));
    }

    #[tokio::test]
    async fn test_slow_assistant_times_out() {
        let client = ChatClient::with_transport(config(20), assistant(5_000, 200, json!("late")));
        let err = client.ask("hello", &context()).await.unwrap_err();
        assert!(matches!(err, MessagingError::Timeout));
    }

    #[tokio::test]
    async fn test_configured_timeout_decides() {
        // A reply slower than a short deadline still arrives under a longer one.
        let slow = assistant(150, 200, json!({"response": "worth the wait"}));
        let impatient = ChatClient::with_transport(config(50), slow.clone());
        assert!(matches!(
            impatient.ask("hello", &context()).await,
            Err(MessagingError::Timeout)
        ));

        let patient = ChatClient::with_transport(config(2_000), slow);
        assert_eq!(patient.ask("hello", &context()).await.unwrap(), "worth the wait");
    }

    #[tokio::test]
    async fn test_caller_cancellation() {
        let client = ChatClient::with_transport(config(10_000), assistant(5_000, 200, json!("late")));
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = client.ask_until("hello", &context(), cancel).await.unwrap_err();
        assert!(matches!(err, MessagingError::Cancelled));
    }

    #[tokio::test]
    async fn test_error_status_and_bad_reply() {
        let client = ChatClient::with_transport(config(1_000), assistant(0, 500, json!({})));
        assert!(matches!(
            client.ask("hello", &context()).await,
            Err(MessagingError::Fetch(FetchError::Http { status: 500, .. }))
        ));

        let client = ChatClient::with_transport(config(1_000), assistant(0, 200, json!({"ok": true})));
        assert!(matches!(
            client.ask("hello", &context()).await,
            Err(MessagingError::InvalidReply)
        ));
    }

    #[tokio::test]
    async fn test_disabled_assistant() {
        let mut cfg = config(1_000);
        cfg.enabled = false;
        let client = ChatClient::with_transport(cfg, assistant(0, 200, json!("unused")));
        assert!(matches!(
            client.ask("hello", &context()).await,
            Err(MessagingError::Disabled)
        ));
    }
}
