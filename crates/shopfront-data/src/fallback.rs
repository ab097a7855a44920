//! The fallback decision point.
//!
//! Every read of backend data goes through [`Fetched::resolve`] and every
//! form submission through [`Submission::resolve`], so whether a page shows
//! live data or built-in data is a value callers can inspect instead of a
//! side effect of a swallowed error.

use crate::FetchError;
use serde::Serialize;

/// Data for a page, and where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "data", rename_all = "lowercase")]
pub enum Fetched<T> {
    /// From the backend.
    Live(T),
    /// Built-in data shown because the backend call failed.
    Fallback(T),
}

impl<T> Fetched<T> {
    /// Keep a successful result, or log the failure and use the fallback.
    pub fn resolve(result: Result<T, FetchError>, resource: &str, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Fetched::Live(value),
            Err(error) => {
                tracing::warn!(resource, %error, "backend unavailable, using fallback data");
                Fetched::Fallback(fallback())
            }
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Fallback(_))
    }

    pub fn get(&self) -> &T {
        match self {
            Fetched::Live(value) | Fetched::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(value) | Fetched::Fallback(value) => value,
        }
    }

    /// Transform the data, keeping its origin.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Live(value) => Fetched::Live(f(value)),
            Fetched::Fallback(value) => Fetched::Fallback(f(value)),
        }
    }
}

/// Outcome of a form submission that never fails in front of the shopper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "data", rename_all = "snake_case")]
pub enum Submission<T> {
    /// The backend accepted it.
    Confirmed(T),
    /// The backend was unavailable; the caller kept the payload locally.
    DemoMode,
}

impl<T> Submission<T> {
    /// Keep a successful result, or log the failure and switch to demo mode.
    pub fn resolve(result: Result<T, FetchError>, form: &str) -> Self {
        match result {
            Ok(value) => Submission::Confirmed(value),
            Err(error) => {
                tracing::warn!(form, %error, "submission failed, continuing in demo mode");
                Submission::DemoMode
            }
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Submission::DemoMode)
    }

    pub fn confirmed(self) -> Option<T> {
        match self {
            Submission::Confirmed(value) => Some(value),
            Submission::DemoMode => None,
        }
    }

    /// Transform the confirmed value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Submission<U> {
        match self {
            Submission::Confirmed(value) => Submission::Confirmed(f(value)),
            Submission::DemoMode => Submission::DemoMode,
        }
    }

    /// Notification text, with the demo-mode suffix the pages show.
    pub fn notice(&self, success: &str) -> String {
        match self {
            Submission::Confirmed(_) => success.to_string(),
            Submission::DemoMode => format!("{} (Demo mode)", success),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_keeps_value() {
        let fetched = Fetched::resolve(Ok(vec![1, 2]), "products", || vec![9]);
        assert!(fetched.is_live());
        assert_eq!(fetched.get(), &vec![1, 2]);
    }

    #[test]
    fn test_error_uses_fallback() {
        let fetched = Fetched::resolve(Err(FetchError::Timeout), "products", || vec![9; 8]);
        assert!(fetched.is_fallback());
        assert_eq!(fetched.map(|v| v.len()).into_inner(), 8);
    }

    #[test]
    fn test_submission() {
        let ok = Submission::resolve(Ok(5), "contact");
        assert_eq!(ok.notice("Message sent successfully!"), "Message sent successfully!");
        assert_eq!(ok.confirmed(), Some(5));

        let demo: Submission<i32> = Submission::resolve(
            Err(FetchError::Network("connection refused".into())),
            "contact",
        );
        assert!(demo.is_demo());
        assert_eq!(
            demo.notice("Message sent successfully!"),
            "Message sent successfully! (Demo mode)"
        );
    }

    #[test]
    fn test_serialized_origin() {
        let value = serde_json::to_value(Fetched::Fallback(3)).unwrap();
        assert_eq!(value, serde_json::json!({"source": "fallback", "data": 3}));
    }
}
