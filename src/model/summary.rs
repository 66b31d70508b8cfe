//! Mailbox listing entries as returned by the mail API.

use serde::{Deserialize, Serialize};

use super::address::sender_label;

/// Display headers of a listed message. Opaque to the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonHeaders {
    pub from: Vec<String>,
    pub to: Vec<String>,
    pub subject: String,
    pub date: String,
    pub message_id: String,
    pub return_path: String,
}

/// One message in a mailbox poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailSummary {
    /// Unique within a mailbox.
    pub message_id: String,

    /// Sortable timestamp string (ISO-8601 from the API).
    pub timestamp: String,

    /// Unread flag as reported by the server.
    #[serde(default)]
    pub is_new: bool,

    #[serde(default)]
    pub common_headers: CommonHeaders,

    /// Mailbox address the message was delivered to.
    #[serde(default)]
    pub destination: String,

    /// Envelope sender.
    #[serde(default)]
    pub source: String,
}

impl MailSummary {
    /// Minimal summary, mostly useful in tests and benches.
    pub fn new(message_id: impl Into<String>, timestamp: impl Into<String>, is_new: bool) -> Self {
        Self {
            message_id: message_id.into(),
            timestamp: timestamp.into(),
            is_new,
            ..Self::default()
        }
    }

    /// Set the first `From` header value, returning the summary.
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.common_headers.from = vec![from.into()];
        self
    }

    /// Set the subject, returning the summary.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.common_headers.subject = subject.into();
        self
    }

    /// The first `From` header value, empty if there is none.
    pub fn first_from(&self) -> &str {
        self.common_headers
            .from
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn subject(&self) -> &str {
        &self.common_headers.subject
    }

    /// Sender label of the first `From` value.
    pub fn sender_label(&self) -> String {
        sender_label(self.first_from())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "messageId": "abc",
            "timestamp": "2024-01-02T10:00:00Z",
            "isNew": true,
            "commonHeaders": {
                "from": ["john smith <john@x.com>"],
                "subject": "Hi",
                "returnPath": "bounce@x.com"
            },
            "destination": "me@tmp.example"
        }"#;
        let summary: MailSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.message_id, "abc");
        assert!(summary.is_new);
        assert_eq!(summary.subject(), "Hi");
        assert_eq!(summary.common_headers.return_path, "bounce@x.com");
        assert_eq!(summary.common_headers.to, Vec::<String>::new());
        assert_eq!(summary.sender_label(), "John Smith");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let summary: MailSummary =
            serde_json::from_str(r#"{"messageId":"a","timestamp":"1"}"#).unwrap();
        assert!(!summary.is_new);
        assert_eq!(summary.first_from(), "");
        assert_eq!(summary.sender_label(), "");
    }

    #[test]
    fn test_builders() {
        let summary = MailSummary::new("m-1", "2024-01-02T10:00:00Z", true)
            .with_from("ada lovelace <ada@x.com>")
            .with_subject("Notes");
        assert_eq!(summary.first_from(), "ada lovelace <ada@x.com>");
        assert_eq!(summary.subject(), "Notes");
        assert_eq!(summary.sender_label(), "Ada Lovelace");
    }
}
