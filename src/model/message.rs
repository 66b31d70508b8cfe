//! Decoder output: one renderable body plus the attachment list.

use super::address::EmailAddress;
use super::attachment::Attachment;

/// Tags whose presence marks a body as HTML rather than plain text.
const HTML_MARKERS: &[&str] = &["<html", "<body", "<div", "<p>", "<p ", "<br", "<table"];

/// The result of decoding a MIME tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DecodedMessage {
    /// Best-effort renderable content, HTML or plain text. Empty if none found.
    pub body: String,

    /// Top-level attachments in document order.
    pub attachments: Vec<Attachment>,
}

impl DecodedMessage {
    /// Heuristic: does the body look like HTML markup?
    pub fn is_html(&self) -> bool {
        let lower = self.body.to_ascii_lowercase();
        HTML_MARKERS.iter().any(|m| lower.contains(m))
    }

    /// `true` if neither a body nor any attachment was found.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.attachments.is_empty()
    }
}

/// Header fields shown above the body in the viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessageHeaders {
    /// First `From` address.
    pub from: EmailAddress,
    /// First `To` address.
    pub to: EmailAddress,
    pub subject: String,
}

impl MessageHeaders {
    /// Subject for a reply: `"Re: "` prefixed unless already present.
    pub fn reply_subject(&self) -> String {
        let already_reply = self
            .subject
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("re:"));
        if already_reply {
            self.subject.clone()
        } else {
            format!("Re: {}", self.subject)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html() {
        let html = DecodedMessage {
            body: "<HTML><body>hi</body></HTML>".into(),
            attachments: Vec::new(),
        };
        assert!(html.is_html());

        let plain = DecodedMessage {
            body: "a < b and c > d".into(),
            attachments: Vec::new(),
        };
        assert!(!plain.is_html());
    }

    #[test]
    fn test_reply_subject() {
        let mut headers = MessageHeaders {
            subject: "Hello".into(),
            ..MessageHeaders::default()
        };
        assert_eq!(headers.reply_subject(), "Re: Hello");
        headers.subject = "RE: Hello".into();
        assert_eq!(headers.reply_subject(), "RE: Hello");
    }

    #[test]
    fn test_json_keeps_attachment_bytes() {
        let message = DecodedMessage {
            body: "hi".into(),
            attachments: vec![Attachment {
                name: "a.bin".into(),
                content: vec![1, 2, 3],
                content_type: "application/octet-stream".into(),
            }],
        };
        let json = serde_json::to_string(&message).unwrap();
        let back: DecodedMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
        assert_eq!(back.attachments[0].size(), 3);
    }

    #[test]
    fn test_is_empty() {
        assert!(DecodedMessage::default().is_empty());
    }
}
