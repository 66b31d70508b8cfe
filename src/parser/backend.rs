//! [`MimeParser`] backed by `mail-parser`.

use mail_parser::{Address, Message, MessageParser, MessagePart, MimeHeaders, PartType};

use crate::error::{Result, ThrowboxError};
use crate::model::address::EmailAddress;
use crate::model::message::MessageHeaders;
use crate::model::mime::MimeNode;

use super::MimeParser;

/// Maximum nesting depth kept when converting parts (adversarial input guard).
pub const MAX_DEPTH: usize = 10;

/// Converts `mail-parser`'s part arena into an owned [`MimeNode`] tree.
#[derive(Debug, Clone)]
pub struct MailParserBackend {
    max_depth: usize,
}

impl Default for MailParserBackend {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

impl MailParserBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the maximum nesting depth. Parts below it are dropped.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Extract the viewer header fields (first From, first To, Subject).
    pub fn headers(&self, raw: &[u8]) -> Result<MessageHeaders> {
        let msg = parse_message(raw)?;
        Ok(MessageHeaders {
            from: first_address(msg.from()),
            to: first_address(msg.to()),
            subject: msg.subject().unwrap_or("").to_string(),
        })
    }

    fn convert(&self, msg: &Message<'_>, part: &MessagePart<'_>, depth: usize) -> MimeNode {
        let mut node = MimeNode {
            content_type: content_type_of(part),
            content_type_params: params_of(part),
            ..MimeNode::default()
        };

        match &part.body {
            PartType::Multipart(ids) => {
                if depth >= self.max_depth {
                    tracing::warn!(
                        depth,
                        content_type = %node.content_type,
                        "Maximum MIME depth reached, dropping sub-parts"
                    );
                    return node;
                }
                node.children = ids
                    .iter()
                    .filter_map(|&id| msg.parts.get(id))
                    .map(|child| self.convert(msg, child, depth + 1))
                    .collect();
            }
            _ => node.content = part.contents().to_vec(),
        }
        node
    }
}

impl MimeParser for MailParserBackend {
    fn parse(&self, raw: &[u8]) -> Result<MimeNode> {
        let msg = parse_message(raw)?;
        let root = msg
            .parts
            .first()
            .ok_or_else(|| ThrowboxError::MimeError("Message has no parts".into()))?;
        Ok(self.convert(&msg, root, 0))
    }
}

fn parse_message(raw: &[u8]) -> Result<Message<'_>> {
    MessageParser::default()
        .parse(skip_from_line(raw))
        .ok_or_else(|| ThrowboxError::MimeError("Failed to parse message".into()))
}

/// Lower-cased `type/subtype`. Parts without a Content-Type default per RFC 2045.
fn content_type_of(part: &MessagePart<'_>) -> String {
    match part.content_type() {
        Some(ct) => {
            let full = match ct.subtype() {
                Some(sub) => format!("{}/{}", ct.ctype(), sub),
                None => ct.ctype().to_string(),
            };
            full.to_ascii_lowercase()
        }
        None if matches!(part.body, PartType::Multipart(_)) => "multipart/mixed".to_string(),
        None if matches!(part.body, PartType::Message(_)) => "message/rfc822".to_string(),
        None => "text/plain".to_string(),
    }
}

fn params_of(part: &MessagePart<'_>) -> std::collections::BTreeMap<String, String> {
    let mut params = std::collections::BTreeMap::new();
    if let Some(attributes) = part.content_type().and_then(|ct| ct.attributes()) {
        for (key, value) in attributes {
            params
                .entry(key.to_ascii_lowercase())
                .or_insert_with(|| value.to_string());
        }
    }
    // Many senders only set the disposition filename.
    if !params.contains_key("name") {
        if let Some(name) = part.attachment_name() {
            params.insert("name".to_string(), name.to_string());
        }
    }
    params
}

fn first_address(addr: Option<&Address<'_>>) -> EmailAddress {
    match addr.and_then(|a| a.first()) {
        Some(first) => EmailAddress {
            display_name: first.name().unwrap_or("").to_string(),
            address: first.address().unwrap_or("").to_string(),
        },
        None => EmailAddress::default(),
    }
}

/// Skip a leading BOM and the mbox `From ` separator line, if present.
fn skip_from_line(data: &[u8]) -> &[u8] {
    let data = data.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(data);

    if data.starts_with(b"From ") {
        if let Some(pos) = data.iter().position(|&b| b == b'\n') {
            return &data[pos + 1..];
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mime::{MULTIPART_ALTERNATIVE, TEXT_HTML, TEXT_PLAIN};

    const MULTIPART: &[u8] = b"From: \"jane doe\" <jane@example.com>\r\n\
To: box@tmp.example\r\n\
Subject: Report\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/mixed; boundary=\"outer\"\r\n\
\r\n\
--outer\r\n\
Content-Type: multipart/alternative; boundary=\"inner\"\r\n\
\r\n\
--inner\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
plain body\r\n\
--inner\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<p>html body</p>\r\n\
--inner--\r\n\
--outer\r\n\
Content-Type: application/pdf; name=\"report.pdf\"\r\n\
Content-Transfer-Encoding: base64\r\n\
\r\n\
JVBERi0=\r\n\
--outer--\r\n";

    #[test]
    fn test_skip_from_line() {
        let data = b"From user@example.com Thu Jan 01 00:00:00 2024\nSubject: Test\n\nBody\n";
        assert!(skip_from_line(data).starts_with(b"Subject:"));
    }

    #[test]
    fn test_skip_bom_and_from_line() {
        let data = b"\xEF\xBB\xBFFrom x\nSubject: Test\n\nBody\n";
        assert!(skip_from_line(data).starts_with(b"Subject:"));
    }

    #[test]
    fn test_skip_from_line_no_from() {
        let data = b"Subject: Test\n\nBody\n";
        assert_eq!(skip_from_line(data), data);
    }

    #[test]
    fn test_parse_multipart_tree() {
        let root = MailParserBackend::new().parse(MULTIPART).unwrap();
        assert_eq!(root.content_type, "multipart/mixed");
        assert_eq!(root.children.len(), 2);

        let alt = &root.children[0];
        assert_eq!(alt.content_type, MULTIPART_ALTERNATIVE);
        assert_eq!(alt.children[0].content_type, TEXT_PLAIN);
        assert_eq!(alt.children[1].content_type, TEXT_HTML);
        assert!(String::from_utf8_lossy(&alt.children[1].content).contains("<p>html body</p>"));

        let pdf = &root.children[1];
        assert_eq!(pdf.content_type, "application/pdf");
        assert_eq!(pdf.param("name"), Some("report.pdf"));
        assert_eq!(pdf.content, b"%PDF-");
    }

    #[test]
    fn test_depth_limit_drops_children() {
        let root = MailParserBackend::new()
            .with_max_depth(1)
            .parse(MULTIPART)
            .unwrap();
        let alt = &root.children[0];
        assert_eq!(alt.content_type, MULTIPART_ALTERNATIVE);
        assert!(alt.children.is_empty());
    }

    #[test]
    fn test_single_part_html_is_leaf_root() {
        let raw = b"Subject: x\r\nContent-Type: TEXT/HTML\r\n\r\n<b>hi</b>\r\n";
        let root = MailParserBackend::new().parse(raw).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.content_type, TEXT_HTML);
    }

    #[test]
    fn test_all_content_type_params_kept() {
        let raw = b"Content-Type: multipart/mixed; boundary=\"b\"\r\n\
\r\n\
--b\r\n\
Content-Type: application/pdf; NAME=\"Up.pdf\"; x-custom=\"v\"\r\n\
\r\n\
data\r\n\
--b--\r\n";
        let root = MailParserBackend::new().parse(raw).unwrap();
        assert_eq!(root.param("boundary"), Some("b"));

        let pdf = &root.children[0];
        assert_eq!(pdf.param("name"), Some("Up.pdf"));
        assert_eq!(pdf.param("x-custom"), Some("v"));
    }

    #[test]
    fn test_disposition_filename_fills_missing_name() {
        let raw = b"Content-Type: multipart/mixed; boundary=\"b\"\r\n\
\r\n\
--b\r\n\
Content-Type: text/csv; charset=utf-8\r\n\
Content-Disposition: attachment; filename=\"numbers.csv\"\r\n\
\r\n\
1,2\r\n\
--b--\r\n";
        let root = MailParserBackend::new().parse(raw).unwrap();
        let csv = &root.children[0];
        assert_eq!(csv.param("charset"), Some("utf-8"));
        assert_eq!(csv.param("name"), Some("numbers.csv"));
    }

    #[test]
    fn test_headers() {
        let headers = MailParserBackend::new().headers(MULTIPART).unwrap();
        assert_eq!(headers.from.display_name, "jane doe");
        assert_eq!(headers.from.address, "jane@example.com");
        assert_eq!(headers.to.address, "box@tmp.example");
        assert_eq!(headers.subject, "Report");
    }
}
