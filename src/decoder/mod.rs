//! Message decoder: turns a parsed MIME tree into one renderable body and a
//! flat attachment list.
//!
//! Everything here is pure. Malformed or empty trees degrade to an empty
//! body and no attachments instead of failing.

pub mod attachments;
pub mod body;
pub mod html;

pub use attachments::extract_attachments;
pub use body::extract_body;
pub use html::html_to_text;

use crate::error::Result;
use crate::model::message::DecodedMessage;
use crate::model::mime::MimeNode;
use crate::parser::MimeParser;

/// Run both extractions over the same tree.
pub fn decode(root: &MimeNode) -> DecodedMessage {
    let decoded = DecodedMessage {
        body: extract_body(root),
        attachments: extract_attachments(root),
    };
    tracing::debug!(
        root_type = %root.content_type,
        body_len = decoded.body.len(),
        attachments = decoded.attachments.len(),
        "Decoded message"
    );
    decoded
}

/// Parse raw message bytes with `parser`, then [`decode`] the tree.
pub fn decode_raw(parser: &dyn MimeParser, raw: &[u8]) -> Result<DecodedMessage> {
    let root = parser.parse(raw)?;
    Ok(decode(&root))
}

/// Decode bytes as UTF-8, replacing invalid sequences.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
