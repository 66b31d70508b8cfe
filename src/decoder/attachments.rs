//! Attachment collection from the top level of a message.

use crate::model::attachment::Attachment;
use crate::model::mime::{MimeNode, MULTIPART_ALTERNATIVE, MULTIPART_RELATED, TEXT_HTML, TEXT_PLAIN};

/// Content types that carry the body, never reported as attachments.
const BODY_TYPES: [&str; 4] = [TEXT_HTML, TEXT_PLAIN, MULTIPART_ALTERNATIVE, MULTIPART_RELATED];

/// Collect every direct child of `root` that is not a body part.
///
/// The scan is not recursive: inline images inside a `multipart/related`
/// block are not listed.
pub fn extract_attachments(root: &MimeNode) -> Vec<Attachment> {
    root.children
        .iter()
        .filter(|child| !BODY_TYPES.contains(&child.content_type.as_str()))
        .map(|child| Attachment {
            name: child.param("name").unwrap_or_default().to_string(),
            content: child.content.clone(),
            content_type: child.content_type.clone(),
        })
        .collect()
}
