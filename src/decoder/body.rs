//! Body selection.
//!
//! Preference order, first non-empty result wins:
//! 1. the first `multipart/alternative` child (with children) that yields a body
//! 2. the first `multipart/related` child (with children) that yields a body
//! 3. the first direct `text/html` child
//! 4. the first direct `text/plain` child
//! 5. the root itself, when it is a `text/html` leaf

use crate::model::mime::{MimeNode, MULTIPART_ALTERNATIVE, MULTIPART_RELATED, TEXT_HTML, TEXT_PLAIN};

use super::decode_text;

/// Select one renderable body from a MIME tree.
///
/// Returns an empty string if nothing renderable is found.
pub fn extract_body(root: &MimeNode) -> String {
    for container in [MULTIPART_ALTERNATIVE, MULTIPART_RELATED] {
        if let Some(body) = first_container_body(root, container) {
            tracing::trace!(container, "Body found in nested container");
            return body;
        }
    }

    for leaf_type in [TEXT_HTML, TEXT_PLAIN] {
        if let Some(child) = root.children.iter().find(|c| c.is_type(leaf_type)) {
            let text = decode_text(&child.content);
            if !text.is_empty() {
                tracing::trace!(leaf_type, "Body found in direct child");
                return text;
            }
        }
    }

    if root.is_leaf() && root.is_type(TEXT_HTML) {
        return decode_text(&root.content);
    }

    String::new()
}

/// Recurse into the children of type `container`, in order, stopping at the
/// first one that yields a non-empty body.
fn first_container_body(root: &MimeNode, container: &str) -> Option<String> {
    root.children
        .iter()
        .filter(|c| c.is_type(container) && !c.is_leaf())
        .map(extract_body)
        .find(|body| !body.is_empty())
}
