//! Owned MIME node tree handed to the message decoder.
//!
//! Trees are produced by a [`crate::parser::MimeParser`] and never mutated
//! afterwards. Building them by hand is the normal way to test the decoder.

use std::collections::BTreeMap;

/// `multipart/alternative`
pub const MULTIPART_ALTERNATIVE: &str = "multipart/alternative";
/// `multipart/related`
pub const MULTIPART_RELATED: &str = "multipart/related";
/// `text/html`
pub const TEXT_HTML: &str = "text/html";
/// `text/plain`
pub const TEXT_PLAIN: &str = "text/plain";

/// A single node of a parsed MIME message.
///
/// A node with children is *composite* and its own `content` is ignored for
/// text extraction. A node without children is a *leaf*.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MimeNode {
    /// Lower-cased `type/subtype` (e.g. `"text/html"`).
    pub content_type: String,

    /// Content-Type attributes such as `name` or `charset`, keyed lower-case.
    pub content_type_params: BTreeMap<String, String>,

    /// Decoded payload bytes of this node (empty for composite nodes).
    pub content: Vec<u8>,

    /// Sub-parts in document order.
    pub children: Vec<MimeNode>,
}

impl MimeNode {
    /// Build a leaf node with the given type and payload.
    pub fn leaf(content_type: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into().to_ascii_lowercase(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Build a composite node from its children.
    pub fn composite(content_type: impl Into<String>, children: Vec<MimeNode>) -> Self {
        Self {
            content_type: content_type.into().to_ascii_lowercase(),
            children,
            ..Self::default()
        }
    }

    /// Attach a Content-Type parameter, returning the node.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.content_type_params
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    /// `true` if the node has no sub-parts.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `true` if the node's content type equals `content_type`.
    pub fn is_type(&self, content_type: &str) -> bool {
        self.content_type == content_type
    }

    /// Look up a Content-Type parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.content_type_params.get(key).map(String::as_str)
    }
}
