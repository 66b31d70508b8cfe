//! MIME parsing boundary.
//!
//! The decoder only sees [`MimeNode`] trees. Turning raw RFC 5322 bytes into a
//! tree is delegated to a [`MimeParser`], so tests can hand-build trees and
//! the backing library can be swapped.

pub mod backend;
pub mod eml;

pub use backend::MailParserBackend;

use crate::error::Result;
use crate::model::mime::MimeNode;

/// Capability: parse raw message bytes into an owned MIME tree.
///
/// Implementations must lower-case `content_type` and hand out decoded
/// payload bytes (no transfer encoding left).
pub trait MimeParser: Send + Sync {
    fn parse(&self, raw: &[u8]) -> Result<MimeNode>;
}
