//! Loading individual `.eml` files (RFC 5322 messages without MBOX framing).

use std::path::Path;

use crate::error::{Result, ThrowboxError};
use crate::model::mime::MimeNode;

use super::MimeParser;

/// Read the raw bytes of an `.eml` file.
pub fn load_eml(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| ThrowboxError::read(path, e))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "Loaded message file");
    Ok(data)
}

/// Read an `.eml` file and parse it into a MIME tree.
pub fn parse_eml(parser: &dyn MimeParser, path: impl AsRef<Path>) -> Result<MimeNode> {
    let data = load_eml(path)?;
    parser.parse(&data)
}
