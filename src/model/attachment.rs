//! Attachments collected from the top level of a decoded message.

/// A non-body part of a message.
///
/// The payload is held in memory: messages in a disposable inbox are small
/// and the viewer offers every attachment for download.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attachment {
    /// Value of the `name` Content-Type parameter, empty when absent.
    pub name: String,

    /// Decoded payload bytes.
    pub content: Vec<u8>,

    /// MIME content type (e.g. `"image/jpeg"`, `"application/pdf"`).
    pub content_type: String,
}

impl Attachment {
    /// Payload size in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// File extension guessed from the content subtype (`"image/png"` → `"png"`).
    ///
    /// Structured suffixes are dropped (`"image/svg+xml"` → `"svg"`).
    pub fn extension(&self) -> Option<&str> {
        let (_, subtype) = self.content_type.split_once('/')?;
        let subtype = subtype.split('+').next().unwrap_or(subtype);
        if subtype.is_empty() || subtype == "octet-stream" {
            None
        } else {
            Some(subtype)
        }
    }
}
