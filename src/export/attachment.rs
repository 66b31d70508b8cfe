//! Save decoded attachments.

use std::path::{Path, PathBuf};

use crate::model::attachment::Attachment;
use crate::model::message::DecodedMessage;

use super::{sanitize_filename_part, unique_path};

/// Write a single attachment into `output_dir` without overwriting.
///
/// `index` is the attachment's position, used to name unnamed parts.
pub fn export_attachment(
    attachment: &Attachment,
    index: usize,
    output_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let path = unique_path(&output_dir.join(attachment_filename(attachment, index)));
    std::fs::write(&path, &attachment.content)?;
    tracing::debug!(path = %path.display(), bytes = attachment.content.len(), "Saved attachment");
    Ok(path)
}

/// Write every attachment of `message` into `output_dir`.
///
/// A failing attachment is logged and skipped; the rest are still written.
pub fn export_attachments(
    message: &DecodedMessage,
    output_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    let mut paths = Vec::with_capacity(message.attachments.len());

    for (idx, att) in message.attachments.iter().enumerate() {
        match export_attachment(att, idx, output_dir) {
            Ok(path) => paths.push(path),
            Err(e) => {
                tracing::warn!(
                    name = %att.name,
                    content_type = %att.content_type,
                    error = %e,
                    "Failed to export attachment"
                );
            }
        }
    }

    Ok(paths)
}

/// File name for an attachment: its sanitized `name`, or
/// `attachment_{index}[.ext]` when unnamed.
pub fn attachment_filename(attachment: &Attachment, index: usize) -> String {
    if !attachment.name.trim().is_empty() {
        return sanitize_filename_part(&attachment.name, 150);
    }
    match attachment.extension() {
        Some(ext) => format!("attachment_{index}.{}", sanitize_filename_part(ext, 20)),
        None => format!("attachment_{index}"),
    }
}
