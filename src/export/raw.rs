//! Save the raw message, as downloaded, next to its attachments.

use std::path::{Path, PathBuf};

use super::{sanitize_filename_part, unique_path};

/// Write raw message bytes to `{output_dir}/{name}.eml`.
///
/// Returns the path of the created file.
pub fn export_raw(raw: &[u8], output_dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let stem = sanitize_filename_part(name.trim_end_matches(".eml"), 150);
    let path = unique_path(&output_dir.join(format!("{stem}.eml")));
    std::fs::write(&path, raw)?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "Saved raw message");
    Ok(path)
}
