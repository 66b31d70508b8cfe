//! Writing decoded attachments and raw messages to disk.

pub mod attachment;
pub mod raw;

use std::path::{Path, PathBuf};

/// Sanitize a string for use in filenames.
///
/// Replaces invalid characters with `_` and truncates to `max_len` characters.
pub fn sanitize_filename_part(s: &str, max_len: usize) -> String {
    let sanitized: String = s
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | '@') {
                c
            } else {
                '_'
            }
        })
        .take(max_len)
        .collect();

    // A name made only of dots would address the directory itself.
    if sanitized.chars().all(|c| c == '.') {
        "unknown".to_string()
    } else {
        sanitized
    }
}

/// If `path` already exists, append a counter to make it unique.
pub(crate) fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("file");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parent = path.parent().unwrap_or(Path::new("."));

    let candidate = |suffix: &str| {
        if ext.is_empty() {
            parent.join(format!("{stem}_{suffix}"))
        } else {
            parent.join(format!("{stem}_{suffix}.{ext}"))
        }
    };

    (1..1000)
        .map(|i| candidate(&i.to_string()))
        .find(|p| !p.exists())
        .unwrap_or_else(|| candidate("dup"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename_part("hello world", 20), "hello_world");
        assert_eq!(sanitize_filename_part("user@example.com", 30), "user@example.com");
        assert_eq!(sanitize_filename_part("a/b\\c:d*e", 20), "a_b_c_d_e");
        assert_eq!(sanitize_filename_part("", 20), "unknown");
        assert_eq!(sanitize_filename_part("..", 20), "unknown");
        assert_eq!(sanitize_filename_part("abcdef", 3), "abc");
    }

    #[test]
    fn test_unique_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        assert_eq!(unique_path(&path), path);

        std::fs::write(&path, b"x").unwrap();
        assert_eq!(unique_path(&path), dir.path().join("a_1.txt"));

        std::fs::write(dir.path().join("a_1.txt"), b"x").unwrap();
        assert_eq!(unique_path(&path), dir.path().join("a_2.txt"));
    }
}
