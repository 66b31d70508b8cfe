//! Mailbox listing boundary.
//!
//! The reconciler consumes `Vec<MailSummary>`; where that list comes from
//! (HTTP endpoint, fixture file) sits behind [`MailboxSource`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ThrowboxError};
use crate::model::summary::MailSummary;

/// Capability: fetch the current listing of one mailbox address.
pub trait MailboxSource: Send + Sync {
    fn fetch(&self, address: &str) -> Result<Vec<MailSummary>>;
}

/// Accepted body shapes of the listing endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Wrapped { items: Vec<MailSummary> },
    Bare(Vec<MailSummary>),
}

/// Decode a listing body: `{"items": [...]}` or a bare array.
pub fn parse_listing(json: &str) -> Result<Vec<MailSummary>> {
    let listing: Listing = serde_json::from_str(json).map_err(|e| {
        ThrowboxError::InvalidListing(format!("expected {{\"items\": [...]}} or an array: {e}"))
    })?;
    Ok(match listing {
        Listing::Wrapped { items } | Listing::Bare(items) => items,
    })
}

/// Read and decode a listing file.
pub fn load_listing(path: impl AsRef<Path>) -> Result<Vec<MailSummary>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| ThrowboxError::read(path, e))?;
    let items = parse_listing(&json)?;
    tracing::debug!(path = %path.display(), count = items.len(), "Loaded listing");
    Ok(items)
}

/// Serves listings from `<dir>/<address>.json`.
#[derive(Debug, Clone)]
pub struct FileMailboxSource {
    dir: PathBuf,
}

impl FileMailboxSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn listing_path(&self, address: &str) -> Result<PathBuf> {
        if address.is_empty() || address.contains(['/', '\\']) || address.starts_with('.') {
            return Err(ThrowboxError::InvalidPath(address.to_string()));
        }
        Ok(self.dir.join(format!("{address}.json")))
    }
}

impl MailboxSource for FileMailboxSource {
    fn fetch(&self, address: &str) -> Result<Vec<MailSummary>> {
        load_listing(self.listing_path(address)?)
    }
}
