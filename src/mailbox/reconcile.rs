//! Replace-or-keep decision for a polled listing.

use crate::model::summary::MailSummary;

/// Outcome of [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileResult {
    /// Same ids in the same order: the caller keeps its current items.
    Unchanged { has_new: bool },
    /// The listing changed (or a refresh was forced). `items` is sorted
    /// newest first.
    Changed {
        items: Vec<MailSummary>,
        has_new: bool,
    },
}

impl ReconcileResult {
    /// `true` if any polled item is unread, reported even when unchanged.
    pub fn has_new(&self) -> bool {
        match self {
            Self::Unchanged { has_new } | Self::Changed { has_new, .. } => *has_new,
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// The replacement items, if the listing changed.
    pub fn items(&self) -> Option<&[MailSummary]> {
        match self {
            Self::Changed { items, .. } => Some(items),
            Self::Unchanged { .. } => None,
        }
    }
}

/// Stable sort by `timestamp`, most recent first.
///
/// Timestamps are compared as strings, which matches chronological order for
/// the zero-padded ISO-8601 values the API returns. Equal timestamps keep
/// their relative order.
pub fn sort_newest_first(items: &mut [MailSummary]) {
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Decide whether `incoming` replaces `previous`.
///
/// The listing counts as changed when `force` is set or when the sequence of
/// message ids (after sorting) differs from `previous` in content, length or
/// order. Ids must be unique within each listing.
pub fn reconcile(
    previous: &[MailSummary],
    mut incoming: Vec<MailSummary>,
    force: bool,
) -> ReconcileResult {
    debug_assert!(has_unique_ids(previous), "duplicate message ids in previous listing");
    debug_assert!(has_unique_ids(&incoming), "duplicate message ids in incoming listing");

    sort_newest_first(&mut incoming);
    let has_new = incoming.iter().any(|m| m.is_new);
    let changed = force || !same_id_sequence(previous, &incoming);

    tracing::info!(
        previous = previous.len(),
        incoming = incoming.len(),
        force,
        changed,
        has_new,
        "Reconciled mailbox listing"
    );

    if changed {
        ReconcileResult::Changed {
            items: incoming,
            has_new,
        }
    } else {
        ReconcileResult::Unchanged { has_new }
    }
}

fn same_id_sequence(a: &[MailSummary], b: &[MailSummary]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.message_id == y.message_id)
}

fn has_unique_ids(items: &[MailSummary]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items.iter().all(|m| seen.insert(m.message_id.as_str()))
}
