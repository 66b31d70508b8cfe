//! The mailbox view model held by the host between polls.

use crate::model::summary::MailSummary;

use super::columns::unread_count;
use super::reconcile::{reconcile, ReconcileResult};

/// Listing shown for the selected address.
///
/// Views are values: every operation returns a new view and never mutates
/// the one it was called on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailboxView {
    /// Items sorted newest first.
    pub items: Vec<MailSummary>,
    /// Id of the open message, empty when nothing is selected.
    pub selected_id: String,
    /// `true` if the poll that produced this view had unread items.
    pub has_new: bool,
}

/// Outcome of [`MailboxView::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// Keep the current view. `has_new` still drives the notification.
    Unchanged { has_new: bool },
    /// Replace the current view wholesale.
    Replaced(MailboxView),
}

impl Refresh {
    pub fn has_new(&self) -> bool {
        match self {
            Self::Unchanged { has_new } => *has_new,
            Self::Replaced(view) => view.has_new,
        }
    }

    /// Resolve against the view that was refreshed.
    pub fn apply(self, current: MailboxView) -> MailboxView {
        match self {
            Self::Unchanged { .. } => current,
            Self::Replaced(view) => view,
        }
    }
}

impl MailboxView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile a polled listing against this view.
    ///
    /// On change, the new view carries the sorted items and keeps the current
    /// selection, or selects the most recent message if none was selected.
    pub fn refresh(&self, incoming: Vec<MailSummary>, force: bool) -> Refresh {
        match reconcile(&self.items, incoming, force) {
            ReconcileResult::Unchanged { has_new } => Refresh::Unchanged { has_new },
            ReconcileResult::Changed { items, has_new } => {
                let selected_id = pick_initial_selection(&items, &self.selected_id);
                Refresh::Replaced(Self {
                    items,
                    selected_id,
                    has_new,
                })
            }
        }
    }

    /// Open a message: select it and clear its unread flag.
    pub fn select(&self, message_id: &str) -> Self {
        let items = self
            .items
            .iter()
            .map(|m| {
                let mut m = m.clone();
                if m.message_id == message_id {
                    m.is_new = false;
                }
                m
            })
            .collect();
        Self {
            items,
            selected_id: message_id.to_string(),
            has_new: self.has_new,
        }
    }

    /// Drop the selection, e.g. when switching to another address.
    pub fn clear_selection(&self) -> Self {
        Self {
            selected_id: String::new(),
            ..self.clone()
        }
    }

    /// The selected summary, if it is still listed.
    pub fn selected(&self) -> Option<&MailSummary> {
        self.items.iter().find(|m| m.message_id == self.selected_id)
    }

    pub fn unread_count(&self) -> usize {
        unread_count(&self.items)
    }
}

/// Keep a non-empty selection; otherwise select the first (most recent) item.
pub fn pick_initial_selection(items: &[MailSummary], current_selection: &str) -> String {
    if !current_selection.is_empty() {
        return current_selection.to_string();
    }
    items
        .first()
        .map(|m| m.message_id.clone())
        .unwrap_or_default()
}
