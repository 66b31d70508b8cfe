//! Last-issued-wins ordering for overlapping polls.
//!
//! A poll that was issued earlier but completes later must not overwrite the
//! view produced by a newer poll. The host takes a ticket before each fetch
//! and applies the result only if the ticket is still current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PollTicket(u64);

impl PollTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Hands out poll tickets for one mailbox.
#[derive(Debug, Default)]
pub struct PollSequencer {
    latest: AtomicU64,
}

impl PollSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding every earlier one.
    pub fn issue(&self) -> PollTicket {
        PollTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// `true` if no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: PollTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Pass `value` through only if `ticket` is still current.
    pub fn accept<T>(&self, ticket: PollTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest.load(Ordering::SeqCst),
                "Discarding result of superseded poll"
            );
            None
        }
    }
}
