//! Mailbox reconciler: turns a freshly polled listing into a stably ordered
//! view, deciding whether anything changed and whether new mail arrived.

pub mod columns;
pub mod reconcile;
pub mod sequence;
pub mod view;

pub use columns::{
    from_column_width, longest_sender_label, new_mail_notice, unread_count, window_title,
    NewMailNotice,
};
pub use reconcile::{reconcile, sort_newest_first, ReconcileResult};
pub use sequence::{PollSequencer, PollTicket};
pub use view::{pick_initial_selection, MailboxView, Refresh};
