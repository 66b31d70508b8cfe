//! Derived list figures: sender column width, unread count, window title,
//! new-mail notice.

use std::time::Duration;

use crate::model::summary::MailSummary;

/// Text of the notice shown when a poll brings in unread mail.
pub const NEW_MAIL_TEXT: &str = "New Email";

/// A transient "new mail" notice and how long the host keeps it visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMailNotice {
    pub text: &'static str,
    pub timeout: Duration,
}

/// The longest sender label among `items`, by character count.
///
/// Ties keep the first occurrence. Returns `None` for an empty listing.
pub fn longest_sender_label(items: &[MailSummary]) -> Option<String> {
    let mut best: Option<(usize, String)> = None;
    for item in items {
        let label = item.sender_label();
        let len = label.chars().count();
        if best.as_ref().map_or(true, |(best_len, _)| len > *best_len) {
            best = Some((len, label));
        }
    }
    best.map(|(_, label)| label)
}

/// Pixel width of the sender column: longest label length × `px_per_char`,
/// capped at `max_width`.
pub fn from_column_width(items: &[MailSummary], px_per_char: u32, max_width: u32) -> Option<u32> {
    let label = longest_sender_label(items)?;
    let chars = u32::try_from(label.chars().count()).unwrap_or(u32::MAX);
    Some(chars.saturating_mul(px_per_char).min(max_width))
}

pub fn unread_count(items: &[MailSummary]) -> usize {
    items.iter().filter(|m| m.is_new).count()
}

/// `"(n) base"` while there are unread items, `base` otherwise.
pub fn window_title(base: &str, items: &[MailSummary]) -> String {
    match unread_count(items) {
        0 => base.to_string(),
        n => format!("({n}) {base}"),
    }
}

/// The notice to show after a refresh, if it reported new mail.
pub fn new_mail_notice(has_new: bool, timeout_ms: u64) -> Option<NewMailNotice> {
    has_new.then(|| NewMailNotice {
        text: NEW_MAIL_TEXT,
        timeout: Duration::from_millis(timeout_ms),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from(id: &str, sender: &str) -> MailSummary {
        MailSummary::new(id, "1", false).with_from(sender)
    }

    #[test]
    fn test_longest_sender_label() {
        let items = vec![
            from("1", "Al <al@x.com>"),
            from("2", "bartholomew <b@x.com>"),
            from("3", "cy@x.com"),
        ];
        assert_eq!(longest_sender_label(&items).as_deref(), Some("Bartholomew"));
    }

    #[test]
    fn test_longest_sender_label_tie_keeps_first() {
        let items = vec![from("1", "ann <a@x.com>"), from("2", "bob <b@x.com>")];
        assert_eq!(longest_sender_label(&items).as_deref(), Some("Ann"));
    }

    #[test]
    fn test_longest_sender_label_counts_chars() {
        let items = vec![from("1", "Zoë <z@x.com>"), from("2", "Zoey <z@x.com>")];
        assert_eq!(longest_sender_label(&items).as_deref(), Some("Zoey"));
    }

    #[test]
    fn test_longest_sender_label_empty() {
        assert_eq!(longest_sender_label(&[]), None);
    }

    #[test]
    fn test_from_column_width() {
        let items = vec![from("1", "John Smith <john@x.com>")];
        assert_eq!(from_column_width(&items, 8, 200), Some(80));
        assert_eq!(from_column_width(&items, 8, 50), Some(50));
        assert_eq!(from_column_width(&[], 8, 200), None);
    }

    #[test]
    fn test_window_title() {
        let mut items = vec![from("1", "a"), from("2", "b")];
        assert_eq!(window_title("Disposable Email", &items), "Disposable Email");
        items[0].is_new = true;
        items[1].is_new = true;
        assert_eq!(window_title("Disposable Email", &items), "(2) Disposable Email");
        assert_eq!(unread_count(&items), 2);
    }

    #[test]
    fn test_new_mail_notice() {
        assert_eq!(new_mail_notice(false, 3000), None);
        let notice = new_mail_notice(true, 1500).unwrap();
        assert_eq!(notice.text, "New Email");
        assert_eq!(notice.timeout, Duration::from_millis(1500));
    }
}
