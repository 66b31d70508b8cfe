//! `throwbox` — message decoding and mailbox reconciliation for a
//! disposable-email client.
//!
//! Two pure transformations sit at the core: [`decoder`] turns a parsed MIME
//! tree into one renderable body plus attachments, and [`mailbox`] turns a
//! freshly polled listing into a stably ordered, unread-annotated view.
//! MIME parsing and listing retrieval are behind the [`parser::MimeParser`]
//! and [`source::MailboxSource`] traits.

pub mod config;
pub mod decoder;
pub mod error;
pub mod export;
pub mod mailbox;
pub mod model;
pub mod parser;
pub mod source;
pub mod ttl;
