//! Core data model types: MIME trees, decoded messages, mailbox summaries and addresses.

pub mod address;
pub mod attachment;
pub mod message;
pub mod mime;
pub mod summary;
