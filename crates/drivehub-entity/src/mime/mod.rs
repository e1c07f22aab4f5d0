//! MIME classification used for tree icons.

pub mod kind;

pub use kind::MimeKind;
