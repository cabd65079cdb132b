//! Session state for the authenticated platform connection.
//!
//! The platform issues an opaque session token at login and may silently
//! rotate it on any response; `Session` is the single owned place that
//! token lives.

pub mod session;

pub use session::Session;
