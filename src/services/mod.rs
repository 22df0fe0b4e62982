//! Request-level services: chat responder and fallback matcher.

pub mod chat;
pub mod fallback;
