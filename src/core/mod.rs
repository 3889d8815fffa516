//! Core logic: session state, bridge messages and the file bridge.

pub mod bridge;
pub mod error;
pub mod messages;
pub mod persist_queue;
pub mod session;
