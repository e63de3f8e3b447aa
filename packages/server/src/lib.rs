//! Room-based WebSocket chat relay.
//!
//! Clients join named rooms and exchange short text messages that are
//! broadcast to every member of the same room, the sender included.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
