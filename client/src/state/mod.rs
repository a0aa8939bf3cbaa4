//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session core is split into `store` (durable credentials), `session`
//! (in-memory session with generation fencing), `manager` (the operations
//! pages call), and `auth` (the snapshot published to the UI). `content`
//! holds per-page fetch state.

pub mod auth;
pub mod content;
pub mod manager;
pub mod session;
pub mod store;
