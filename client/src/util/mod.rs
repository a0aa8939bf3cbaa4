//! Shared helpers used by pages and components.
//!
//! DESIGN
//! ======
//! Keep cross-cutting pure logic here so route-level components stay focused
//! on composition and rendering.

pub mod auth;
pub mod url;
