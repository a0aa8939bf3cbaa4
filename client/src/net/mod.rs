//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` performs raw HTTP, `gateway` wraps it with credential
//! attachment and 401 handling, `api` names the endpoints, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod gateway;
pub mod transport;
pub mod types;
