//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and route wrappers while reading shared
//! state from Leptos context providers.

pub mod protected_route;
pub mod scholar_record;
pub mod site_header;
