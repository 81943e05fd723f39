//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `*_button` module is one async action bound to one endpoint. They all
//! render through `ProbePanel`, so trigger, status region, and error region
//! keep the same test hooks everywhere.

pub mod health_button;
pub mod jwt_button;
pub mod lifecycle_button;
pub mod message_button;
pub mod probe_panel;
pub mod summary_list;
