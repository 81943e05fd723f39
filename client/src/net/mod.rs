//! Networking for the probe actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues exactly one HTTP request per probe invocation and converts the
//! outcome into a typed payload or a `ProbeError`.

pub mod api;
