//! Browser-side helpers that pages and components share.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` carries the backend settings from the server-rendered shell into
//! the hydrated app through the `probe-config` meta tag.

pub mod config;
