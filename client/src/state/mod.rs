//! Client-side state helpers.
//!
//! DESIGN
//! ======
//! Every probe component owns its own `RwSignal<ActionState<T>>`; nothing is
//! shared between components. `action` holds the click-handler core they all
//! run through.

pub mod action;
