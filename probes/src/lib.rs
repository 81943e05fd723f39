//! Shared probe model for the API probe console.
//!
//! This crate owns everything the browser `client` and the headless `cli`
//! agree on: the per-action request/status/error state machine, the wire
//! payloads returned by the backend under test, the endpoint catalog and its
//! configuration, error-message derivation, and the pure mapping from an
//! action's state to its visual tone and summary lines.
//!
//! Nothing here performs I/O. Transports live in the consuming crates so the
//! same rules apply whether a request went out through `gloo-net` or `reqwest`.

pub mod action;
pub mod endpoint;
pub mod error;
pub mod payload;
pub mod summary;
pub mod tone;

pub use action::{ActionState, Phase};
pub use endpoint::{Action, ApiConfig, ConfigError, Endpoints, Environment, HttpMethod};
pub use error::ProbeError;
pub use payload::{
    AccountResponse, AccountUser, ApiMessage, AuthTestReport, Credentials, DeleteRequest, HealthReport,
    HealthStatus, LifecycleDetails, UserLifecycle,
};
pub use summary::Line;
pub use tone::Tone;
