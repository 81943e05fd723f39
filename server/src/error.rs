//! Startup failures of the console host.

use crate::config::ServerConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("config: {0}")]
    Config(#[from] ServerConfigError),
    #[error("dotenv: {0}")]
    Dotenv(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
