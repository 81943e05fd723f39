//! # probe-cli
//!
//! Runs the console's probes from a terminal against the same backend
//! contract: one line per probe tagged with its tone, then the result summary.
//! Exits non-zero when any probe settled into an error.

mod report;
mod runner;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use probes::summary::{account_lines, health_lines, jwt_lines, lifecycle_lines, message_lines};
use probes::tone::{account_tone, health_tone, jwt_tone, lifecycle_tone, message_tone};
use probes::{Action, ActionState, ApiConfig, ConfigError, Credentials, Line, Tone};
use serde::Serialize;
use uuid::Uuid;

use crate::report::Tally;
use crate::runner::ProbeRunner;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("pass both --username and --password, or neither")]
    PartialCredentials,
    #[error("{0} probe(s) failed")]
    ProbesFailed(usize),
}

#[derive(Parser, Debug)]
#[command(name = "probe-cli", about = "Run API probes from the terminal")]
struct Cli {
    /// `development` or `production`; selects the default base URL.
    #[arg(long = "env", env = "PROBE_ENV", default_value = "development")]
    environment: String,

    #[arg(long, env = "PROBE_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "PROBE_DEV_BEARER")]
    dev_bearer: Option<String>,

    #[arg(long, env = "PROBE_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,

    /// Also print each raw response body.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Health,
    Jwt,
    Lifecycle {
        /// Bearer token; defaults to the dev bearer.
        #[arg(long)]
        token: Option<String>,
    },
    Message,
    /// Create an account; throwaway credentials when none are given.
    Signup(AccountArgs),
    /// Sign in to an existing account.
    Signin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Delete {
        #[arg(long)]
        username: String,
    },
    /// Client-side signup, signin, delete with throwaway credentials.
    Chain,
    /// Health, JWT, lifecycle (with the issued JWT), message.
    All,
}

#[derive(Args, Debug)]
struct AccountArgs {
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let runner = ProbeRunner::new(config, Duration::from_secs(cli.timeout_secs))?;
    let mut out = Output { tally: Tally::default(), verbose: cli.verbose };

    println!("target: {} ({})", runner.config().environment.as_str(), runner.config().base_url);
    run(&runner, cli.command, &mut out).await?;

    println!("{}", out.tally.summary());
    if out.tally.failed > 0 {
        return Err(CliError::ProbesFailed(out.tally.failed));
    }
    Ok(())
}

/// Layer explicit flags over the process environment.
fn build_config(cli: &Cli) -> Result<ApiConfig, ConfigError> {
    ApiConfig::from_lookup(|key| match key {
        "PROBE_ENV" => Some(cli.environment.clone()),
        "PROBE_API_BASE_URL" => cli.base_url.clone(),
        "PROBE_DEV_BEARER" => cli.dev_bearer.clone(),
        other => std::env::var(other).ok(),
    })
}

fn resolve_credentials(args: AccountArgs) -> Result<Credentials, CliError> {
    match (args.username, args.password) {
        (Some(username), Some(password)) => Ok(Credentials { username, password }),
        (None, None) => Ok(throwaway_credentials()),
        _ => Err(CliError::PartialCredentials),
    }
}

fn throwaway_credentials() -> Credentials {
    Credentials::throwaway(&Uuid::new_v4().simple().to_string())
}

struct Output {
    tally: Tally,
    verbose: bool,
}

impl Output {
    fn emit<T: Serialize>(
        &mut self,
        action: Action,
        state: &ActionState<T>,
        tone: Tone,
        summarize: impl Fn(&T) -> Vec<Line>,
    ) -> Result<(), CliError> {
        self.tally.record(tone);
        for line in report::render(action, state, tone, summarize) {
            println!("{line}");
        }
        if self.verbose {
            if let Some(result) = state.result() {
                println!("{}", serde_json::to_string_pretty(result)?);
            }
        }
        Ok(())
    }
}

async fn run(runner: &ProbeRunner, command: Command, out: &mut Output) -> Result<(), CliError> {
    match command {
        Command::Health => {
            let state = runner.health().await;
            out.emit(Action::Health, &state, health_tone(&state), health_lines)
        }
        Command::Jwt => {
            let state = runner.jwt().await;
            out.emit(Action::Jwt, &state, jwt_tone(&state), jwt_lines)
        }
        Command::Lifecycle { token } => {
            let state = runner.lifecycle(token.as_deref()).await;
            out.emit(Action::UserLifecycle, &state, lifecycle_tone(&state), lifecycle_lines)
        }
        Command::Message => {
            let state = runner.message().await;
            out.emit(Action::Message, &state, message_tone(&state), message_lines)
        }
        Command::Signup(args) => {
            let credentials = resolve_credentials(args)?;
            println!("username: {}", credentials.username);
            let state = runner.signup(&credentials).await;
            out.emit(Action::Signup, &state, account_tone(&state), account_lines)
        }
        Command::Signin { username, password } => {
            let credentials = Credentials { username, password };
            let state = runner.signin(&credentials).await;
            out.emit(Action::Signin, &state, account_tone(&state), account_lines)
        }
        Command::Delete { username } => {
            let state = runner.delete(&username).await;
            out.emit(Action::Delete, &state, account_tone(&state), account_lines)
        }
        Command::Chain => {
            let credentials = throwaway_credentials();
            println!("username: {}", credentials.username);
            for step in runner.chain(&credentials).await {
                out.emit(step.action, &step.state, account_tone(&step.state), account_lines)?;
            }
            Ok(())
        }
        Command::All => {
            let health = runner.health().await;
            out.emit(Action::Health, &health, health_tone(&health), health_lines)?;

            let jwt = runner.jwt().await;
            out.emit(Action::Jwt, &jwt, jwt_tone(&jwt), jwt_lines)?;

            let issued = jwt.result().and_then(|report| report.issued_jwt());
            let lifecycle = runner.lifecycle(issued).await;
            out.emit(Action::UserLifecycle, &lifecycle, lifecycle_tone(&lifecycle), lifecycle_lines)?;

            let message = runner.message().await;
            out.emit(Action::Message, &message, message_tone(&message), message_lines)
        }
    }
}
