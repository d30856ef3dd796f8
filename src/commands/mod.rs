//! CLI command definitions and dispatch.

pub mod auth;
pub mod documents;
pub mod milestones;
pub mod open;
pub mod projects;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::sync::RwLock;

use trackhub_api::ApiClient;
use trackhub_auth::policy::{decide, requirement_for};
use trackhub_auth::{Decision, Destination, FileCredentialStore, SessionManager};
use trackhub_core::config::AppConfig;
use trackhub_core::{AppError, AppResult};

use crate::output::OutputFormat;

/// TrackHub — terminal client for the research project tracker
#[derive(Debug, Parser)]
#[command(name = "trackhub", version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in to the tracker service
    Login(auth::LoginArgs),
    /// Register a new account
    Register(auth::RegisterArgs),
    /// Sign out and discard the cached credential
    Logout,
    /// Show the current session
    Whoami,
    /// Navigate to a destination, running its route guard
    Open(open::OpenArgs),
    /// Project management
    Projects(projects::ProjectArgs),
    /// Milestone overview
    Milestones(milestones::MilestoneArgs),
    /// Document listing and transfer
    Documents(documents::DocumentArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let ctx = Context::new(config)?;
        match &self.command {
            Commands::Login(args) => auth::login(args, &ctx).await,
            Commands::Register(args) => auth::register(args, &ctx).await,
            Commands::Logout => auth::logout(&ctx).await,
            Commands::Whoami => auth::whoami(&ctx).await,
            Commands::Open(args) => open::execute(args, &ctx).await,
            Commands::Projects(args) => projects::execute(args, &ctx, self.format).await,
            Commands::Milestones(args) => milestones::execute(args, &ctx, self.format).await,
            Commands::Documents(args) => documents::execute(args, &ctx, self.format).await,
        }
    }
}

/// Shared per-invocation state: the restored session and the API client.
pub struct Context {
    /// Shared session state; restored from the credential cache on startup.
    pub session: Arc<RwLock<SessionManager>>,
    /// Client for the remote tracker service.
    pub client: ApiClient,
}

impl Context {
    /// Restores the session from the durable credential cache and wires
    /// up the API client around it.
    fn new(config: &AppConfig) -> AppResult<Self> {
        let store = Arc::new(FileCredentialStore::new(&config.auth.credential_file));
        let mut manager = SessionManager::new(store);
        manager.initialize();

        let session = Arc::new(RwLock::new(manager));
        let client = ApiClient::new(&config.api, session.clone())?;
        Ok(Self { session, client })
    }

    /// Runs the route guard for a destination against the current session.
    ///
    /// A redirect to the sign-in form surfaces as an authentication error;
    /// a redirect elsewhere surfaces as an authorization error naming the
    /// fallback destination.
    pub async fn guard(&self, destination: Destination) -> AppResult<()> {
        let session = self.session.read().await;
        match decide(session.session(), &requirement_for(destination)) {
            Decision::Allow => Ok(()),
            Decision::Redirect(Destination::Login) => Err(AppError::authentication(
                "Please sign in first (trackhub login).",
            )),
            Decision::Redirect(fallback) => Err(AppError::authorization(format!(
                "Your role does not grant access to {destination}; redirected to {fallback}."
            ))),
        }
    }
}
