//! Sign-in, sign-up, sign-out, and session inspection commands.

use clap::Args;
use dialoguer::{Input, Password};

use trackhub_api::{LoginRequest, SignupRequest};
use trackhub_auth::landing_for;
use trackhub_core::{AppError, AppResult};

use super::Context;
use crate::output;

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(short, long)]
    pub username: Option<String>,
}

/// Arguments for `register`
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Username (prompted when omitted)
    #[arg(short, long)]
    pub username: Option<String>,
    /// Email address (prompted when omitted)
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Sign in, persist the issued credential, and report the landing view.
pub async fn login(args: &LoginArgs, ctx: &Context) -> AppResult<()> {
    let username = match &args.username {
        Some(u) => u.clone(),
        None => prompt_input("Username")?,
    };
    let password = prompt_password("Password")?;

    let session = ctx
        .client
        .login(&LoginRequest { username, password })
        .await?;

    output::print_success(&format!("Signed in as {}", session.user.username));
    output::print_kv("role", &session.role);
    output::print_kv("landing", landing_for(&session.role).path());
    Ok(())
}

/// Register a new account; signing in remains a separate step.
pub async fn register(args: &RegisterArgs, ctx: &Context) -> AppResult<()> {
    let username = match &args.username {
        Some(u) => u.clone(),
        None => prompt_input("Username")?,
    };
    let email = match &args.email {
        Some(e) => e.clone(),
        None => prompt_input("Email")?,
    };
    let password = prompt_password("Password")?;

    ctx.client
        .signup(&SignupRequest {
            username,
            email,
            password,
            role: None,
        })
        .await?;

    output::print_success("Registration successful! Please sign in.");
    Ok(())
}

/// Sign out. Idempotent: signing out while signed out is fine.
pub async fn logout(ctx: &Context) -> AppResult<()> {
    ctx.client.logout().await;
    output::print_success("Signed out.");
    Ok(())
}

/// Print the resolved session, if any.
pub async fn whoami(ctx: &Context) -> AppResult<()> {
    let manager = ctx.session.read().await;
    match manager.session() {
        Some(session) => {
            output::print_kv("user", &session.user.username);
            if !session.user.email.is_empty() {
                output::print_kv("email", &session.user.email);
            }
            output::print_kv("role", &session.role);
            output::print_kv("admin", if session.is_admin() { "yes" } else { "no" });
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

fn prompt_input(label: &str) -> AppResult<String> {
    Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))
}

fn prompt_password(label: &str) -> AppResult<String> {
    Password::new()
        .with_prompt(label)
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))
}
