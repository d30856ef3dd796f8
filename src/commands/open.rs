//! Route navigation with guard evaluation.

use clap::Args;

use trackhub_auth::policy::{decide, requirement_for};
use trackhub_auth::{Decision, Destination, landing_for};
use trackhub_core::AppResult;

use super::Context;
use crate::output;

/// Arguments for `open`
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Destination path (e.g. /projects, /admin, /dashboard)
    pub route: String,
}

/// Evaluate the route guard for a destination and report the outcome.
///
/// Opening the generic dashboard additionally runs the role-based landing
/// dispatch, the way the original client forwarded users on arrival.
pub async fn execute(args: &OpenArgs, ctx: &Context) -> AppResult<()> {
    let destination: Destination = args.route.parse()?;

    let session = ctx.session.read().await;
    match decide(session.session(), &requirement_for(destination)) {
        Decision::Redirect(fallback) => {
            println!("→ redirected to {fallback}");
        }
        Decision::Allow if destination == Destination::Dashboard => {
            // Admins stay on the dashboard; everyone else is forwarded to
            // their role's landing view.
            let role = session.session().map(|s| s.role.as_str()).unwrap_or("");
            let landing = landing_for(role);
            if landing == Destination::Dashboard {
                output::print_success("opened /dashboard (admin view)");
            } else {
                println!("→ forwarded to {landing}");
            }
        }
        Decision::Allow => {
            output::print_success(&format!("opened {destination}"));
        }
    }
    Ok(())
}
