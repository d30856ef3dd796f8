//! Milestone CLI commands.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use trackhub_auth::Destination;
use trackhub_core::AppResult;
use trackhub_core::types::Milestone;

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for milestone commands
#[derive(Debug, Args)]
pub struct MilestoneArgs {
    /// Milestone subcommand
    #[command(subcommand)]
    pub command: MilestoneCommand,
}

/// Milestone subcommands
#[derive(Debug, Subcommand)]
pub enum MilestoneCommand {
    /// List milestones, optionally for one project
    List {
        /// Filter by project id
        #[arg(short, long)]
        project: Option<String>,
    },
}

/// Milestone display row for table output
#[derive(Debug, Serialize, Tabled)]
struct MilestoneRow {
    /// Milestone id
    id: String,
    /// Title
    title: String,
    /// Status
    status: String,
    /// Due date
    due: String,
    /// Days remaining (negative when overdue)
    days_left: i64,
}

impl From<&Milestone> for MilestoneRow {
    fn from(m: &Milestone) -> Self {
        let today = Utc::now().date_naive();
        Self {
            id: m.id.clone(),
            title: m.title.clone(),
            status: m.status.label().to_string(),
            due: m.due_date.to_string(),
            days_left: m.days_until_due(today),
        }
    }
}

/// Execute milestone commands
pub async fn execute(args: &MilestoneArgs, ctx: &Context, format: OutputFormat) -> AppResult<()> {
    ctx.guard(Destination::Milestones).await?;

    match &args.command {
        MilestoneCommand::List { project } => {
            let milestones = match project {
                Some(id) => ctx.client.milestones_for_project(id).await?,
                None => ctx.client.milestones().await?,
            };
            let rows: Vec<MilestoneRow> = milestones.iter().map(MilestoneRow::from).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
