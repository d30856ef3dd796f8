//! Project CLI commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use trackhub_api::ProjectPayload;
use trackhub_auth::Destination;
use trackhub_core::AppResult;
use trackhub_core::types::{Project, ProjectStatus};

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for project commands
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project subcommand
    #[command(subcommand)]
    pub command: ProjectCommand,
}

/// Project subcommands
#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// List all projects
    List,
    /// Show one project
    Show {
        /// Project id
        id: String,
    },
    /// Create a project
    Create {
        /// Title
        #[arg(long)]
        title: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },
    /// Delete a project
    Delete {
        /// Project id
        id: String,
    },
}

/// Project display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ProjectRow {
    /// Project id
    id: String,
    /// Title
    title: String,
    /// Status
    status: String,
    /// Start date
    start: String,
    /// End date
    end: String,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            status: p.status.label().to_string(),
            start: p.start_date.to_string(),
            end: p.end_date.to_string(),
        }
    }
}

/// Execute project commands
pub async fn execute(args: &ProjectArgs, ctx: &Context, format: OutputFormat) -> AppResult<()> {
    ctx.guard(Destination::Projects).await?;

    match &args.command {
        ProjectCommand::List => {
            let projects = ctx.client.projects().await?;
            let rows: Vec<ProjectRow> = projects.iter().map(ProjectRow::from).collect();
            output::print_list(&rows, format);
        }
        ProjectCommand::Show { id } => {
            let project = ctx.client.project(id).await?;
            output::print_kv("title", &project.title);
            output::print_kv("status", project.status.label());
            output::print_kv("start", &project.start_date.to_string());
            output::print_kv("end", &project.end_date.to_string());
            if !project.description.is_empty() {
                output::print_kv("description", &project.description);
            }
        }
        ProjectCommand::Create {
            title,
            description,
            start,
            end,
        } => {
            let project = ctx
                .client
                .create_project(&ProjectPayload {
                    title: title.clone(),
                    description: description.clone(),
                    status: ProjectStatus::Planning,
                    start_date: *start,
                    end_date: *end,
                })
                .await?;
            output::print_success(&format!("Created project {} ({})", project.title, project.id));
        }
        ProjectCommand::Delete { id } => {
            ctx.client.delete_project(id).await?;
            output::print_success("Project deleted.");
        }
    }
    Ok(())
}
