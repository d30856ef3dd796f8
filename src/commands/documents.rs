//! Document CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use trackhub_auth::Destination;
use trackhub_core::types::Document;
use trackhub_core::{AppError, AppResult};

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for document commands
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Document subcommand
    #[command(subcommand)]
    pub command: DocumentCommand,
}

/// Document subcommands
#[derive(Debug, Subcommand)]
pub enum DocumentCommand {
    /// List documents, optionally for one project
    List {
        /// Filter by project id
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Upload a file against a project
    Upload {
        /// Project id
        #[arg(short, long)]
        project: String,
        /// File to upload
        file: PathBuf,
        /// MIME type of the file
        #[arg(long, default_value = "application/octet-stream")]
        mime: String,
    },
    /// Download a document
    Download {
        /// Document id
        id: String,
        /// Output file (defaults to the document's file name)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Delete a document
    Delete {
        /// Document id
        id: String,
    },
}

/// Document display row for table output
#[derive(Debug, Serialize, Tabled)]
struct DocumentRow {
    /// Document id
    id: String,
    /// File name
    name: String,
    /// Size
    size: String,
    /// Upload date
    uploaded: String,
    /// Owning project
    project: String,
}

impl From<&Document> for DocumentRow {
    fn from(d: &Document) -> Self {
        Self {
            id: d.id.clone(),
            name: d.file_name.clone(),
            size: d.human_size(),
            uploaded: d.upload_date.format("%Y-%m-%d %H:%M").to_string(),
            project: d.project_id.clone(),
        }
    }
}

/// Execute document commands
pub async fn execute(args: &DocumentArgs, ctx: &Context, format: OutputFormat) -> AppResult<()> {
    ctx.guard(Destination::Documents).await?;

    match &args.command {
        DocumentCommand::List { project } => {
            let documents = match project {
                Some(id) => ctx.client.documents_for_project(id).await?,
                None => ctx.client.documents().await?,
            };
            let rows: Vec<DocumentRow> = documents.iter().map(DocumentRow::from).collect();
            output::print_list(&rows, format);
        }
        DocumentCommand::Upload { project, file, mime } => {
            let contents = tokio::fs::read(file)
                .await
                .map_err(|e| AppError::storage(format!("Cannot read {}: {e}", file.display())))?;
            let file_name = file
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| AppError::validation("File has no usable name"))?;

            let document = ctx
                .client
                .upload_document(project, file_name, mime, contents)
                .await?;
            output::print_success(&format!(
                "Uploaded {} ({})",
                document.file_name,
                document.human_size()
            ));
        }
        DocumentCommand::Download { id, out } => {
            let document = ctx
                .client
                .documents()
                .await?
                .into_iter()
                .find(|d| d.id == *id)
                .ok_or_else(|| AppError::not_found("The requested item was not found."))?;

            let bytes = ctx.client.download_document(id).await?;
            let target = out
                .clone()
                .unwrap_or_else(|| PathBuf::from(&document.file_name));
            tokio::fs::write(&target, &bytes)
                .await
                .map_err(|e| AppError::storage(format!("Cannot write {}: {e}", target.display())))?;
            output::print_success(&format!("Saved {} ({} bytes)", target.display(), bytes.len()));
        }
        DocumentCommand::Delete { id } => {
            ctx.client.delete_document(id).await?;
            output::print_success("Document deleted.");
        }
    }
    Ok(())
}
