use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Workspace operations
    Workspaces {
        #[command(subcommand)]
        action: WorkspacesAction,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Collection operations
    Collections {
        #[command(subcommand)]
        action: CollectionsAction,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Spec Hub operations
    Specs {
        #[command(subcommand)]
        action: SpecsAction,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run an asynchronous generation task and wait for it
    Generate {
        #[command(subcommand)]
        action: GenerateAction,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the authenticated user
    Whoami {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum WorkspacesAction {
    /// List workspaces visible to the API key
    List {
        #[arg(long)]
        r#type: Option<String>,
        #[arg(long)]
        created_by: Option<String>,
    },
    /// Show one workspace
    Get { workspace_id: String },
}

#[derive(Debug, Subcommand)]
pub enum CollectionsAction {
    /// List collections, optionally scoped to a workspace
    List {
        #[arg(long)]
        workspace: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Show one collection
    Get { collection_id: String },
}

#[derive(Debug, Subcommand)]
pub enum SpecsAction {
    /// List specs in a workspace
    List {
        #[arg(long)]
        workspace_id: Option<String>,
    },
    /// Show one spec
    Get { spec_id: String },
    /// Create a spec from a local OpenAPI definition (JSON or YAML)
    Create {
        file: PathBuf,
        #[arg(long)]
        workspace_id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "OPENAPI:3.0")]
        spec_type: String,
        #[command(flatten)]
        ids: IdStoreArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum GenerateAction {
    /// Generate a collection from a spec and wait for completion
    Collection {
        /// Spec id; falls back to the last id saved by `specs create`
        spec_id: Option<String>,
        #[arg(long)]
        name: String,
        #[command(flatten)]
        poll: PollArgs,
        #[command(flatten)]
        ids: IdStoreArgs,
    },
}
