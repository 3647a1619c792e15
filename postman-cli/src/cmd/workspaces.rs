use postman_client::resources::WorkspaceFilter;
use postman_core::types::WorkspaceType;

use crate::commands::WorkspacesAction;
use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::OutputArgs;

pub async fn workspaces_cmd(action: WorkspacesAction, output: OutputArgs) -> i32 {
    let client = match super::client_from_env(output.format, output.quiet) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match action {
        WorkspacesAction::List { r#type, created_by } => {
            let ws_type = match r#type.as_deref().map(parse_type).transpose() {
                Ok(t) => t,
                Err(e) => {
                    print_error(output.format, output.quiet, &e);
                    return exit_codes::VALIDATION_FAILED;
                }
            };
            let filter = WorkspaceFilter {
                r#type: ws_type,
                created_by,
            };
            match client.get_workspaces(&filter).await {
                Ok(workspaces) => {
                    print_result(output.format, output.quiet, &workspaces);
                    exit_codes::SUCCESS
                }
                Err(e) => {
                    print_error(output.format, output.quiet, &e.to_string());
                    exit_codes::API_ERROR
                }
            }
        }
        WorkspacesAction::Get { workspace_id } => {
            match client.get_workspace(&workspace_id).await {
                Ok(workspace) => {
                    print_result(output.format, output.quiet, &workspace);
                    exit_codes::SUCCESS
                }
                Err(e) => {
                    print_error(output.format, output.quiet, &e.to_string());
                    exit_codes::API_ERROR
                }
            }
        }
    }
}

fn parse_type(s: &str) -> Result<WorkspaceType, String> {
    match s {
        "personal" => Ok(WorkspaceType::Personal),
        "team" => Ok(WorkspaceType::Team),
        "private" => Ok(WorkspaceType::Private),
        "public" => Ok(WorkspaceType::Public),
        "partner" => Ok(WorkspaceType::Partner),
        other => Err(format!("unknown workspace type: {other}")),
    }
}
