use postman_core::types::{
    CreateWorkspace, Workspace, WorkspaceEnvelope, WorkspaceList, WorkspaceType,
};
use postman_core::{validate_id, QueryParams};
use serde_json::json;

use crate::client::Client;
use crate::error::Error;

/// Optional filters for listing workspaces.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceFilter {
    pub r#type: Option<WorkspaceType>,
    pub created_by: Option<String>,
}

impl WorkspaceFilter {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .param("type", self.r#type.map(|t| t.as_str()))
            .param("createdBy", self.created_by.as_deref())
    }
}

impl Client {
    pub async fn get_workspaces(&self, filter: &WorkspaceFilter) -> Result<Vec<Workspace>, Error> {
        let list: WorkspaceList = self.get(&format!("/workspaces{}", filter.query())).await?;
        Ok(list.workspaces)
    }

    pub async fn get_workspace(&self, workspace_id: &str) -> Result<Workspace, Error> {
        validate_id(workspace_id, "workspaceId")?;
        let env: WorkspaceEnvelope = self
            .get(&format!("/workspaces/{}", urlencoding::encode(workspace_id)))
            .await?;
        Ok(env.workspace)
    }

    pub async fn create_workspace(&self, input: &CreateWorkspace) -> Result<Workspace, Error> {
        let env: WorkspaceEnvelope = self
            .post("/workspaces", &json!({ "workspace": input }))
            .await?;
        Ok(env.workspace)
    }

    pub async fn update_workspace(
        &self,
        workspace_id: &str,
        input: &CreateWorkspace,
    ) -> Result<Workspace, Error> {
        validate_id(workspace_id, "workspaceId")?;
        let env: WorkspaceEnvelope = self
            .put(
                &format!("/workspaces/{}", urlencoding::encode(workspace_id)),
                &json!({ "workspace": input }),
            )
            .await?;
        Ok(env.workspace)
    }

    /// Returns the deleted workspace reference as reported by the API.
    pub async fn delete_workspace(&self, workspace_id: &str) -> Result<serde_json::Value, Error> {
        validate_id(workspace_id, "workspaceId")?;
        self.delete(&format!("/workspaces/{}", urlencoding::encode(workspace_id)))
            .await
    }
}
