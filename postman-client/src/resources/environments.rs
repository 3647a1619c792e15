use postman_core::types::{
    CreateEnvironment, Environment, EnvironmentEnvelope, EnvironmentList,
};
use postman_core::{validate_id, QueryParams};
use serde_json::json;

use crate::client::Client;
use crate::error::Error;

impl Client {
    pub async fn get_environments(
        &self,
        workspace_id: Option<&str>,
    ) -> Result<Vec<Environment>, Error> {
        if let Some(workspace_id) = workspace_id {
            validate_id(workspace_id, "workspaceId")?;
        }
        let query = QueryParams::new().param("workspace", workspace_id);
        let list: EnvironmentList = self.get(&format!("/environments{query}")).await?;
        Ok(list.environments)
    }

    pub async fn get_environment(&self, environment_id: &str) -> Result<Environment, Error> {
        validate_id(environment_id, "environmentId")?;
        let env: EnvironmentEnvelope = self
            .get(&format!("/environments/{}", urlencoding::encode(environment_id)))
            .await?;
        Ok(env.environment)
    }

    pub async fn create_environment(
        &self,
        workspace_id: Option<&str>,
        input: &CreateEnvironment,
    ) -> Result<Environment, Error> {
        if let Some(workspace_id) = workspace_id {
            validate_id(workspace_id, "workspaceId")?;
        }
        let query = QueryParams::new().param("workspace", workspace_id);
        let env: EnvironmentEnvelope = self
            .post(
                &format!("/environments{query}"),
                &json!({ "environment": input }),
            )
            .await?;
        Ok(env.environment)
    }

    pub async fn update_environment(
        &self,
        environment_id: &str,
        input: &CreateEnvironment,
    ) -> Result<Environment, Error> {
        validate_id(environment_id, "environmentId")?;
        let env: EnvironmentEnvelope = self
            .put(
                &format!("/environments/{}", urlencoding::encode(environment_id)),
                &json!({ "environment": input }),
            )
            .await?;
        Ok(env.environment)
    }

    pub async fn delete_environment(
        &self,
        environment_id: &str,
    ) -> Result<serde_json::Value, Error> {
        validate_id(environment_id, "environmentId")?;
        self.delete(&format!(
            "/environments/{}",
            urlencoding::encode(environment_id)
        ))
        .await
    }
}
