use postman_core::error::ValidationError;
use postman_core::types::{
    CreateSpec, GenerateCollection, GenerationTask, Spec, SpecFile, SpecFileInput, SpecFileList,
    SpecList, TaskStatus,
};
use postman_core::{validate_id, QueryParams};
use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::request::Method;
use crate::task::{poll_until_complete, PollConfig};

/// Optional filters for listing specs.
#[derive(Debug, Clone, Default)]
pub struct SpecFilter {
    pub workspace_id: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
}

impl SpecFilter {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .param("workspaceId", self.workspace_id.as_deref())
            .param("cursor", self.cursor.as_deref())
            .param("limit", self.limit)
    }
}

fn require_file_path(file_path: &str) -> Result<(), Error> {
    if file_path.is_empty() {
        return Err(ValidationError::Missing {
            param: "filePath".to_string(),
        }
        .into());
    }
    Ok(())
}

impl Client {
    pub async fn get_specs(&self, filter: &SpecFilter) -> Result<SpecList, Error> {
        if let Some(workspace_id) = filter.workspace_id.as_deref() {
            validate_id(workspace_id, "workspaceId")?;
        }
        self.get(&format!("/specs{}", filter.query())).await
    }

    pub async fn get_spec(&self, spec_id: &str) -> Result<Spec, Error> {
        validate_id(spec_id, "specId")?;
        self.get(&format!("/specs/{}", urlencoding::encode(spec_id)))
            .await
    }

    pub async fn create_spec(&self, workspace_id: &str, input: &CreateSpec) -> Result<Spec, Error> {
        validate_id(workspace_id, "workspaceId")?;
        let query = QueryParams::new().param("workspaceId", Some(workspace_id));
        self.post(&format!("/specs{query}"), &serde_json::to_value(input)?)
            .await
    }

    pub async fn update_spec(&self, spec_id: &str, name: &str) -> Result<Spec, Error> {
        validate_id(spec_id, "specId")?;
        self.patch(
            &format!("/specs/{}", urlencoding::encode(spec_id)),
            &json!({ "name": name }),
        )
        .await
    }

    pub async fn delete_spec(&self, spec_id: &str) -> Result<(), Error> {
        validate_id(spec_id, "specId")?;
        self.delete(&format!("/specs/{}", urlencoding::encode(spec_id)))
            .await
    }

    pub async fn get_spec_files(&self, spec_id: &str) -> Result<Vec<SpecFile>, Error> {
        validate_id(spec_id, "specId")?;
        let list: SpecFileList = self
            .get(&format!("/specs/{}/files", urlencoding::encode(spec_id)))
            .await?;
        Ok(list.files)
    }

    pub async fn get_spec_file(&self, spec_id: &str, file_path: &str) -> Result<SpecFile, Error> {
        validate_id(spec_id, "specId")?;
        require_file_path(file_path)?;
        self.get(&format!(
            "/specs/{}/files/{}",
            urlencoding::encode(spec_id),
            urlencoding::encode(file_path)
        ))
        .await
    }

    pub async fn create_spec_file(
        &self,
        spec_id: &str,
        input: &SpecFileInput,
    ) -> Result<SpecFile, Error> {
        validate_id(spec_id, "specId")?;
        self.post(
            &format!("/specs/{}/files", urlencoding::encode(spec_id)),
            &serde_json::to_value(input)?,
        )
        .await
    }

    pub async fn update_spec_file(
        &self,
        spec_id: &str,
        file_path: &str,
        content: &str,
    ) -> Result<SpecFile, Error> {
        validate_id(spec_id, "specId")?;
        require_file_path(file_path)?;
        self.put(
            &format!(
                "/specs/{}/files/{}",
                urlencoding::encode(spec_id),
                urlencoding::encode(file_path)
            ),
            &json!({ "content": content }),
        )
        .await
    }

    /// Start asynchronous collection generation from a spec. The returned
    /// task carries the status-check id/URL; see
    /// [`Client::get_generation_status`].
    pub async fn generate_collection(
        &self,
        spec_id: &str,
        input: &GenerateCollection,
    ) -> Result<GenerationTask, Error> {
        validate_id(spec_id, "specId")?;
        self.send(
            Method::Post,
            &format!("/specs/{}/generations", urlencoding::encode(spec_id)),
            Some(&serde_json::to_value(input)?),
            Some(("Prefer", "respond-async")),
        )
        .await
    }

    pub async fn get_generation_status(
        &self,
        spec_id: &str,
        task_id: &str,
    ) -> Result<TaskStatus, Error> {
        validate_id(spec_id, "specId")?;
        validate_id(task_id, "taskId")?;
        self.get(&format!(
            "/specs/{}/generations/{}",
            urlencoding::encode(spec_id),
            urlencoding::encode(task_id)
        ))
        .await
    }

    /// Start collection generation and poll until it reaches a terminal
    /// status: the transformation workflow in one call.
    pub async fn generate_collection_and_wait(
        &self,
        spec_id: &str,
        input: &GenerateCollection,
        poll: &PollConfig,
    ) -> Result<TaskStatus, Error> {
        let task = self.generate_collection(spec_id, input).await?;
        poll_until_complete(
            || self.get_generation_status(spec_id, &task.task_id),
            poll,
        )
        .await
    }
}
