use postman_core::types::{
    Collection, CollectionDetail, CollectionEnvelope, CollectionList, CollectionRef,
    CollectionRefEnvelope, GenerateSpec, GenerationTask, TaskStatus,
};
use postman_core::{validate_id, QueryParams};
use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::request::Method;
use crate::task::{poll_until_complete, PollConfig};

/// Optional filters for listing collections.
#[derive(Debug, Clone, Default)]
pub struct CollectionFilter {
    /// Restrict to one workspace.
    pub workspace: Option<String>,
    /// Exact name match.
    pub name: Option<String>,
}

impl CollectionFilter {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .param("workspace", self.workspace.as_deref())
            .param("name", self.name.as_deref())
    }
}

impl Client {
    pub async fn get_collections(
        &self,
        filter: &CollectionFilter,
    ) -> Result<Vec<Collection>, Error> {
        let list: CollectionList = self.get(&format!("/collections{}", filter.query())).await?;
        Ok(list.collections)
    }

    pub async fn get_collection(&self, collection_id: &str) -> Result<CollectionDetail, Error> {
        validate_id(collection_id, "collectionId")?;
        let env: CollectionEnvelope = self
            .get(&format!("/collections/{}", urlencoding::encode(collection_id)))
            .await?;
        Ok(env.collection)
    }

    /// `collection` is a full Collection Format v2.1 document; the SDK does
    /// not validate it.
    pub async fn create_collection(
        &self,
        workspace_id: Option<&str>,
        collection: &serde_json::Value,
    ) -> Result<CollectionRef, Error> {
        if let Some(workspace_id) = workspace_id {
            validate_id(workspace_id, "workspaceId")?;
        }
        let query = QueryParams::new().param("workspace", workspace_id);
        let env: CollectionRefEnvelope = self
            .post(
                &format!("/collections{query}"),
                &json!({ "collection": collection }),
            )
            .await?;
        Ok(env.collection)
    }

    pub async fn update_collection(
        &self,
        collection_id: &str,
        collection: &serde_json::Value,
    ) -> Result<CollectionRef, Error> {
        validate_id(collection_id, "collectionId")?;
        let env: CollectionRefEnvelope = self
            .put(
                &format!("/collections/{}", urlencoding::encode(collection_id)),
                &json!({ "collection": collection }),
            )
            .await?;
        Ok(env.collection)
    }

    pub async fn delete_collection(&self, collection_id: &str) -> Result<CollectionRef, Error> {
        validate_id(collection_id, "collectionId")?;
        let env: CollectionRefEnvelope = self
            .delete(&format!("/collections/{}", urlencoding::encode(collection_id)))
            .await?;
        Ok(env.collection)
    }

    /// Start asynchronous spec generation from a collection. The returned
    /// task carries the status-check id/URL; see
    /// [`Client::get_spec_generation_status`].
    pub async fn generate_spec(
        &self,
        collection_id: &str,
        input: &GenerateSpec,
    ) -> Result<GenerationTask, Error> {
        validate_id(collection_id, "collectionId")?;
        self.send(
            Method::Post,
            &format!("/collections/{}/generations", urlencoding::encode(collection_id)),
            Some(&serde_json::to_value(input)?),
            Some(("Prefer", "respond-async")),
        )
        .await
    }

    pub async fn get_spec_generation_status(
        &self,
        collection_id: &str,
        task_id: &str,
    ) -> Result<TaskStatus, Error> {
        validate_id(collection_id, "collectionId")?;
        validate_id(task_id, "taskId")?;
        self.get(&format!(
            "/collections/{}/generations/{}",
            urlencoding::encode(collection_id),
            urlencoding::encode(task_id)
        ))
        .await
    }

    /// Start spec generation and poll until it reaches a terminal status.
    pub async fn generate_spec_and_wait(
        &self,
        collection_id: &str,
        input: &GenerateSpec,
        poll: &PollConfig,
    ) -> Result<TaskStatus, Error> {
        let task = self.generate_spec(collection_id, input).await?;
        poll_until_complete(
            || self.get_spec_generation_status(collection_id, &task.task_id),
            poll,
        )
        .await
    }
}
