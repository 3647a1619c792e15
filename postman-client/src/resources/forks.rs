use postman_core::types::{
    CollectionRef, CollectionRefEnvelope, CreateFork, ForkList, MergeCollections,
};
use postman_core::{validate_id, validate_uid, QueryParams};

use crate::client::Client;
use crate::error::Error;

impl Client {
    /// Fork a collection into a workspace.
    pub async fn fork_collection(
        &self,
        collection_uid: &str,
        workspace_id: &str,
        input: &CreateFork,
    ) -> Result<CollectionRef, Error> {
        validate_uid(collection_uid, "collectionUid")?;
        validate_id(workspace_id, "workspaceId")?;
        let query = QueryParams::new().param("workspace", Some(workspace_id));
        let env: CollectionRefEnvelope = self
            .post(
                &format!(
                    "/collections/fork/{}{query}",
                    urlencoding::encode(collection_uid)
                ),
                &serde_json::to_value(input)?,
            )
            .await?;
        Ok(env.collection)
    }

    pub async fn get_collection_forks(&self, collection_uid: &str) -> Result<ForkList, Error> {
        validate_uid(collection_uid, "collectionUid")?;
        self.get(&format!(
            "/collections/{}/forks",
            urlencoding::encode(collection_uid)
        ))
        .await
    }

    /// Merge a forked collection back into its source.
    pub async fn merge_fork(&self, input: &MergeCollections) -> Result<CollectionRef, Error> {
        validate_uid(&input.source, "source")?;
        validate_uid(&input.destination, "destination")?;
        let env: CollectionRefEnvelope = self
            .post("/collections/merge", &serde_json::to_value(input)?)
            .await?;
        Ok(env.collection)
    }
}
