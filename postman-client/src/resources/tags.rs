use postman_core::types::{EntityList, Tag, TagList, UpdateTags};
use postman_core::{validate_id, validate_uid, QueryParams};

use crate::client::Client;
use crate::error::Error;

impl Client {
    pub async fn get_collection_tags(&self, collection_uid: &str) -> Result<Vec<Tag>, Error> {
        validate_uid(collection_uid, "collectionUid")?;
        let list: TagList = self
            .get(&format!(
                "/collections/{}/tags",
                urlencoding::encode(collection_uid)
            ))
            .await?;
        Ok(list.tags)
    }

    /// Replace the collection's tag set.
    pub async fn update_collection_tags(
        &self,
        collection_uid: &str,
        input: &UpdateTags,
    ) -> Result<Vec<Tag>, Error> {
        validate_uid(collection_uid, "collectionUid")?;
        let list: TagList = self
            .put(
                &format!("/collections/{}/tags", urlencoding::encode(collection_uid)),
                &serde_json::to_value(input)?,
            )
            .await?;
        Ok(list.tags)
    }

    /// Elements carrying a tag, paged with `limit`/`cursor`.
    pub async fn get_tagged_entities(
        &self,
        slug: &str,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<EntityList, Error> {
        validate_id(slug, "slug")?;
        let query = QueryParams::new()
            .param("limit", limit)
            .param("cursor", cursor);
        self.get(&format!(
            "/tags/{}/entities{query}",
            urlencoding::encode(slug)
        ))
        .await
    }
}
