use postman_core::types::{Comment, CommentList, CommentResponse, CreateComment};
use postman_core::validate_uid;

use crate::client::Client;
use crate::error::Error;

impl Client {
    pub async fn get_collection_comments(
        &self,
        collection_uid: &str,
    ) -> Result<Vec<Comment>, Error> {
        validate_uid(collection_uid, "collectionUid")?;
        let list: CommentList = self
            .get(&format!(
                "/collections/{}/comments",
                urlencoding::encode(collection_uid)
            ))
            .await?;
        Ok(list.data)
    }

    pub async fn create_collection_comment(
        &self,
        collection_uid: &str,
        input: &CreateComment,
    ) -> Result<Comment, Error> {
        validate_uid(collection_uid, "collectionUid")?;
        let resp: CommentResponse = self
            .post(
                &format!(
                    "/collections/{}/comments",
                    urlencoding::encode(collection_uid)
                ),
                &serde_json::to_value(input)?,
            )
            .await?;
        Ok(resp.data)
    }

    pub async fn update_collection_comment(
        &self,
        collection_uid: &str,
        comment_id: u64,
        input: &CreateComment,
    ) -> Result<Comment, Error> {
        validate_uid(collection_uid, "collectionUid")?;
        let resp: CommentResponse = self
            .put(
                &format!(
                    "/collections/{}/comments/{comment_id}",
                    urlencoding::encode(collection_uid)
                ),
                &serde_json::to_value(input)?,
            )
            .await?;
        Ok(resp.data)
    }

    pub async fn delete_collection_comment(
        &self,
        collection_uid: &str,
        comment_id: u64,
    ) -> Result<(), Error> {
        validate_uid(collection_uid, "collectionUid")?;
        self.delete(&format!(
            "/collections/{}/comments/{comment_id}",
            urlencoding::encode(collection_uid)
        ))
        .await
    }
}
