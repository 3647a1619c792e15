use postman_core::error::ValidationError;
use postman_core::{split_uid, validate_id, validate_uid};

const UUID_ID: &str = "e8a013f5-3366-4a05-9e29-0c24a0c0b48a";
const UID: &str = "12345678-e8a013f5-3366-4a05-9e29-0c24a0c0b48a";

#[test]
fn plain_ids_pass() {
    assert!(validate_id(UUID_ID, "collectionId").is_ok());
    assert!(validate_id("46814", "commentId").is_ok());
    assert!(validate_id("task-abc123", "taskId").is_ok());
}

#[test]
fn empty_id_is_missing_and_names_the_param() {
    let err = validate_id("", "workspaceId").unwrap_err();
    assert_eq!(
        err,
        ValidationError::Missing {
            param: "workspaceId".to_string()
        }
    );
    assert!(err.to_string().contains("workspaceId"));
}

#[test]
fn uid_passed_where_id_expected_is_rejected() {
    let err = validate_id(UID, "collectionId").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidId { .. }));
    assert!(err.to_string().contains("collectionId"));
}

#[test]
fn id_with_invalid_characters_is_rejected() {
    assert!(validate_id("my id", "workspaceId").is_err());
    assert!(validate_id("../etc", "workspaceId").is_err());
}

#[test]
fn uids_pass() {
    assert!(validate_uid(UID, "collectionUid").is_ok());
}

#[test]
fn bare_id_passed_where_uid_expected_is_rejected() {
    let err = validate_uid(UUID_ID, "collectionUid").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidUid { .. }));
    assert!(err.to_string().contains("collectionUid"));
}

#[test]
fn empty_uid_is_missing() {
    let err = validate_uid("", "collectionUid").unwrap_err();
    assert!(matches!(err, ValidationError::Missing { .. }));
}

#[test]
fn split_uid_returns_owner_and_resource() {
    assert_eq!(split_uid(UID), Some(("12345678", UUID_ID)));
    assert_eq!(split_uid(UUID_ID), None);
    assert_eq!(split_uid("not a uid"), None);
}
