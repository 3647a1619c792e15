use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use postman_client::{
    Client, Config, Error, HttpRequestParts, HttpResponseParts, HttpTransport, Method, PollConfig,
    TransportError,
};
use postman_core::types::{
    CreateComment, CreateWorkspace, GenerateCollection, TaskState, WorkspaceType,
};
use postman_client::resources::WorkspaceFilter;

// Mock transport recording every request and replaying queued responses.
struct MockTransport {
    requests: Mutex<Vec<HttpRequestParts>>,
    responses: Mutex<VecDeque<HttpResponseParts>>,
}

impl MockTransport {
    fn with_responses(responses: Vec<HttpResponseParts>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        })
    }

    fn requests(&self) -> Vec<HttpRequestParts> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(
        &self,
        req: HttpRequestParts,
        _timeout: Duration,
        _max_response_bytes: usize,
    ) -> Result<HttpResponseParts, TransportError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no queued response".to_string()))
    }
}

fn json_response(status: u16, body: serde_json::Value) -> HttpResponseParts {
    HttpResponseParts {
        status,
        headers: BTreeMap::new(),
        body: serde_json::to_vec(&body).unwrap(),
    }
}

fn empty_response(status: u16) -> HttpResponseParts {
    HttpResponseParts {
        status,
        headers: BTreeMap::new(),
        body: Vec::new(),
    }
}

fn client(transport: Arc<MockTransport>) -> Client {
    Client::with_transport(Config::new("PMAK-test"), transport)
}

const UID: &str = "12345678-e8a013f5-3366-4a05-9e29-0c24a0c0b48a";

#[tokio::test]
async fn list_workspaces_builds_filtered_url_and_auth_headers() {
    let transport = MockTransport::with_responses(vec![json_response(
        200,
        json!({ "workspaces": [{ "id": "w1", "name": "Ops", "type": "team" }] }),
    )]);
    let client = client(transport.clone());

    let filter = WorkspaceFilter {
        r#type: Some(WorkspaceType::Team),
        created_by: None,
    };
    let workspaces = client.get_workspaces(&filter).await.unwrap();
    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0].id, "w1");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(
        requests[0].url.as_str(),
        "https://api.postman.com/workspaces?type=team"
    );
    assert_eq!(
        requests[0].headers.get("X-Api-Key").map(String::as_str),
        Some("PMAK-test")
    );
    assert_eq!(
        requests[0].headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn validation_failure_reaches_no_transport_call() {
    let transport = MockTransport::with_responses(vec![]);
    let client = client(transport.clone());

    let err = client.get_workspace("").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("workspaceId"));

    // A uid where a plain id is expected fails the same way.
    let err = client.get_collection(UID).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    // And a bare id where a uid is expected.
    let err = client
        .get_collection_comments("e8a013f5-3366-4a05-9e29-0c24a0c0b48a")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn create_workspace_wraps_payload_in_envelope() {
    let transport = MockTransport::with_responses(vec![json_response(
        200,
        json!({ "workspace": { "id": "w9", "name": "svc", "type": "team" } }),
    )]);
    let client = client(transport.clone());

    let created = client
        .create_workspace(&CreateWorkspace {
            name: "svc".to_string(),
            r#type: WorkspaceType::Team,
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, "w9");

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({ "workspace": { "name": "svc", "type": "team" } }));
}

#[tokio::test]
async fn get_workspace_hits_the_resource_path() {
    let id = uuid::Uuid::new_v4().to_string();
    let transport = MockTransport::with_responses(vec![json_response(
        200,
        json!({ "workspace": { "id": id.clone(), "name": "Ops" } }),
    )]);
    let client = client(transport.clone());

    let ws = client.get_workspace(&id).await.unwrap();
    assert_eq!(ws.id, id);
    assert_eq!(
        transport.requests()[0].url.path(),
        format!("/workspaces/{id}")
    );
}

#[tokio::test]
async fn api_error_body_maps_to_api_error_with_message() {
    let transport = MockTransport::with_responses(vec![json_response(
        404,
        json!({ "error": { "name": "instanceNotFoundError", "message": "collection not found" } }),
    )]);
    let client = client(transport.clone());

    let err = client
        .get_collection("e8a013f5-3366-4a05-9e29-0c24a0c0b48a")
        .await
        .unwrap_err();
    match &err {
        Error::Api {
            status, message, ..
        } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "collection not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_collection_sends_prefer_header() {
    let transport = MockTransport::with_responses(vec![json_response(
        202,
        json!({ "taskId": "task-1", "url": "/specs/s1/generations/task-1" }),
    )]);
    let client = client(transport.clone());

    let task = client
        .generate_collection(
            "e8a013f5-3366-4a05-9e29-0c24a0c0b48a",
            &GenerateCollection {
                name: "Generated".to_string(),
                options: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(task.task_id, "task-1");

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(
        requests[0].headers.get("Prefer").map(String::as_str),
        Some("respond-async")
    );
    assert!(requests[0]
        .url
        .path()
        .ends_with("/generations"));
}

#[tokio::test]
async fn generate_and_wait_polls_the_task_to_completion() {
    let spec_id = "e8a013f5-3366-4a05-9e29-0c24a0c0b48a";
    let transport = MockTransport::with_responses(vec![
        json_response(
            202,
            json!({ "taskId": "task-7", "url": format!("/specs/{spec_id}/generations/task-7") }),
        ),
        json_response(200, json!({ "id": "task-7", "status": "completed" })),
    ]);
    let client = client(transport.clone());

    let done = client
        .generate_collection_and_wait(
            spec_id,
            &GenerateCollection {
                name: "Generated".to_string(),
                options: None,
            },
            &PollConfig::named("Collection generation"),
        )
        .await
        .unwrap();
    assert_eq!(done.status, TaskState::Completed);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, Method::Get);
    assert_eq!(
        requests[1].url.path(),
        format!("/specs/{spec_id}/generations/task-7")
    );
}

#[tokio::test]
async fn delete_spec_accepts_an_empty_body() {
    let transport = MockTransport::with_responses(vec![empty_response(204)]);
    let client = client(transport.clone());
    client
        .delete_spec("e8a013f5-3366-4a05-9e29-0c24a0c0b48a")
        .await
        .unwrap();
    assert_eq!(transport.requests()[0].method, Method::Delete);
}

#[tokio::test]
async fn collection_comments_use_the_uid_path() {
    let transport = MockTransport::with_responses(vec![json_response(
        200,
        json!({ "data": { "id": 46814, "body": "Nice API" } }),
    )]);
    let client = client(transport.clone());

    let comment = client
        .create_collection_comment(
            UID,
            &CreateComment {
                body: "Nice API".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(comment.id, 46814);
    assert_eq!(
        transport.requests()[0].url.path(),
        format!("/collections/{UID}/comments")
    );
}

#[tokio::test]
async fn transport_errors_propagate_unchanged() {
    let transport = MockTransport::with_responses(vec![]);
    let client = client(transport.clone());
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::Other(_))));
}

#[tokio::test]
async fn me_decodes_user_and_operations() {
    let transport = MockTransport::with_responses(vec![json_response(
        200,
        json!({
            "user": { "id": 12345678, "username": "taylor", "fullName": "Taylor Lee" },
            "operations": [{ "name": "mock_usage", "limit": 1000, "usage": 12 }]
        }),
    )]);
    let client = client(transport.clone());

    let me = client.me().await.unwrap();
    assert_eq!(me.user.id, 12345678);
    assert_eq!(me.operations.len(), 1);
    assert_eq!(transport.requests()[0].url.path(), "/me");
}
