use std::fmt;

/// Server-side task state. Anything other than `completed`/`failed` is
/// non-terminal; unrecognized values are preserved verbatim so a polling
/// caller can report the last observed status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Completed,
    Failed,
    Other(String),
}

impl TaskState {
    pub fn as_str(&self) -> &str {
        match self {
            TaskState::Pending => "pending",
            TaskState::Completed => "completed",
            TaskState::Failed => "failed",
            TaskState::Other(s) => s,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Failed)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for TaskState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for TaskState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "pending" => TaskState::Pending,
            "completed" => TaskState::Completed,
            "failed" => TaskState::Failed,
            _ => TaskState::Other(s),
        })
    }
}

/// Status payload returned by a task status-check endpoint.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TaskStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub status: TaskState,

    /// Server-reported failure reason, present when `status` is `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Payload for generating a collection from a spec.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerateCollection {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// Payload for generating a spec from a collection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerateSpec {
    pub name: String,

    /// Target definition flavor, e.g. `OPENAPI:3.0`.
    pub r#type: String,
}

/// Accepted async generation task: an id plus the status-check URL.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerationTask {
    #[serde(rename = "taskId")]
    pub task_id: String,

    pub url: String,
}
