//! Awaiting asynchronous server-side tasks.

use std::future::Future;
use std::time::Duration;

use postman_core::types::{TaskState, TaskStatus};

use crate::error::Error;
use crate::retry::{log_retry, retry_transient, retry_with_backoff, RetryPolicy};

/// Options for [`poll_until_complete`].
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub poll_interval: Duration,
    /// Total wall-clock budget, enforced between attempts.
    pub timeout: Duration,
    /// Used in error messages and logs.
    pub task_name: String,
    /// Retry budget for each individual status check.
    pub max_retries: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            timeout: Duration::from_secs(60),
            task_name: "Task".to_string(),
            max_retries: 3,
        }
    }
}

impl PollConfig {
    pub fn named(task_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            ..Self::default()
        }
    }
}

/// Poll `check_status` until the task reports a terminal status.
///
/// Checks are strictly sequential; each one is wrapped in
/// [`retry_with_backoff`] with the transient-failure predicate so a flaky
/// network or a 429/5xx does not abort the whole wait. `completed`
/// returns the status payload; `failed` raises [`Error::TaskFailed`] with
/// the server-reported reason. Any other status sleeps `poll_interval`
/// and loops until the time budget ([`Error::TaskTimeout`]) or the
/// attempt budget ([`Error::AttemptsExhausted`]) runs out. There is no
/// external cancellation; the budgets are the only way the loop ends
/// without a terminal status.
pub async fn poll_until_complete<F, Fut>(
    mut check_status: F,
    config: &PollConfig,
) -> Result<TaskStatus, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<TaskStatus, Error>>,
{
    let interval_ms = config.poll_interval.as_millis().max(1);
    let max_attempts = config.timeout.as_millis().div_ceil(interval_ms).max(1) as u32;
    let check_policy = RetryPolicy {
        max_attempts: config.max_retries.max(1),
        ..RetryPolicy::default()
    };

    let started = tokio::time::Instant::now();
    let mut last_status = TaskState::Pending;

    for attempt in 1..=max_attempts {
        let status = retry_with_backoff(&mut check_status, &check_policy, retry_transient, log_retry)
            .await?;

        match &status.status {
            TaskState::Completed => {
                tracing::debug!(task = %config.task_name, attempt, "task completed");
                return Ok(status);
            }
            TaskState::Failed => {
                let reason = status
                    .error
                    .clone()
                    .unwrap_or_else(|| "Unknown error".to_string());
                return Err(Error::TaskFailed {
                    task: config.task_name.clone(),
                    reason,
                });
            }
            other => {
                last_status = other.clone();
                let elapsed = started.elapsed();
                if elapsed >= config.timeout {
                    return Err(Error::TaskTimeout {
                        task: config.task_name.clone(),
                        elapsed_ms: elapsed.as_millis() as u64,
                        last_status: last_status.to_string(),
                    });
                }
                tracing::debug!(
                    task = %config.task_name,
                    attempt,
                    status = %last_status,
                    "task still running"
                );
                tokio::time::sleep(config.poll_interval).await;
            }
        }
    }

    Err(Error::AttemptsExhausted {
        task: config.task_name.clone(),
        attempts: max_attempts,
        last_status: last_status.to_string(),
    })
}
