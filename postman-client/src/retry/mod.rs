//! Retry with exponential backoff.

mod config;
mod headers;

pub use config::RetryPolicy;
pub use headers::parse_retry_after;

use std::future::Future;
use std::time::Duration;

use crate::error::Error;

/// Retry `operation` until it succeeds, `should_retry` vetoes, or the
/// attempt budget runs out; the last error propagates unchanged.
///
/// One attempt is in flight at a time; the delay between attempts is a
/// cooperative suspension. The delay follows
/// [`RetryPolicy::delay_for`], except that a server-supplied
/// `Retry-After` carried by the error wins (clamped to `max_delay`).
/// `should_retry` is consulted on every failure, the final one included;
/// `on_retry` observes `(attempt, error, delay)` before each suspension.
pub async fn retry_with_backoff<T, F, Fut, S, O>(
    mut operation: F,
    policy: &RetryPolicy,
    mut should_retry: S,
    mut on_retry: O,
) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
    S: FnMut(&Error) -> bool,
    O: FnMut(u32, &Error, Duration),
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !should_retry(&err) || attempt >= max_attempts {
            return Err(err);
        }
        let delay = match err.retry_after() {
            Some(hint) => hint.min(policy.max_delay),
            None => policy.delay_for(attempt),
        };
        on_retry(attempt, &err, delay);
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

/// Predicate treating every failure as retryable.
pub fn retry_any(_err: &Error) -> bool {
    true
}

/// Predicate for transient failures: no status code, 429, or 5xx.
pub fn retry_transient(err: &Error) -> bool {
    err.is_transient()
}

/// Default retry observer.
pub fn log_retry(attempt: u32, err: &Error, delay: Duration) {
    tracing::warn!(
        attempt,
        delay_ms = delay.as_millis() as u64,
        error = %err,
        "retrying after failure"
    );
}
