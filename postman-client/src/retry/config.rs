use std::time::Duration;

/// Backoff policy for retrying a failed operation.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, the first included; 1 means no retry.
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(10),
            factor: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Delay after failed attempt `attempt` (1-based):
    /// `min(initial_delay * factor^(attempt - 1), max_delay)`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1) as i32;
        let raw = (self.initial_delay.as_millis() as f64) * self.factor.powi(exp);
        let capped = raw.min(self.max_delay.as_millis() as f64).max(0.0);
        Duration::from_millis(capped as u64)
    }
}
