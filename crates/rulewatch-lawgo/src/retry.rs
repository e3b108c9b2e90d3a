//! Retry loop, independent of the HTTP client so it can be driven in tests

use crate::classify::is_retryable;
use crate::config::BackoffPolicy;
use rand::Rng;
use rulewatch_core::TransportError;
use std::time::Duration;

/// Call `attempt_fn` up to `max_attempts` times, sleeping with `sleep`
/// between retryable failures. Returns the last error once attempts are
/// exhausted or a failure is not retryable.
pub fn with_retry<T>(
    max_attempts: u32,
    backoff: &BackoffPolicy,
    mut sleep: impl FnMut(Duration),
    mut attempt_fn: impl FnMut(u32) -> Result<T, TransportError>,
) -> Result<T, TransportError> {
    let max_attempts = max_attempts.max(1);
    let mut rng = rand::thread_rng();
    let mut attempt = 1;
    loop {
        match attempt_fn(attempt) {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts && is_retryable(&err) => {
                let delay = backoff.delay(attempt, rng.gen::<f64>());
                tracing::warn!(
                    attempt,
                    max_attempts,
                    kind = %err.kind,
                    status = ?err.status,
                    url = %err.url,
                    delay_ms = delay.as_millis() as u64,
                    "retrying request"
                );
                sleep(delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
