use crate::error::Result;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Randomized exponential backoff, bounded in delay and attempt count.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            max_attempts: 6,
        }
    }
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Upper bound for the delay after the given failed attempt (1-based).
    /// Doubles from `base_delay` and saturates at `max_delay`.
    pub fn backoff_ceiling(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(32);
        let ceiling = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(exp));
        ceiling.min(self.max_delay)
    }

    /// Actual delay drawn uniformly below the ceiling, so concurrent callers
    /// retrying the same endpoint do not thunder in lockstep.
    fn next_delay(&self, attempt: u32) -> Duration {
        let ceiling = self.backoff_ceiling(attempt);
        let jitter: f64 = rand::thread_rng().gen_range(0.0..=1.0);
        ceiling.mul_f64(jitter)
    }
}

/// Runs `f` up to `policy.max_attempts` times, sleeping a jittered exponential
/// delay between attempts. Every failure is logged as it happens, not only
/// after the policy is exhausted. The last error is returned unchanged.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    operation: &str,
    mut f: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 1;
    loop {
        match f().await {
            Ok(value) => {
                if attempt > 1 {
                    log::info!(
                        "✅ {} succeeded on attempt {}/{}",
                        operation,
                        attempt,
                        policy.max_attempts
                    );
                }
                return Ok(value);
            }
            Err(e) => {
                log::warn!(
                    "⚠️  {} failed (attempt {}/{}): {}",
                    operation,
                    attempt,
                    policy.max_attempts,
                    e
                );

                if attempt >= policy.max_attempts {
                    log::error!(
                        "❌ {} giving up after {} attempts",
                        operation,
                        policy.max_attempts
                    );
                    return Err(e);
                }

                let delay = policy.next_delay(attempt);
                log::debug!("Backing off {:?} before retrying {}", delay, operation);
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CopyError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn quick_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new()
            .with_base_delay(Duration::from_millis(1))
            .with_max_delay(Duration::from_millis(8))
            .with_max_attempts(max_attempts)
    }

    #[test]
    fn ceilings_double_then_saturate() {
        let policy = RetryPolicy::default();
        let ceilings: Vec<Duration> = (1..=8).map(|n| policy.backoff_ceiling(n)).collect();

        // Strictly increasing until the cap, then flat at the cap.
        assert_eq!(ceilings[0], Duration::from_secs(1));
        assert_eq!(ceilings[1], Duration::from_secs(2));
        assert_eq!(ceilings[5], Duration::from_secs(32));
        for pair in ceilings.windows(2) {
            if pair[1] < Duration::from_secs(60) {
                assert!(pair[1] > pair[0]);
            }
        }
        assert_eq!(policy.backoff_ceiling(7), Duration::from_secs(60));
        assert_eq!(policy.backoff_ceiling(8), Duration::from_secs(60));
    }

    #[test]
    fn ceiling_does_not_overflow_for_large_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_ceiling(u32::MAX), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result = retry_with_backoff(&quick_policy(6), "test op", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 4 {
                    Err(CopyError::ConnectionError("socket closed".into()))
                } else {
                    Ok("copy text".to_string())
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "copy text");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<String> = retry_with_backoff(&quick_policy(6), "test op", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(CopyError::ApiError("server fault".into())) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 6);
        match result {
            Err(CopyError::ApiError(msg)) => assert_eq!(msg, "server fault"),
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn single_attempt_policy_never_sleeps() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = retry_with_backoff(&quick_policy(1), "test op", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(CopyError::UnknownError("boom".into())) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(result.is_err());
    }
}
