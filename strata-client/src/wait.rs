//! Condition polling
//!
//! Waits for an asynchronous condition to hold, bounded by a deadline.
//!
//! A condition is any `FnMut() -> Future<Output = Result<Option<T>, E>>`.
//! Arguments are bound by capturing them in the closure. `Ok(Some(value))`
//! ends the wait with `value`, `Ok(None)` means "not yet", and `Err(e)` ends
//! the wait with `e` unchanged.
//!
//! Evaluations within one session run strictly one after another, with exactly
//! one pending sleep between them. Sessions share nothing and may run
//! concurrently.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Default time between condition evaluations
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default total time budget of a wait session
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(600);

/// Errors produced by the poller itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitError {
    /// The deadline passed without the condition ever holding
    #[error("Condition not met within {max_wait:?} ({attempts} attempt(s))")]
    Timeout {
        /// Budget of the session
        max_wait: Duration,
        /// Number of evaluations performed
        attempts: u32,
    },

    /// The session's cancellation token fired
    #[error("Wait cancelled")]
    Cancelled,

    /// Rejected before the first evaluation
    #[error("Invalid wait configuration: {0}")]
    InvalidConfig(String),
}

/// Timing parameters of one wait session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    poll_interval: Duration,
    max_wait: Duration,
}

impl WaitConfig {
    /// Creates a validated configuration
    ///
    /// `poll_interval` must be non-zero and `max_wait` must be at least one
    /// `poll_interval`.
    pub fn new(poll_interval: Duration, max_wait: Duration) -> Result<Self, WaitError> {
        if poll_interval.is_zero() {
            return Err(WaitError::InvalidConfig(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        if max_wait < poll_interval {
            return Err(WaitError::InvalidConfig(format!(
                "max_wait ({:?}) must be at least poll_interval ({:?})",
                max_wait, poll_interval
            )));
        }

        Ok(Self {
            poll_interval,
            max_wait,
        })
    }

    /// Replaces the poll interval, keeping the budget
    pub fn with_poll_interval(self, poll_interval: Duration) -> Result<Self, WaitError> {
        Self::new(poll_interval, self.max_wait)
    }

    /// Replaces the budget, keeping the poll interval
    pub fn with_max_wait(self, max_wait: Duration) -> Result<Self, WaitError> {
        Self::new(self.poll_interval, max_wait)
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn max_wait(&self) -> Duration {
        self.max_wait
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }
}

/// Polls a condition until it holds, fails, times out or is cancelled
#[derive(Debug, Clone, Default)]
pub struct ConditionPoller {
    config: WaitConfig,
    cancel: Option<CancellationToken>,
}

impl ConditionPoller {
    pub fn new(config: WaitConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Aborts waits with [`WaitError::Cancelled`] once `token` fires.
    ///
    /// Cancellation is observed both while the condition is being evaluated and
    /// while sleeping between evaluations. A token that has already fired ends
    /// the session before the first evaluation.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &WaitConfig {
        &self.config
    }

    /// Runs one wait session.
    ///
    /// The deadline is fixed before the first evaluation, which happens
    /// immediately. The deadline is only checked between evaluations, so a
    /// timeout can be reported up to one evaluation plus one poll interval
    /// after `max_wait` has elapsed.
    ///
    /// Dropping the returned future cancels the session at its current
    /// suspension point.
    pub async fn wait<T, E, F, Fut>(&self, mut condition: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
        E: From<WaitError>,
    {
        let deadline = Instant::now() + self.config.max_wait;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            debug!(attempt = attempts, "Evaluating wait condition");

            let outcome = match &self.cancel {
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => return Err(WaitError::Cancelled.into()),
                    outcome = condition() => outcome,
                },
                None => condition().await,
            };

            if let Some(value) = outcome? {
                debug!(attempts, "Wait condition met");
                return Ok(value);
            }

            if Instant::now() >= deadline {
                warn!(
                    attempts,
                    "Wait condition not met within {:?}", self.config.max_wait
                );
                return Err(WaitError::Timeout {
                    max_wait: self.config.max_wait,
                    attempts,
                }
                .into());
            }

            match &self.cancel {
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => return Err(WaitError::Cancelled.into()),
                    _ = tokio::time::sleep(self.config.poll_interval) => {}
                },
                None => tokio::time::sleep(self.config.poll_interval).await,
            }
        }
    }
}

/// Waits for `condition` using `config`
///
/// Shorthand for `ConditionPoller::new(config).wait(condition)`.
pub async fn wait_for_condition<T, E, F, Fut>(config: WaitConfig, condition: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
    E: From<WaitError>,
{
    ConditionPoller::new(config).wait(condition).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, PartialEq)]
    enum TestError {
        Wait(WaitError),
        Boom(u32),
    }

    impl From<WaitError> for TestError {
        fn from(err: WaitError) -> Self {
            TestError::Wait(err)
        }
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn config(poll: u64, max: u64) -> WaitConfig {
        WaitConfig::new(secs(poll), secs(max)).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = WaitConfig::default();
        assert_eq!(config.poll_interval(), secs(5));
        assert_eq!(config.max_wait(), secs(600));
    }

    #[test]
    fn test_config_validation() {
        assert!(matches!(
            WaitConfig::new(Duration::ZERO, secs(10)),
            Err(WaitError::InvalidConfig(_))
        ));
        assert!(matches!(
            WaitConfig::new(secs(5), secs(4)),
            Err(WaitError::InvalidConfig(_))
        ));
        assert!(WaitConfig::new(secs(5), secs(5)).is_ok());
        assert!(WaitConfig::default().with_max_wait(secs(1)).is_err());
        assert_eq!(
            WaitConfig::default()
                .with_poll_interval(secs(1))
                .unwrap()
                .poll_interval(),
            secs(1)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_success_does_not_sleep() {
        let calls = AtomicU32::new(0);
        let calls = &calls;
        let start = Instant::now();

        let result: Result<&str, TestError> = wait_for_condition(config(1, 3), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some("ready"))
        })
        .await;

        assert_eq!(result, Ok("ready"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_when_never_true() {
        let calls = AtomicU32::new(0);
        let calls = &calls;
        let start = Instant::now();

        let result: Result<(), TestError> = wait_for_condition(config(1, 3), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        })
        .await;

        let attempts = calls.load(Ordering::SeqCst);
        assert!((3..=4).contains(&attempts), "attempts = {attempts}");
        assert_eq!(
            result,
            Err(TestError::Wait(WaitError::Timeout {
                max_wait: secs(3),
                attempts,
            }))
        );
        assert!(start.elapsed() >= secs(3));
        assert!(start.elapsed() <= secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolves_on_kth_evaluation() {
        let calls = AtomicU32::new(0);
        let calls = &calls;

        let result: Result<u32, TestError> = wait_for_condition(config(1, 10), move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok((n == 4).then_some(n * 10))
        })
        .await;

        assert_eq!(result, Ok(40));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_condition_error_propagates_unchanged() {
        let calls = AtomicU32::new(0);
        let calls = &calls;

        let result: Result<(), TestError> =
            wait_for_condition(config(1, 600), move || async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n == 2 { Err(TestError::Boom(n)) } else { Ok(None) }
            })
            .await;

        assert_eq!(result, Err(TestError::Boom(2)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overrun_is_bounded_by_one_evaluation_and_interval() {
        let start = Instant::now();

        let result: Result<(), TestError> = wait_for_condition(config(1, 3), || async {
            tokio::time::sleep(secs(2)).await;
            Ok(None)
        })
        .await;

        assert!(matches!(result, Err(TestError::Wait(WaitError::Timeout { .. }))));
        assert!(start.elapsed() <= secs(3 + 2 + 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_token_stops_wait() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(2500)).await;
            canceller.cancel();
        });

        let calls = AtomicU32::new(0);
        let calls = &calls;
        let start = Instant::now();

        let result: Result<(), TestError> = ConditionPoller::new(config(1, 600))
            .with_cancellation(token)
            .wait(move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(None)
            })
            .await;

        assert_eq!(result, Err(TestError::Wait(WaitError::Cancelled)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(start.elapsed(), Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_interrupts_slow_evaluation() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(secs(1)).await;
            canceller.cancel();
        });

        let calls = AtomicU32::new(0);
        let calls = &calls;
        let start = Instant::now();

        let result: Result<(), TestError> = ConditionPoller::new(config(1, 600))
            .with_cancellation(token)
            .wait(move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(secs(60)).await;
                Ok(Some(()))
            })
            .await;

        assert_eq!(result, Err(TestError::Wait(WaitError::Cancelled)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fired_token_ends_before_evaluating() {
        let token = CancellationToken::new();
        token.cancel();

        let calls = AtomicU32::new(0);
        let calls = &calls;
        let start = Instant::now();

        let result: Result<(), TestError> = ConditionPoller::new(config(1, 600))
            .with_cancellation(token)
            .wait(move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Some(()))
            })
            .await;

        assert_eq!(result, Err(TestError::Wait(WaitError::Cancelled)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_wait_stops_evaluating() {
        let calls = AtomicU32::new(0);
        let calls = &calls;

        let wait = wait_for_condition::<(), TestError, _, _>(config(1, 600), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        });
        assert!(tokio::time::timeout(Duration::from_millis(1500), wait).await.is_err());

        let seen = calls.load(Ordering::SeqCst);
        tokio::time::sleep(secs(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), seen);
    }
}
